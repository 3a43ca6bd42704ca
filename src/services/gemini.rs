use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{Comparison, Explanation, ExplanationSource};
use crate::services::explainer::{
    ComparisonRequest, Explainer, ExplainerError, ExplanationRequest,
};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const JUSTIFICATION_MARKER: &str = "JUSTIFICATION:";
const REGRET_MARKER: &str = "REGRET_PREVIEW:";
const DEFAULT_REGRET: &str = "Consider your tolerance for potential crowds or weather variations.";

/// Connection settings for the Gemini adapter
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini `generateContent` client
///
/// Sends one request per destination; the requests of a shortlist run
/// concurrently and the first failure fails the whole call.
pub struct GeminiExplainer {
    config: GeminiConfig,
    client: Client,
}

impl GeminiExplainer {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self, ExplainerError> {
        if config.api_key.trim().is_empty() {
            return Err(ExplainerError::Unavailable("Gemini API key is empty".into()));
        }

        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self { config, client })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&self.config.model)
        )
    }

    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: String) -> Result<String, ExplainerError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1024,
            },
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ExplainerError::Api(format!(
                "Gemini returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ExplainerError::MalformedResponse(e.to_string()))?;

        if let Some(error) = result.error {
            return Err(ExplainerError::Api(error.message));
        }

        extract_text(&result)
            .ok_or_else(|| ExplainerError::MalformedResponse("no text in Gemini response".into()))
    }

    async fn explain_one(&self, request: &ExplanationRequest) -> Result<Explanation, ExplainerError> {
        tracing::debug!("Requesting explanation for {}", request.destination_id);

        let text = self.generate(build_prompt(request)).await?;
        parse_explanation(&text)
    }
}

#[async_trait]
impl Explainer for GeminiExplainer {
    async fn explain(
        &self,
        requests: &[ExplanationRequest],
    ) -> Result<Vec<Explanation>, ExplainerError> {
        try_join_all(requests.iter().map(|request| self.explain_one(request))).await
    }

    async fn compare(&self, request: &ComparisonRequest) -> Result<Comparison, ExplainerError> {
        tracing::debug!(
            "Requesting comparison of {} and {}",
            request.first.id,
            request.second.id
        );

        let text = self.generate(build_comparison_prompt(request)).await?;
        Ok(Comparison {
            text: text.trim().to_string(),
            source: ExplanationSource::Generated,
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Concatenated text parts of the first candidate
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Prompt asking for a justification and a regret preview
pub fn build_prompt(request: &ExplanationRequest) -> String {
    let b = &request.breakdown;
    format!(
        "You are a travel psychologist writing for a confidence-first trip planner.\n\
         Traveler personality: {archetype}\n\
         Destination: {name}, {country} ({category})\n\
         Match scores (0-1): budget {budget:.2}, personality {dna:.2}, \
         conditions {env:.2}, interests {interest:.2}, overall {confidence:.2}\n\n\
         Write two sections.\n\
         1. Why this trip: a personalized justification (80-120 words) of why the \
         destination fits this traveler's personality.\n\
         2. Regret preview: an honest preview (40-60 words) of trade-offs they might regret.\n\n\
         Format your response exactly as:\n\
         {JUSTIFICATION_MARKER} [text]\n\
         {REGRET_MARKER} [text]",
        archetype = request.archetype,
        name = request.name,
        country = request.country,
        category = request.category,
        budget = b.budget_fit,
        dna = b.dna_match,
        env = b.environmental_fit,
        interest = b.interest_alignment,
        confidence = b.confidence,
    )
}

/// Prompt asking for a side-by-side comparison of two destinations
pub fn build_comparison_prompt(request: &ComparisonRequest) -> String {
    let (a, b) = (&request.first, &request.second);
    format!(
        "You are a travel psychologist helping a traveler choose between two destinations.\n\
         Traveler personality: {archetype} ({traits})\n\n\
         Destination A: {a_name}, {a_country}\n\
         Category: {a_category}\n\
         Highlights: {a_highlights}\n\n\
         Destination B: {b_name}, {b_country}\n\
         Category: {b_category}\n\
         Highlights: {b_highlights}\n\n\
         Write a comparison (200-250 words) that covers:\n\
         1. How each destination matches this personality\n\
         2. The key difference that matters for this traveler\n\
         3. When to choose A over B and when to choose B over A\n\
         4. A clear recommendation with reasoning\n\n\
         Be balanced and honest about both options.",
        archetype = request.archetype,
        traits = request.archetype.traits(),
        a_name = a.name,
        a_country = a.country,
        a_category = a.category,
        a_highlights = a.highlights.join(", "),
        b_name = b.name,
        b_country = b.country,
        b_category = b.category,
        b_highlights = b.highlights.join(", "),
    )
}

/// Parse a `JUSTIFICATION:` / `REGRET_PREVIEW:` response
///
/// Lines after a marker continue its section. A missing justification is an
/// error; a missing regret preview gets a generic caution.
pub fn parse_explanation(text: &str) -> Result<Explanation, ExplainerError> {
    enum Section {
        None,
        Justification,
        Regret,
    }

    let mut justification = String::new();
    let mut regret = String::new();
    let mut section = Section::None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(JUSTIFICATION_MARKER) {
            section = Section::Justification;
            append(&mut justification, rest);
        } else if let Some(rest) = line.strip_prefix(REGRET_MARKER) {
            section = Section::Regret;
            append(&mut regret, rest);
        } else {
            match section {
                Section::Justification => append(&mut justification, line),
                Section::Regret => append(&mut regret, line),
                Section::None => {}
            }
        }
    }

    if justification.is_empty() {
        return Err(ExplainerError::MalformedResponse(
            "response has no JUSTIFICATION section".into(),
        ));
    }
    if regret.is_empty() {
        regret = DEFAULT_REGRET.to_string();
    }

    Ok(Explanation {
        justification,
        regret_preview: regret,
        source: ExplanationSource::Generated,
    })
}

fn append(buffer: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
}
