//! Explanation port.
//!
//! The planner talks to an [`Explainer`] for natural-language justifications
//! of the shortlist and for two-destination comparisons. Implementations may
//! call an external text-generation service; any failure is handled by the
//! caller's fallback policy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Archetype, Category, Comparison, Destination, Explanation, ExplanationSource, ScoreBreakdown,
};

/// Errors that can occur while generating explanations
#[derive(Debug, Error)]
pub enum ExplainerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Explanation service unavailable: {0}")]
    Unavailable(String),
}

/// Everything an explainer is told about one recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRequest {
    pub destination_id: String,
    pub name: String,
    pub country: String,
    pub category: Category,
    pub breakdown: ScoreBreakdown,
    pub archetype: Archetype,
}

/// Highlights sent per destination in a comparison
const COMPARED_HIGHLIGHTS: usize = 3;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedDestination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: Category,
    pub highlights: Vec<String>,
}

impl From<&Destination> for ComparedDestination {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            country: destination.country.clone(),
            category: destination.category,
            highlights: destination
                .highlights
                .iter()
                .take(COMPARED_HIGHLIGHTS)
                .cloned()
                .collect(),
        }
    }
}

/// Two destinations to contrast for a traveler
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRequest {
    pub first: ComparedDestination,
    pub second: ComparedDestination,
    pub archetype: Archetype,
}

/// What to attach when the explainer fails or times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Deterministic per-category text
    #[default]
    Template,
    /// Leave explanations empty
    None,
}

/// Source of recommendation explanations
///
/// Returns exactly one explanation per request, in request order.
#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(
        &self,
        requests: &[ExplanationRequest],
    ) -> Result<Vec<Explanation>, ExplainerError>;

    /// Contrast two destinations for the traveler's archetype
    async fn compare(&self, _request: &ComparisonRequest) -> Result<Comparison, ExplainerError> {
        Err(ExplainerError::Unavailable(format!(
            "{} explainer does not compare destinations",
            self.name()
        )))
    }

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Offline explainer producing per-category template text
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }

    /// Templated explanation for a single request
    pub fn render(&self, request: &ExplanationRequest) -> Explanation {
        let persona = request.archetype.name();
        let name = &request.name;

        let justification = match request.category {
            Category::Adventure => format!(
                "As a {persona}, you thrive on new challenges and authentic experiences. \
                 {name} offers exactly that: opportunities to push your boundaries while \
                 connecting with spectacular natural environments."
            ),
            Category::Cultural => format!(
                "Your {persona} profile shows deep curiosity about different ways of life. \
                 {name} provides rich cultural immersion through its history, traditions \
                 and local interactions."
            ),
            Category::Luxury => format!(
                "With your {persona} preferences, comfort and quality experiences matter most. \
                 {name} delivers exceptional service, refined amenities and exclusive access \
                 that align with your travel values."
            ),
            Category::Nature => format!(
                "Your {persona} traits indicate a strong connection to natural environments. \
                 {name} offers pristine landscapes and diverse ecosystems that will resonate \
                 with your values and rejuvenate your spirit."
            ),
            Category::Urban => format!(
                "As a {persona}, you enjoy vibrant energy and diverse experiences. \
                 {name} blends cultural attractions, culinary scenes and urban exploration \
                 at a pace that matches yours."
            ),
            Category::Beach => format!(
                "Your {persona} profile suggests you value relaxation and scenic beauty. \
                 {name} combines stunning coastlines, comfortable accommodations and room \
                 for both activity and rest."
            ),
            Category::Wellness => format!(
                "With your {persona} preferences, rejuvenation and self-care are priorities. \
                 {name} provides holistic wellness experiences in peaceful surroundings, \
                 exactly what your travel DNA seeks."
            ),
        };

        let regret_preview = match request.category {
            Category::Adventure => {
                "If you prefer predictable itineraries and constant comforts, the physical \
                 demands and unpredictability might challenge your expectations."
            }
            Category::Cultural => {
                "If you mainly seek relaxation or nightlife, the focus on historical sites \
                 and cultural activities might feel too structured."
            }
            Category::Luxury => {
                "If you look for rugged authenticity or budget experiences, the premium \
                 pricing and formal atmosphere may feel less appealing."
            }
            Category::Nature => {
                "If you crave urban excitement or constant connectivity, the remote \
                 locations and limited amenities may leave you wanting more."
            }
            Category::Urban => {
                "If you seek solitude or slow-paced relaxation, the city's noise and \
                 constant stimulation might feel overwhelming."
            }
            Category::Beach => {
                "Adventure-seekers and culture enthusiasts may find extended beach stays \
                 less stimulating than destinations with more varied activities."
            }
            Category::Wellness => {
                "If you want high-energy activities or extensive sightseeing, the \
                 wellness-focused pace may feel too gentle."
            }
        };

        Explanation {
            justification,
            regret_preview: regret_preview.to_string(),
            source: ExplanationSource::Templated,
        }
    }

    /// Templated comparison of two destinations
    pub fn render_comparison(&self, request: &ComparisonRequest) -> Comparison {
        let persona = request.archetype.name();
        let (a, b) = (&request.first, &request.second);
        let a_kind = a.category.label().to_lowercase();
        let b_kind = b.category.label().to_lowercase();

        let text = format!(
            "For a {persona}: {a_name} leans into {a_kind} travel, built around {a_focus}. \
             {b_name} centres on {b_kind} experiences such as {b_focus}, and may suit you \
             better if that side of travel matters more.\n\n\
             The real difference is {a_label} versus {b_label}. {a_name} rewards structured \
             discovery, while {b_name} leaves more room for spontaneity.\n\n\
             Pick {a_name} if you put {a_kind} first; pick {b_name} if you lean towards \
             {b_kind} and a looser itinerary.",
            a_name = a.name,
            b_name = b.name,
            a_label = a.category.label(),
            b_label = b.category.label(),
            a_focus = focus(a),
            b_focus = focus(b),
        );

        Comparison {
            text,
            source: ExplanationSource::Templated,
        }
    }
}

/// Leading highlight, or the category when none is listed
fn focus(destination: &ComparedDestination) -> String {
    destination
        .highlights
        .first()
        .map(|h| h.to_lowercase())
        .unwrap_or_else(|| format!("its {} side", destination.category.label().to_lowercase()))
}

#[async_trait]
impl Explainer for TemplateExplainer {
    async fn explain(
        &self,
        requests: &[ExplanationRequest],
    ) -> Result<Vec<Explanation>, ExplainerError> {
        Ok(requests.iter().map(|r| self.render(r)).collect())
    }

    async fn compare(&self, request: &ComparisonRequest) -> Result<Comparison, ExplainerError> {
        Ok(self.render_comparison(request))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request(category: Category) -> ExplanationRequest {
        ExplanationRequest {
            destination_id: "banff_ca".to_string(),
            name: "Banff".to_string(),
            country: "Canada".to_string(),
            category,
            breakdown: ScoreBreakdown {
                budget_fit: 1.0,
                dna_match: 0.8,
                environmental_fit: 0.7,
                interest_alignment: 1.0,
                confidence: 0.87,
            },
            archetype: Archetype::NatureImmerser,
        }
    }

    #[tokio::test]
    async fn test_template_explainer_one_per_request() {
        let requests = vec![
            create_test_request(Category::Nature),
            create_test_request(Category::Urban),
        ];
        let explanations = TemplateExplainer::new().explain(&requests).await.unwrap();

        assert_eq!(explanations.len(), 2);
        assert!(explanations[0].justification.contains("Nature Immerser"));
        assert!(explanations[0].justification.contains("Banff"));
        assert_eq!(explanations[0].source, ExplanationSource::Templated);
        assert_ne!(explanations[0].regret_preview, explanations[1].regret_preview);
    }

    #[test]
    fn test_template_is_deterministic() {
        let explainer = TemplateExplainer::new();
        let request = create_test_request(Category::Wellness);
        assert_eq!(explainer.render(&request), explainer.render(&request));
    }

    #[test]
    fn test_template_explainer_empty_batch() {
        let explanations = tokio_test::block_on(TemplateExplainer::new().explain(&[])).unwrap();
        assert!(explanations.is_empty());
    }

    fn create_test_comparison() -> ComparisonRequest {
        ComparisonRequest {
            first: ComparedDestination {
                id: "kyoto_jp".to_string(),
                name: "Kyoto".to_string(),
                country: "Japan".to_string(),
                category: Category::Cultural,
                highlights: vec!["Fushimi Inari shrine".to_string()],
            },
            second: ComparedDestination {
                id: "queenstown_nz".to_string(),
                name: "Queenstown".to_string(),
                country: "New Zealand".to_string(),
                category: Category::Adventure,
                highlights: vec![],
            },
            archetype: Archetype::CultureConnoisseur,
        }
    }

    #[tokio::test]
    async fn test_template_comparison() {
        let request = create_test_comparison();
        let comparison = TemplateExplainer::new().compare(&request).await.unwrap();

        assert_eq!(comparison.source, ExplanationSource::Templated);
        assert!(comparison.text.starts_with("For a Culture Connoisseur"));
        assert!(comparison.text.contains("fushimi inari shrine"));
        assert!(comparison.text.contains("its adventure side"));
        assert!(comparison.text.contains("Cultural versus Adventure"));
        assert_eq!(comparison, TemplateExplainer::new().render_comparison(&request));
    }

    #[test]
    fn test_compared_destination_keeps_three_highlights() {
        let destination = Destination {
            id: "rome_it".to_string(),
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            category: Category::Cultural,
            description: String::new(),
            highlights: ["Colosseum", "Vatican", "Trastevere", "Pantheon"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            typical_cost: 2800.0,
            best_seasons: vec![],
            weather_by_month: [0.7; 12],
            crowd_by_month: [0.6; 12],
            interests: Default::default(),
            dna: crate::models::DimensionVector::ZERO,
        };
        let compared = ComparedDestination::from(&destination);
        assert_eq!(compared.highlights, vec!["Colosseum", "Vatican", "Trastevere"]);
    }

    #[test]
    fn test_fallback_mode_parses_lowercase() {
        let mode: FallbackMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(mode, FallbackMode::None);
        assert_eq!(FallbackMode::default(), FallbackMode::Template);
    }
}
