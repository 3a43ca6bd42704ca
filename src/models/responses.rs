use serde::{Deserialize, Serialize};

use crate::models::domain::{
    Archetype, BudgetBracket, Category, ConfidenceTier, Destination, Interest, ScoreBreakdown,
    TravelDna,
};

/// Where an explanation's prose came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationSource {
    Generated,
    Templated,
}

/// Natural-language justification for one recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub justification: String,
    pub regret_preview: String,
    pub source: ExplanationSource,
}

/// Outcome of the explanation step for a whole report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationStatus {
    /// The collaborator answered for the whole shortlist
    Generated,
    /// The collaborator was skipped or failed; templates were used
    Templated,
    /// No explanation text is attached
    Omitted,
}

/// Trade-off analysis derived from a score breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Destination fields exposed in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: Category,
    pub description: String,
    pub highlights: Vec<String>,
    pub typical_cost: f64,
    pub budget_bracket: BudgetBracket,
}

impl From<&Destination> for DestinationSummary {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            country: destination.country.clone(),
            category: destination.category,
            description: destination.description.clone(),
            highlights: destination.highlights.clone(),
            typical_cost: destination.typical_cost,
            budget_bracket: destination.budget_bracket(),
        }
    }
}

/// One ranked destination in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rank: usize,
    pub destination: DestinationSummary,
    pub breakdown: ScoreBreakdown,
    pub tier: ConfidenceTier,
    pub shared_interests: Vec<Interest>,
    pub insights: Insights,
    pub explanation: Option<Explanation>,
}

/// Response for a trip planning request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub session_id: uuid::Uuid,
    pub travel_dna: TravelDna,
    pub recommendations: Vec<Recommendation>,
    pub explanation_status: ExplanationStatus,
    pub total_candidates: usize,
    pub excluded_entries: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Side-by-side analysis of two destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub text: String,
    pub source: ExplanationSource,
}

/// Response for a destination comparison request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first: DestinationSummary,
    pub second: DestinationSummary,
    pub archetype: Archetype,
    pub comparison: Option<Comparison>,
    pub status: ExplanationStatus,
}
