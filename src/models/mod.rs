// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Archetype, BudgetBracket, BudgetRange, CatalogEntry, Category, ConfidenceTier, Destination,
    Dimension, DimensionVector, Interest, MonthlyTable, QuestionId, RawDimensionVector,
    ScoreBreakdown, ScoringParams, ScoringWeights, Season, TravelDates, TravelDna, UserProfile,
    DIMENSION_COUNT,
};
pub use requests::{QuizAnswers, TripRequest};
pub use responses::{
    Comparison, ComparisonReport, DestinationSummary, Explanation, ExplanationSource,
    ExplanationStatus, Insights, Recommendation, RecommendationReport,
};
