// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod insights;
pub mod profiler;
pub mod questionnaire;
pub mod ranker;
pub mod scoring;

pub use distance::{euclidean_distance, max_distance, normalized_distance, similarity};
pub use filters::{is_rankable, shared_interests, validate_entry, IncompleteEntry};
pub use insights::derive_insights;
pub use profiler::{standard_centroid, ArchetypeCentroids, ProfileError, TravelDnaProfiler};
pub use questionnaire::{AnswerKey, ContributionTable, Question, QuestionKind, Questionnaire};
pub use ranker::{RankResult, Ranker, ScoredDestination};
pub use scoring::{calculate_confidence_score, score_in_window, weighted_geometric_mean};
