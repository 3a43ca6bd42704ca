//! Voyage DNA - travel personality profiling and destination ranking
//!
//! This library classifies a completed travel quiz into one of seven travel
//! archetypes and ranks a destination catalog by a confidence score: the
//! weighted geometric mean of budget fit, personality match, environmental
//! fit and interest alignment. Explanations for the top picks come from an
//! injected [`services::Explainer`].

pub mod config;
pub mod core;
pub mod models;
pub mod planner;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, TravelDnaProfiler};
pub use models::{
    Archetype, Destination, DimensionVector, RecommendationReport, ScoreBreakdown, ScoringWeights,
    TripRequest, UserProfile,
};
pub use planner::{ExplanationPolicy, PlanError, TripPlanner};
