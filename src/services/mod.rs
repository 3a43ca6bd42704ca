// Service exports
pub mod catalog;
pub mod destinations;
pub mod explainer;
pub mod gemini;

pub use catalog::{Catalog, CatalogError, CatalogStats, CostRange, ExploreFilter};
pub use destinations::builtin_destinations;
pub use explainer::{
    ComparedDestination, ComparisonRequest, Explainer, ExplainerError, ExplanationRequest,
    FallbackMode, TemplateExplainer,
};
pub use gemini::{GeminiConfig, GeminiExplainer};
