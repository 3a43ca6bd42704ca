//! Session pipeline: validate the request, profile the quiz, rank the
//! catalog, attach insights and explanations, assemble the report.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

use crate::core::{
    derive_insights, shared_interests, ProfileError, Ranker, ScoredDestination, TravelDnaProfiler,
};
use crate::models::{
    Archetype, Comparison, ComparisonReport, Destination, DestinationSummary, Explanation,
    ExplanationStatus, Recommendation, RecommendationReport, TripRequest, UserProfile,
};
use crate::services::{
    Catalog, ComparedDestination, ComparisonRequest, Explainer, ExplainerError,
    ExplanationRequest, FallbackMode, TemplateExplainer,
};

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown destination: {0}")]
    UnknownDestination(String),
}

impl From<ProfileError> for PlanError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidInput(msg) => PlanError::InvalidInput(msg),
        }
    }
}

impl From<validator::ValidationErrors> for PlanError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PlanError::InvalidInput(errors.to_string())
    }
}

/// How the explanation step is bounded and what replaces a failed call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplanationPolicy {
    pub timeout: Duration,
    /// Number of top recommendations sent to the explainer
    pub shortlist_size: usize,
    pub fallback: FallbackMode,
}

impl Default for ExplanationPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            shortlist_size: 3,
            fallback: FallbackMode::Template,
        }
    }
}

/// Trip planning orchestrator
///
/// Cheap to clone; the profiler, catalog and explainer are shared.
#[derive(Clone)]
pub struct TripPlanner {
    profiler: Arc<TravelDnaProfiler>,
    ranker: Ranker,
    catalog: Arc<Catalog>,
    explainer: Option<Arc<dyn Explainer>>,
    policy: ExplanationPolicy,
    default_limit: usize,
}

impl TripPlanner {
    pub fn new(profiler: Arc<TravelDnaProfiler>, ranker: Ranker, catalog: Arc<Catalog>) -> Self {
        Self {
            profiler,
            ranker,
            catalog,
            explainer: None,
            policy: ExplanationPolicy::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub fn with_policy(mut self, policy: ExplanationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ExplanationPolicy {
        &self.policy
    }

    /// Validate a request and build the session profile
    pub fn build_profile(&self, request: &TripRequest) -> Result<UserProfile, PlanError> {
        request.validate()?;
        let dna = self.profiler.classify(&request.answers)?;

        Ok(UserProfile {
            session_id: uuid::Uuid::new_v4(),
            dna,
            budget: request.budget(),
            interests: request.interests.clone(),
            travel_dates: request.travel_dates(),
        })
    }

    /// Plan a trip
    ///
    /// Only invalid input fails. Explanation problems are logged and
    /// resolved by the fallback policy; the ranking is never affected.
    pub async fn plan(&self, request: &TripRequest) -> Result<RecommendationReport, PlanError> {
        let profile = self.build_profile(request)?;
        let session = profile.session_id;
        let limit = request.limit.unwrap_or(self.default_limit);

        tracing::info!(
            "[{}] Profiled traveler as {} (match {:.2})",
            session,
            profile.dna.archetype,
            profile.dna.archetype_match
        );

        let result = self
            .ranker
            .rank(&profile, self.catalog.destinations(), limit);

        tracing::info!(
            "[{}] Ranked {} destinations from {} candidates",
            session,
            result.ranked.len(),
            result.total_candidates
        );

        let (explanations, explanation_status) =
            self.explain(&profile, &result.ranked).await;

        let recommendations = result
            .ranked
            .iter()
            .zip(explanations)
            .enumerate()
            .map(|(index, (scored, explanation))| Recommendation {
                rank: index + 1,
                destination: DestinationSummary::from(&scored.destination),
                breakdown: scored.breakdown,
                tier: scored.breakdown.tier(),
                shared_interests: shared_interests(&profile.interests, &scored.destination),
                insights: derive_insights(&scored.breakdown, &scored.destination, &profile),
                explanation,
            })
            .collect();

        Ok(RecommendationReport {
            session_id: session,
            travel_dna: profile.dna,
            recommendations,
            explanation_status,
            total_candidates: result.total_candidates,
            excluded_entries: self.catalog.excluded() + result.excluded,
            generated_at: chrono::Utc::now(),
        })
    }

    /// Compare two catalog destinations for a traveler archetype
    ///
    /// Bounded by the same timeout and fallback policy as plan explanations.
    pub async fn compare(
        &self,
        first: &str,
        second: &str,
        archetype: Archetype,
    ) -> Result<ComparisonReport, PlanError> {
        if first == second {
            return Err(PlanError::InvalidInput(format!(
                "cannot compare {} with itself",
                first
            )));
        }

        let a = self.destination(first)?;
        let b = self.destination(second)?;

        let request = ComparisonRequest {
            first: ComparedDestination::from(a),
            second: ComparedDestination::from(b),
            archetype,
        };

        let outcome = match &self.explainer {
            Some(explainer) => {
                let call = tokio::time::timeout(self.policy.timeout, explainer.compare(&request));
                match call.await.map_err(|_| ExplainerError::Timeout) {
                    Ok(Ok(comparison)) => Some(comparison),
                    Ok(Err(e)) | Err(e) => {
                        tracing::warn!(
                            "Explainer {} could not compare {} and {}, using {:?} fallback: {}",
                            explainer.name(),
                            first,
                            second,
                            self.policy.fallback,
                            e
                        );
                        None
                    }
                }
            }
            None => None,
        };

        let (comparison, status) = match outcome {
            Some(comparison) => (Some(comparison), ExplanationStatus::Generated),
            None => match self.policy.fallback {
                FallbackMode::Template => (
                    Some(TemplateExplainer::new().render_comparison(&request)),
                    ExplanationStatus::Templated,
                ),
                FallbackMode::None => (None::<Comparison>, ExplanationStatus::Omitted),
            },
        };

        Ok(ComparisonReport {
            first: DestinationSummary::from(a),
            second: DestinationSummary::from(b),
            archetype,
            comparison,
            status,
        })
    }

    fn destination(&self, id: &str) -> Result<&Destination, PlanError> {
        self.catalog
            .get(id)
            .ok_or_else(|| PlanError::UnknownDestination(id.to_string()))
    }

    /// One optional explanation per ranked destination, in rank order
    async fn explain(
        &self,
        profile: &UserProfile,
        ranked: &[ScoredDestination],
    ) -> (Vec<Option<Explanation>>, ExplanationStatus) {
        let mut explanations: Vec<Option<Explanation>> = vec![None; ranked.len()];
        let shortlist = &ranked[..ranked.len().min(self.policy.shortlist_size)];
        if shortlist.is_empty() {
            return (explanations, ExplanationStatus::Omitted);
        }

        let requests = explanation_requests(shortlist, profile.dna.archetype);

        let outcome = match &self.explainer {
            Some(explainer) => {
                match self.call_explainer(&**explainer, &requests).await {
                    Ok(generated) => Some(generated),
                    Err(e) => {
                        tracing::warn!(
                            "[{}] Explainer {} failed, using {:?} fallback: {}",
                            profile.session_id,
                            explainer.name(),
                            self.policy.fallback,
                            e
                        );
                        None
                    }
                }
            }
            None => None,
        };

        let (filled, status) = match outcome {
            Some(generated) => (generated, ExplanationStatus::Generated),
            None => match self.policy.fallback {
                FallbackMode::Template => {
                    let template = TemplateExplainer::new();
                    let rendered = requests.iter().map(|r| template.render(r)).collect();
                    (rendered, ExplanationStatus::Templated)
                }
                FallbackMode::None => return (explanations, ExplanationStatus::Omitted),
            },
        };

        for (slot, explanation) in explanations.iter_mut().zip(filled) {
            *slot = Some(explanation);
        }

        (explanations, status)
    }

    async fn call_explainer(
        &self,
        explainer: &dyn Explainer,
        requests: &[ExplanationRequest],
    ) -> Result<Vec<Explanation>, ExplainerError> {
        let generated = tokio::time::timeout(self.policy.timeout, explainer.explain(requests))
            .await
            .map_err(|_| ExplainerError::Timeout)??;

        if generated.len() != requests.len() {
            return Err(ExplainerError::MalformedResponse(format!(
                "expected {} explanations, got {}",
                requests.len(),
                generated.len()
            )));
        }

        Ok(generated)
    }
}

fn explanation_requests(
    shortlist: &[ScoredDestination],
    archetype: Archetype,
) -> Vec<ExplanationRequest> {
    shortlist
        .iter()
        .map(|scored| ExplanationRequest {
            destination_id: scored.destination.id.clone(),
            name: scored.destination.name.clone(),
            country: scored.destination.country.clone(),
            category: scored.destination.category,
            breakdown: scored.breakdown,
            archetype,
        })
        .collect()
}
