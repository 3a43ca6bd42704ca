use std::cmp::Ordering;

use crate::core::{
    filters::is_rankable,
    scoring::{calculate_confidence_score, score_in_window},
};
use crate::models::{Destination, ScoreBreakdown, ScoringParams, ScoringWeights, UserProfile};

/// A destination paired with its score breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDestination {
    pub destination: Destination,
    pub breakdown: ScoreBreakdown,
}

/// Result of the ranking process
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<ScoredDestination>,
    pub total_candidates: usize,
    /// Candidates skipped because they could not be scored
    pub excluded: usize,
}

/// Ranking orchestrator - scores every candidate and orders them
///
/// # Pipeline Stages
/// 1. Data-quality filter (unscorable destinations are skipped with a warning)
/// 2. Confidence scoring
/// 3. Ordering: confidence descending, destination id ascending
/// 4. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    params: ScoringParams,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, params: ScoringParams) -> Self {
        Self { weights, params }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            params: ScoringParams::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score a single destination for a profile
    pub fn score(&self, profile: &UserProfile, destination: &Destination) -> ScoreBreakdown {
        calculate_confidence_score(profile, destination, &self.weights, &self.params)
    }

    /// Rank candidate destinations for a profile
    ///
    /// # Arguments
    /// * `profile` - The session's user profile
    /// * `candidates` - Catalog destinations to consider
    /// * `limit` - Maximum number of destinations to return
    ///
    /// # Returns
    /// RankResult with a stable total order; an empty catalog yields an
    /// empty ranking
    pub fn rank(
        &self,
        profile: &UserProfile,
        candidates: &[Destination],
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let mut excluded = 0;
        let month_weights = profile.travel_dates.month_weights();

        let mut scored: Vec<(&Destination, ScoreBreakdown)> = candidates
            .iter()
            // Stage 1: skip destinations the scorer cannot handle
            .filter(|destination| {
                let ok = is_rankable(destination);
                if !ok {
                    excluded += 1;
                    tracing::warn!(
                        "Skipping destination {:?}: incomplete or out-of-range data",
                        destination.id
                    );
                }
                ok
            })
            // Stage 2: confidence scoring
            .map(|destination| {
                let breakdown = score_in_window(
                    profile,
                    destination,
                    &month_weights,
                    &self.weights,
                    &self.params,
                );
                (destination, breakdown)
            })
            .collect();

        // Stage 3: score descending, then id ascending for a total order
        scored.sort_by(|(a, a_score), (b, b_score)| compare_ranked(a, a_score, b, b_score));

        // Stage 4: limit
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates ({} excluded)",
            scored.len(),
            total_candidates,
            excluded
        );

        RankResult {
            ranked: scored
                .into_iter()
                .map(|(destination, breakdown)| ScoredDestination {
                    destination: destination.clone(),
                    breakdown,
                })
                .collect(),
            total_candidates,
            excluded,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn compare_ranked(
    a: &Destination,
    a_score: &ScoreBreakdown,
    b: &Destination,
    b_score: &ScoreBreakdown,
) -> Ordering {
    b_score
        .confidence
        .total_cmp(&a_score.confidence)
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Archetype, BudgetRange, Category, DimensionVector, Interest, TravelDates, TravelDna,
    };
    use chrono::NaiveDate;

    fn create_candidate(id: &str, cost: f64, dna: [f64; 7]) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Destination {}", id),
            country: "Testland".to_string(),
            category: Category::Adventure,
            description: String::new(),
            highlights: vec![],
            typical_cost: cost,
            best_seasons: vec![],
            weather_by_month: [0.7; 12],
            crowd_by_month: [0.4; 12],
            interests: [Interest::Adventure].into_iter().collect(),
            dna: DimensionVector::from_array(dna),
        }
    }

    fn create_profile() -> UserProfile {
        UserProfile {
            session_id: uuid::Uuid::nil(),
            dna: TravelDna {
                vector: DimensionVector::from_array([0.9, 0.2, 0.3, 0.1, 0.7, 0.2, 0.4]),
                archetype: Archetype::AdventureSeeker,
                archetype_match: 0.9,
            },
            budget: BudgetRange { min: 1000.0, max: 3000.0 },
            interests: [Interest::Adventure].into_iter().collect(),
            travel_dates: TravelDates {
                start: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, 10, 8).unwrap(),
            },
        }
    }

    #[test]
    fn test_rank_orders_by_confidence() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![
            create_candidate("far", 9000.0, [0.1, 0.9, 0.9, 0.9, 0.1, 0.9, 0.1]),
            create_candidate("close", 2000.0, [0.9, 0.2, 0.3, 0.1, 0.7, 0.2, 0.4]),
        ];

        let result = ranker.rank(&create_profile(), &candidates, 10);

        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].destination.id, "close");
        assert!(result.ranked[0].breakdown.confidence > result.ranked[1].breakdown.confidence);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let ranker = Ranker::with_default_weights();
        let dna = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5];
        let candidates = vec![
            create_candidate("charlie", 2000.0, dna),
            create_candidate("alpha", 2000.0, dna),
            create_candidate("bravo", 2000.0, dna),
        ];

        let result = ranker.rank(&create_profile(), &candidates, 10);
        let ids: Vec<&str> = result.ranked.iter().map(|r| r.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::with_default_weights();
        let candidates: Vec<Destination> = (0..20)
            .map(|i| create_candidate(&format!("d{:02}", i), 1000.0 + i as f64 * 100.0, [0.5; 7]))
            .collect();

        let result = ranker.rank(&create_profile(), &candidates, 5);
        assert_eq!(result.ranked.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_multi_century_window_ranks() {
        let mut profile = create_profile();
        profile.travel_dates = TravelDates {
            start: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
        };
        let ranker = Ranker::with_default_weights();
        let candidates: Vec<Destination> = (0..50)
            .map(|i| create_candidate(&format!("d{:02}", i), 1500.0 + i as f64 * 50.0, [0.5; 7]))
            .collect();

        let started = std::time::Instant::now();
        let result = ranker.rank(&profile, &candidates, 10);
        assert_eq!(result.ranked.len(), 10);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
        // Uniform tables: 0.6 * 0.7 + 0.4 * 0.6
        assert!((result.ranked[0].breakdown.environmental_fit - 0.66).abs() < 1e-9);
        assert_eq!(result.ranked[0].breakdown, ranker.score(&profile, &result.ranked[0].destination));
    }

    #[test]
    fn test_empty_catalog() {
        let result = Ranker::default().rank(&create_profile(), &[], 10);
        assert!(result.ranked.is_empty());
        assert_eq!(result.total_candidates, 0);
        assert_eq!(result.excluded, 0);
    }

    #[test]
    fn test_unscorable_destination_excluded() {
        let mut broken = create_candidate("broken", 2000.0, [0.5; 7]);
        broken.weather_by_month[0] = f64::NAN;
        let candidates = vec![broken, create_candidate("fine", 2000.0, [0.5; 7])];

        let result = Ranker::default().rank(&create_profile(), &candidates, 10);
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].destination.id, "fine");
        assert_eq!(result.excluded, 1);
    }
}
