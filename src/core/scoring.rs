use std::collections::BTreeSet;

use crate::core::distance::similarity;
use crate::models::{
    BudgetRange, Destination, DimensionVector, Interest, MonthlyTable, ScoreBreakdown,
    ScoringParams, ScoringWeights, UserProfile,
};

/// Calculate the confidence breakdown (all values 0-1) for a destination
///
/// Scoring formula (weighted geometric mean, weights normalized to sum 1):
/// confidence = (
///     max(budget_fit, ε) ^ 0.25 *        # Typical cost inside the budget range
///     max(dna_match, ε) ^ 0.20 *         # Profile vector close to destination vector
///     max(environmental_fit, ε) ^ 0.30 * # Good weather, thin crowds in the travel window
///     max(interest_alignment, ε) ^ 0.25  # Share of selected interests on offer
/// )
///
/// The breakdown reports the unfloored sub-scores; ε only enters the product.
pub fn calculate_confidence_score(
    profile: &UserProfile,
    destination: &Destination,
    weights: &ScoringWeights,
    params: &ScoringParams,
) -> ScoreBreakdown {
    let month_weights = profile.travel_dates.month_weights();
    score_in_window(profile, destination, &month_weights, weights, params)
}

/// [`calculate_confidence_score`] with the travel window's month weights
/// already computed, for scoring many destinations against one profile
pub fn score_in_window(
    profile: &UserProfile,
    destination: &Destination,
    month_weights: &MonthlyTable,
    weights: &ScoringWeights,
    params: &ScoringParams,
) -> ScoreBreakdown {
    let budget_fit = budget_fit(destination.typical_cost, &profile.budget, params);
    let dna_match = dna_match(&profile.dna.vector, &destination.dna);
    let environmental_fit = environmental_fit(destination, month_weights, params);
    let interest_alignment =
        interest_alignment(&profile.interests, &destination.interests, params);

    let confidence = weighted_geometric_mean(
        &[
            (budget_fit, weights.budget),
            (dna_match, weights.dna),
            (environmental_fit, weights.environment),
            (interest_alignment, weights.interest),
        ],
        params.epsilon,
    );

    ScoreBreakdown {
        budget_fit,
        dna_match,
        environmental_fit,
        interest_alignment,
        confidence,
    }
}

/// Weighted geometric mean of `(score, weight)` pairs
///
/// Scores are clamped to `[0, 1]` and floored at `epsilon` so that a single
/// zero cannot collapse the product. Weights are normalized by their sum;
/// a non-positive total yields 0.
pub fn weighted_geometric_mean(scores: &[(f64, f64)], epsilon: f64) -> f64 {
    let total_weight: f64 = scores.iter().map(|(_, w)| w.max(0.0)).sum();
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return 0.0;
    }

    let log_sum: f64 = scores
        .iter()
        .map(|(score, weight)| {
            let clamped = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
            weight.max(0.0) * clamped.max(epsilon).ln()
        })
        .sum();

    let mean = (log_sum / total_weight).exp();
    if mean.is_finite() {
        mean.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Calculate budget fit (0-1)
///
/// 1.0 inside the range. Above the maximum the score falls linearly and
/// reaches the floor at twice the maximum; below the minimum it loses at
/// most `under_budget_penalty`.
#[inline]
pub fn budget_fit(cost: f64, budget: &BudgetRange, params: &ScoringParams) -> f64 {
    let floor = params.budget_floor.clamp(0.0, 1.0);
    if !cost.is_finite() {
        return floor;
    }
    if budget.contains(cost) {
        return 1.0;
    }

    let score = if cost > budget.max {
        if budget.max <= 0.0 {
            return floor;
        }
        1.0 - (cost - budget.max) / budget.max
    } else {
        let shortfall = (budget.min - cost) / budget.min;
        1.0 - params.under_budget_penalty * shortfall.min(1.0)
    };

    score.clamp(floor, 1.0)
}

/// Calculate DNA match (0-1): one minus the normalized Euclidean distance
#[inline]
pub fn dna_match(user: &DimensionVector, destination: &DimensionVector) -> f64 {
    similarity(user, destination)
}

/// Mean of a monthly table over the travel window
///
/// `month_weights` is the window's share of travel days per month, as given
/// by [`crate::models::TravelDates::month_weights`].
pub fn window_mean(table: &MonthlyTable, month_weights: &MonthlyTable) -> f64 {
    month_weights
        .iter()
        .zip(table.iter())
        .map(|(weight, value)| weight * value)
        .sum::<f64>()
        .clamp(0.0, 1.0)
}

/// Calculate environmental fit (0-1)
///
/// Weighted average of weather suitability and inverse crowd density over
/// the travel window.
pub fn environmental_fit(
    destination: &Destination,
    month_weights: &MonthlyTable,
    params: &ScoringParams,
) -> f64 {
    let weather = window_mean(&destination.weather_by_month, month_weights);
    let calm = 1.0 - window_mean(&destination.crowd_by_month, month_weights);

    let total = params.weather_weight + params.crowd_weight;
    if total <= 0.0 {
        return ((weather + calm) / 2.0).clamp(0.0, 1.0);
    }

    ((weather * params.weather_weight + calm * params.crowd_weight) / total).clamp(0.0, 1.0)
}

/// Calculate interest alignment (0-1)
///
/// Fraction of the user's selected interests the destination offers
/// (intersection over selected, not Jaccard). No selection is neutral.
#[inline]
pub fn interest_alignment(
    selected: &BTreeSet<Interest>,
    tags: &BTreeSet<Interest>,
    params: &ScoringParams,
) -> f64 {
    if selected.is_empty() {
        return params.neutral_interest.clamp(0.0, 1.0);
    }
    let shared = selected.intersection(tags).count();
    shared as f64 / selected.len() as f64
}
