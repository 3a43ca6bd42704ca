use crate::core::scoring::window_mean;
use crate::models::{Destination, Insights, MonthlyTable, ScoreBreakdown, Season, UserProfile};

const STRENGTH_THRESHOLD: f64 = 0.8;
const CONCERN_THRESHOLD: f64 = 0.4;
const SUGGESTION_THRESHOLD: f64 = 0.7;
/// Mean crowd density above which a destination counts as busy
const CROWDED_THRESHOLD: f64 = 0.6;

/// Derive trade-off notes for a scored destination
///
/// Strengths are sub-scores at or above 0.8, concerns at or below 0.4.
/// Suggestions are emitted for sub-scores below 0.7 when there is something
/// actionable to say.
pub fn derive_insights(
    breakdown: &ScoreBreakdown,
    destination: &Destination,
    profile: &UserProfile,
) -> Insights {
    let month_weights = profile.travel_dates.month_weights();
    let crowd = window_mean(&destination.crowd_by_month, &month_weights);
    let in_season = destination.best_seasons.is_empty()
        || destination
            .best_seasons
            .contains(&Season::from_month(travel_month(&month_weights)));

    let mut strengths = Vec::new();
    if breakdown.budget_fit >= STRENGTH_THRESHOLD {
        strengths.push("Excellent budget fit".to_string());
    }
    if breakdown.dna_match >= STRENGTH_THRESHOLD {
        strengths.push("Strong personality match".to_string());
    }
    if breakdown.environmental_fit >= STRENGTH_THRESHOLD {
        strengths.push("Ideal conditions for your dates".to_string());
    }
    if breakdown.interest_alignment >= STRENGTH_THRESHOLD {
        strengths.push("Matches your interests".to_string());
    }

    let mut concerns = Vec::new();
    if breakdown.budget_fit <= CONCERN_THRESHOLD {
        concerns.push("May exceed your budget range".to_string());
    }
    if breakdown.environmental_fit <= CONCERN_THRESHOLD {
        if crowd >= CROWDED_THRESHOLD {
            concerns.push("Potentially crowded during your travel dates".to_string());
        }
        if !in_season {
            concerns.push("Not ideal season for this destination".to_string());
        }
    }
    if breakdown.interest_alignment <= CONCERN_THRESHOLD && !profile.interests.is_empty() {
        concerns.push("Offers few of your selected interests".to_string());
    }

    let mut suggestions = Vec::new();
    if breakdown.budget_fit < SUGGESTION_THRESHOLD && destination.typical_cost > profile.budget.max
    {
        let overshoot = destination.typical_cost - profile.budget.max;
        suggestions.push(format!(
            "Consider traveling in shoulder season to save ~${:.0}",
            overshoot
        ));
    }
    if breakdown.environmental_fit < SUGGESTION_THRESHOLD && !in_season {
        let seasons: Vec<&str> = destination.best_seasons.iter().map(|s| s.label()).collect();
        suggestions.push(format!(
            "For optimal experience, visit during {}",
            seasons.join(" or ")
        ));
    }
    if breakdown.environmental_fit < SUGGESTION_THRESHOLD && crowd >= CROWDED_THRESHOLD {
        suggestions.push("Consider early morning visits to popular attractions".to_string());
    }

    Insights {
        strengths,
        concerns,
        suggestions,
    }
}

/// Month carrying the most travel days (1-based)
fn travel_month(weights: &MonthlyTable) -> u32 {
    let mut best = 0;
    for (index, weight) in weights.iter().enumerate() {
        if *weight > weights[best] {
            best = index;
        }
    }
    best as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Archetype, BudgetRange, Category, DimensionVector, Interest, TravelDates, TravelDna,
    };
    use chrono::NaiveDate;

    fn create_test_destination() -> Destination {
        Destination {
            id: "santorini_gr".to_string(),
            name: "Santorini".to_string(),
            country: "Greece".to_string(),
            category: Category::Beach,
            description: String::new(),
            highlights: vec![],
            typical_cost: 4000.0,
            best_seasons: vec![Season::Spring, Season::Fall],
            weather_by_month: [0.5; 12],
            crowd_by_month: [0.9; 12],
            interests: [Interest::Beaches].into_iter().collect(),
            dna: DimensionVector::from_array([0.3, 0.8, 0.5, 0.7, 0.5, 0.3, 0.4]),
        }
    }

    fn create_test_profile(month: u32) -> UserProfile {
        UserProfile {
            session_id: uuid::Uuid::nil(),
            dna: TravelDna {
                vector: DimensionVector::from_array([0.2, 0.9, 0.3, 0.7, 0.6, 0.2, 0.2]),
                archetype: Archetype::RelaxationChaser,
                archetype_match: 0.8,
            },
            budget: BudgetRange { min: 1500.0, max: 3000.0 },
            interests: [Interest::Beaches].into_iter().collect(),
            travel_dates: TravelDates {
                start: NaiveDate::from_ymd_opt(2026, month, 3).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, month, 10).unwrap(),
            },
        }
    }

    #[test]
    fn test_strengths_from_high_scores() {
        let breakdown = ScoreBreakdown {
            budget_fit: 1.0,
            dna_match: 0.9,
            environmental_fit: 0.85,
            interest_alignment: 1.0,
            confidence: 0.93,
        };
        let insights = derive_insights(&breakdown, &create_test_destination(), &create_test_profile(5));
        assert_eq!(insights.strengths.len(), 4);
        assert!(insights.concerns.is_empty());
        assert!(insights.suggestions.is_empty());
    }

    #[test]
    fn test_concerns_and_suggestions_off_season() {
        let breakdown = ScoreBreakdown {
            budget_fit: 0.3,
            dna_match: 0.6,
            environmental_fit: 0.3,
            interest_alignment: 1.0,
            confidence: 0.45,
        };
        let insights = derive_insights(&breakdown, &create_test_destination(), &create_test_profile(7));

        assert!(insights.concerns.contains(&"May exceed your budget range".to_string()));
        assert!(insights
            .concerns
            .contains(&"Potentially crowded during your travel dates".to_string()));
        assert!(insights
            .concerns
            .contains(&"Not ideal season for this destination".to_string()));
        assert!(insights
            .suggestions
            .contains(&"Consider traveling in shoulder season to save ~$1000".to_string()));
        assert!(insights
            .suggestions
            .contains(&"For optimal experience, visit during Spring or Fall".to_string()));
    }
}
