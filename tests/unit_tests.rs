// Unit tests for Voyage DNA

use std::collections::BTreeSet;

use chrono::NaiveDate;
use voyage_dna::core::{
    profiler::{ArchetypeCentroids, ProfileError, TravelDnaProfiler},
    questionnaire::{QuestionKind, Questionnaire},
    scoring::{budget_fit, calculate_confidence_score, interest_alignment, weighted_geometric_mean},
};
use voyage_dna::models::{
    Archetype, BudgetRange, Category, Destination, DimensionVector, Interest, QuestionId,
    QuizAnswers, ScoringParams, ScoringWeights, TravelDates, TravelDna, UserProfile,
};

fn create_destination(cost: f64, interests: &[Interest]) -> Destination {
    Destination {
        id: "test_destination".to_string(),
        name: "Test".to_string(),
        country: "Testland".to_string(),
        category: Category::Cultural,
        description: String::new(),
        highlights: vec![],
        typical_cost: cost,
        best_seasons: vec![],
        weather_by_month: [0.75; 12],
        crowd_by_month: [0.5; 12],
        interests: interests.iter().copied().collect(),
        dna: DimensionVector::from_array([0.3, 0.5, 0.95, 0.4, 0.4, 0.7, 0.6]),
    }
}

fn create_profile(interests: &[Interest]) -> UserProfile {
    UserProfile {
        session_id: uuid::Uuid::nil(),
        dna: TravelDna {
            vector: DimensionVector::from_array([0.3, 0.5, 0.9, 0.4, 0.4, 0.7, 0.6]),
            archetype: Archetype::CultureConnoisseur,
            archetype_match: 0.95,
        },
        budget: BudgetRange { min: 2000.0, max: 4000.0 },
        interests: interests.iter().copied().collect(),
        travel_dates: TravelDates {
            start: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 4, 17).unwrap(),
        },
    }
}

/// Valid answer range per question, from the standard quiz
fn answer_ranges() -> Vec<(QuestionId, u8, u8)> {
    Questionnaire::standard()
        .questions()
        .iter()
        .map(|q| match &q.kind {
            QuestionKind::Choice { options } => (q.id, 0, options.len() as u8 - 1),
            QuestionKind::Slider { min, max, .. } => (q.id, *min, *max),
        })
        .collect()
}

#[test]
fn test_profiler_output_normalized_for_sampled_inputs() {
    let profiler = TravelDnaProfiler::standard();
    let ranges = answer_ranges();

    // Deterministic linear congruential sweep over the answer space
    let mut state: u64 = 0x5eed;
    for _ in 0..2000 {
        let answers: QuizAnswers = ranges
            .iter()
            .map(|(question, lo, hi)| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let span = u64::from(hi - lo) + 1;
                (*question, lo + ((state >> 33) % span) as u8)
            })
            .collect();

        let dna = profiler.classify(&answers).unwrap();
        assert!(dna.vector.is_normalized(), "{:?}", dna.vector);
        assert!((0.0..=1.0).contains(&dna.archetype_match));
    }
}

#[test]
fn test_profiler_extremes_stay_normalized() {
    let profiler = TravelDnaProfiler::standard();
    for (question, lo, hi) in answer_ranges() {
        for value in lo..=hi {
            let answers: QuizAnswers = answer_ranges()
                .into_iter()
                .map(|(q, l, _)| (q, if q == question { value } else { l }))
                .collect();
            let vector = profiler.profile_vector(&answers).unwrap();
            assert!(vector.is_normalized());
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    let profiler = TravelDnaProfiler::standard();
    let answers: QuizAnswers = answer_ranges()
        .into_iter()
        .map(|(q, lo, hi)| (q, (lo + hi) / 2))
        .collect();

    let first = profiler.classify(&answers).unwrap();
    for _ in 0..10 {
        assert_eq!(profiler.classify(&answers).unwrap(), first);
    }
}

#[test]
fn test_all_adventure_answers() {
    let answers = QuizAnswers::new()
        .with(QuestionId::VacationInstinct, 0)
        .with(QuestionId::BudgetAllocation, 0)
        .with(QuestionId::TravelPace, 10)
        .with(QuestionId::Accommodation, 0)
        .with(QuestionId::ItineraryStructure, 10)
        .with(QuestionId::Activities, 0)
        .with(QuestionId::SocialImportance, 10)
        .with(QuestionId::Souvenir, 0);

    let dna = TravelDnaProfiler::standard().classify(&answers).unwrap();
    assert!(dna.vector.adventure >= 0.8);
    assert!(dna.vector.comfort <= 0.2);
    assert_eq!(dna.archetype, Archetype::AdventureSeeker);
}

#[test]
fn test_too_few_answers_rejected() {
    let profiler = TravelDnaProfiler::standard();
    let answers = QuizAnswers::new().with(QuestionId::TravelPace, 5);
    assert!(matches!(
        profiler.classify(&answers),
        Err(ProfileError::InvalidInput(_))
    ));
}

#[test]
fn test_centroid_classifies_as_itself() {
    let centroids = ArchetypeCentroids::standard();
    for (archetype, centroid) in centroids.iter() {
        let (nearest, distance) = centroids.nearest(centroid);
        assert_eq!(nearest, *archetype);
        assert_eq!(distance, 0.0);
    }
}

#[test]
fn test_sub_scores_and_aggregate_bounded() {
    let weights = ScoringWeights::default();
    let params = ScoringParams::default();
    let profile = create_profile(&[Interest::History, Interest::Food]);

    for cost in [0.0, 500.0, 2000.0, 3000.0, 4000.0, 7000.0, 50_000.0] {
        let destination = create_destination(cost, &[Interest::History]);
        let b = calculate_confidence_score(&profile, &destination, &weights, &params);
        for value in [
            b.budget_fit,
            b.dna_match,
            b.environmental_fit,
            b.interest_alignment,
            b.confidence,
        ] {
            assert!((0.0..=1.0).contains(&value), "cost {}: {:?}", cost, b);
        }
    }
}

#[test]
fn test_aggregate_monotone_in_each_sub_score() {
    let weights = [0.25, 0.20, 0.30, 0.25];
    let base = [0.6, 0.5, 0.7, 0.4];

    for slot in 0..4 {
        let mut previous = 0.0;
        for step in 0..=20 {
            let mut scores = base;
            scores[slot] = step as f64 / 20.0;
            let pairs: Vec<(f64, f64)> = scores.iter().copied().zip(weights).collect();
            let value = weighted_geometric_mean(&pairs, 0.05);
            assert!(value >= previous, "slot {} step {}", slot, step);
            previous = value;
        }
    }
}

#[test]
fn test_budget_midpoint_scores_one() {
    let budget = BudgetRange { min: 1500.0, max: 4500.0 };
    assert_eq!(budget_fit(budget.midpoint(), &budget, &ScoringParams::default()), 1.0);
}

#[test]
fn test_empty_destination_tags() {
    let profile = create_profile(&[Interest::Beaches, Interest::Shopping]);
    let destination = create_destination(3000.0, &[]);

    let breakdown = calculate_confidence_score(
        &profile,
        &destination,
        &ScoringWeights::default(),
        &ScoringParams::default(),
    );

    assert_eq!(breakdown.interest_alignment, 0.0);
    assert!(breakdown.confidence > 0.0);
}

#[test]
fn test_interest_alignment_is_not_jaccard() {
    let params = ScoringParams::default();
    let selected: BTreeSet<Interest> = [Interest::Food].into_iter().collect();
    let tags: BTreeSet<Interest> = [
        Interest::Food,
        Interest::Cities,
        Interest::History,
        Interest::Culture,
    ]
    .into_iter()
    .collect();
    assert_eq!(interest_alignment(&selected, &tags, &params), 1.0);
}

#[test]
fn test_custom_weights_shift_ranking_inputs() {
    let profile = create_profile(&[Interest::History]);
    let destination = create_destination(9000.0, &[Interest::History]);
    let params = ScoringParams::default();

    let default_score =
        calculate_confidence_score(&profile, &destination, &ScoringWeights::default(), &params);
    let budget_heavy = calculate_confidence_score(
        &profile,
        &destination,
        &ScoringWeights {
            budget: 0.7,
            dna: 0.1,
            environment: 0.1,
            interest: 0.1,
        },
        &params,
    );

    assert!(budget_heavy.confidence < default_score.confidence);
    assert_eq!(budget_heavy.budget_fit, default_score.budget_fit);
}
