// Criterion benchmarks for Voyage DNA

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voyage_dna::core::{calculate_confidence_score, distance::euclidean_distance, Ranker, TravelDnaProfiler};
use voyage_dna::models::{
    Archetype, BudgetRange, Destination, DimensionVector, Interest, QuestionId, QuizAnswers,
    ScoringParams, ScoringWeights, TravelDates, TravelDna, UserProfile,
};
use voyage_dna::services::builtin_destinations;

fn create_profile() -> UserProfile {
    UserProfile {
        session_id: uuid::Uuid::nil(),
        dna: TravelDna {
            vector: DimensionVector::from_array([0.4, 0.5, 0.8, 0.3, 0.5, 0.6, 0.5]),
            archetype: Archetype::CultureConnoisseur,
            archetype_match: 0.9,
        },
        budget: BudgetRange {
            min: 1500.0,
            max: 4000.0,
        },
        interests: [Interest::History, Interest::Food, Interest::Nature]
            .into_iter()
            .collect(),
        travel_dates: TravelDates {
            start: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
        },
    }
}

fn create_answers() -> QuizAnswers {
    QuizAnswers::new()
        .with(QuestionId::VacationInstinct, 2)
        .with(QuestionId::BudgetAllocation, 4)
        .with(QuestionId::TravelPace, 6)
        .with(QuestionId::Accommodation, 2)
        .with(QuestionId::ItineraryStructure, 5)
        .with(QuestionId::Activities, 5)
        .with(QuestionId::SocialImportance, 7)
        .with(QuestionId::Souvenir, 2)
}

/// Builtin catalog repeated with unique ids
fn scaled_catalog(size: usize) -> Vec<Destination> {
    let base = builtin_destinations();
    (0..size)
        .map(|i| {
            let mut destination = base[i % base.len()].clone();
            destination.id = format!("{}_{}", destination.id, i);
            destination.typical_cost += (i % 17) as f64 * 40.0;
            destination
        })
        .collect()
}

fn bench_euclidean_distance(c: &mut Criterion) {
    let a = DimensionVector::from_array([0.9, 0.1, 0.4, 0.2, 0.7, 0.3, 0.5]);
    let b = DimensionVector::from_array([0.3, 0.5, 0.95, 0.4, 0.4, 0.7, 0.6]);

    c.bench_function("euclidean_distance", |bench| {
        bench.iter(|| euclidean_distance(black_box(&a), black_box(&b)));
    });
}

fn bench_classify(c: &mut Criterion) {
    let profiler = TravelDnaProfiler::standard();
    let answers = create_answers();

    c.bench_function("classify_quiz", |b| {
        b.iter(|| profiler.classify(black_box(&answers)));
    });
}

fn bench_confidence_score(c: &mut Criterion) {
    let profile = create_profile();
    let destinations = builtin_destinations();
    let weights = ScoringWeights::default();
    let params = ScoringParams::default();

    c.bench_function("confidence_score", |b| {
        b.iter(|| {
            calculate_confidence_score(
                black_box(&profile),
                black_box(&destinations[0]),
                &weights,
                &params,
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for size in [25, 100, 500, 1000, 5000].iter() {
        let catalog = scaled_catalog(*size);

        group.bench_with_input(BenchmarkId::new("rank", size), size, |b, _| {
            b.iter(|| ranker.rank(black_box(&profile), black_box(&catalog), black_box(10)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_euclidean_distance,
    bench_classify,
    bench_confidence_score,
    bench_ranking
);

criterion_main!(benches);
