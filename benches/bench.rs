// Criterion benchmarks for NutriAI

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutri_algo::core::{estimate_daily_calories, filter_eligible, generate_combos, FoodCatalog, Recommender};
use nutri_algo::models::{ActivityLevel, DietaryPreference, FoodItem, Gender, Goal, Profile};
use std::collections::BTreeSet;

const TAGS: [&str; 6] = ["grain", "vegetable", "legume", "meat", "dairy", "eggs"];

fn create_item(id: usize) -> FoodItem {
    FoodItem {
        name: format!("Food {}", id),
        kcal: 80.0 + (id % 12) as f64 * 40.0,
        protein_g: 2.0 + (id % 9) as f64 * 3.5,
        carbs_g: (id % 15) as f64 * 5.0,
        price_ksh: 10.0 + (id % 20) as f64 * 8.0,
        tags: [TAGS[id % TAGS.len()].to_string()].into_iter().collect(),
    }
}

fn create_catalog(size: usize) -> FoodCatalog {
    FoodCatalog::new((0..size).map(create_item).collect()).unwrap()
}

fn create_profile(dietary_preference: DietaryPreference) -> Profile {
    Profile {
        age: 30,
        gender: Gender::Female,
        weight_kg: 65.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        dietary_preference,
        daily_budget_ksh: 300.0,
        allergies: ["nuts".to_string()].into_iter().collect(),
        dislikes: BTreeSet::new(),
    }
}

fn bench_energy_estimate(c: &mut Criterion) {
    let profile = create_profile(DietaryPreference::None);
    c.bench_function("estimate_daily_calories", |b| {
        b.iter(|| estimate_daily_calories(black_box(&profile)))
    });
}

fn bench_filtering(c: &mut Criterion) {
    let catalog = create_catalog(200);
    let profile = create_profile(DietaryPreference::Vegan);

    c.bench_function("filter_eligible_200_items", |b| {
        b.iter(|| filter_eligible(black_box(&profile), black_box(catalog.items())))
    });
}

fn bench_generation(c: &mut Criterion) {
    let catalog = create_catalog(100);
    let eligible: Vec<&FoodItem> = catalog.items().iter().collect();

    c.bench_function("generate_combos_100_items", |b| {
        b.iter(|| generate_combos(black_box(&eligible)))
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let profile = create_profile(DietaryPreference::None);

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 200].iter() {
        let catalog = create_catalog(*catalog_size);

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&profile), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_energy_estimate,
    bench_filtering,
    bench_generation,
    bench_recommend
);

criterion_main!(benches);
