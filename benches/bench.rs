// Criterion benchmarks for Outfit Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outfit_match::core::{filter_candidates, derive_slots, Matcher, MoodPaletteScorer};
use outfit_match::models::{Category, Color, Mood, Occasion, RequestContext, WardrobeItem, Weather};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

fn create_item(id: usize) -> WardrobeItem {
    let category = Category::ALL[id % Category::ALL.len()];
    let color = Color::ALL[id % Color::ALL.len()];
    WardrobeItem::new(id.to_string(), format!("Item {}", id), category).with_color(color)
}

fn create_context() -> RequestContext {
    RequestContext::new(Mood::Confident, Occasion::Party, Weather::Cold)
        .with_seed_category(Category::Top)
}

fn bench_derive_slots(c: &mut Criterion) {
    let context = create_context();

    c.bench_function("derive_slots", |b| {
        b.iter(|| derive_slots(black_box(&context)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let context = create_context();
    let fixed = Matcher::with_default_policy();
    let palette = Matcher::with_default_policy().with_scorer(Arc::new(MoodPaletteScorer));

    let mut group = c.benchmark_group("recommend");

    for wardrobe_size in [10, 50, 100, 500, 1000].iter() {
        let wardrobe: Vec<WardrobeItem> = (0..*wardrobe_size).map(create_item).collect();

        group.bench_with_input(
            BenchmarkId::new("fixed", wardrobe_size),
            wardrobe_size,
            |b, _| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| fixed.recommend(black_box(&wardrobe), black_box(&context), &mut rng));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mood_palette", wardrobe_size),
            wardrobe_size,
            |b, _| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| palette.recommend(black_box(&wardrobe), black_box(&context), &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let context = create_context();
    let wardrobe: Vec<WardrobeItem> = (0..1000).map(create_item).collect();
    let slots = derive_slots(&context).unwrap();

    c.bench_function("filter_candidates_1000_items", |b| {
        b.iter(|| {
            for slot in &slots {
                black_box(filter_candidates(black_box(&wardrobe), slot));
            }
        });
    });
}

criterion_group!(benches, bench_derive_slots, bench_recommend, bench_filtering);

criterion_main!(benches);
