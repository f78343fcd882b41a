// Integration tests for Outfit Match

use outfit_match::core::Matcher;
use outfit_match::models::{
    Category, Mood, Occasion, RequestContext, WardrobeItem, Weather, BOTTOM_SLOT, LAYER_SLOT,
    TOP_SLOT,
};
use outfit_match::MatchError;
use rand::{rngs::StdRng, SeedableRng};

fn create_item(id: &str, category: Category) -> WardrobeItem {
    WardrobeItem::new(id, format!("Item {}", id), category)
}

fn create_wardrobe() -> Vec<WardrobeItem> {
    vec![
        create_item("top-1", Category::Top),
        create_item("top-2", Category::Top),
        create_item("top-3", Category::Top),
        create_item("pants-1", Category::Pants),
        create_item("pants-2", Category::Pants),
        create_item("pants-3", Category::Pants),
        create_item("pants-4", Category::Pants),
        create_item("jacket-1", Category::Jacket),
        create_item("jacket-2", Category::Jacket),
        create_item("dress-1", Category::Dress),
        create_item("shoes-1", Category::Shoes),
        create_item("acc-1", Category::Accessory),
    ]
}

#[test]
fn test_integration_party_in_the_cold() {
    let matcher = Matcher::with_default_policy();
    let mut wardrobe = vec![
        create_item("t", Category::Top),
        create_item("p", Category::Pants),
        create_item("j", Category::Jacket),
    ];
    wardrobe.push(create_item("s", Category::Shoes));
    let context = RequestContext::new(Mood::Confident, Occasion::Party, Weather::Cold)
        .with_seed_category(Category::Top);

    let result = matcher
        .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(2024))
        .unwrap();

    let keys: Vec<&str> = result.selections.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![BOTTOM_SLOT, LAYER_SLOT]);
    assert_eq!(result.scores[BOTTOM_SLOT], 0.95);
    assert_eq!(result.scores[LAYER_SLOT], 0.88);

    let reasoning = result.rendered_reasoning();
    assert_eq!(reasoning.len(), 4);
    assert!(reasoning[0].contains('2'));
    assert!(reasoning[1].contains("party"));
    assert!(reasoning[2].contains("cold"));
    assert!(reasoning[3].contains("confident"));
}

#[test]
fn test_deterministic_under_fixed_seed() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();

    for weather in Weather::ALL {
        let context = RequestContext::new(Mood::Relaxed, Occasion::Daily, *weather)
            .with_seed_category(Category::Pants);

        for seed in 0..10 {
            let a = matcher
                .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let b = matcher
                .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(a.selections, b.selections);
        }
    }
}

#[test]
fn test_category_correctness_for_both_seeds() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();

    for (seed_category, complement_slot, complement) in [
        (Category::Top, BOTTOM_SLOT, Category::Pants),
        (Category::Pants, TOP_SLOT, Category::Top),
    ] {
        let context = RequestContext::new(Mood::Elegant, Occasion::Formal, Weather::Rainy)
            .with_seed_category(seed_category);

        for seed in 0..25 {
            let result = matcher
                .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            assert_eq!(result.selections[complement_slot].category, complement);
            assert_eq!(result.selections[LAYER_SLOT].category, Category::Jacket);
        }
    }
}

#[test]
fn test_selection_score_key_parity() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();

    for weather in Weather::ALL {
        for context in [
            RequestContext::new(Mood::Casual, Occasion::Daily, *weather),
            RequestContext::new(Mood::Casual, Occasion::Daily, *weather)
                .with_seed_category(Category::Top),
        ] {
            let result = matcher
                .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(1))
                .unwrap();

            let selection_keys: Vec<&String> = result.selections.keys().collect();
            let score_keys: Vec<&String> = result.scores.keys().collect();
            assert_eq!(selection_keys, score_keys);
            assert!(result.scores.values().all(|s| (0.0..=1.0).contains(s)));
        }
    }
}

#[test]
fn test_no_match_regardless_of_context() {
    let matcher = Matcher::default();
    let no_pants: Vec<WardrobeItem> = create_wardrobe()
        .into_iter()
        .filter(|item| item.category != Category::Pants)
        .collect();

    for weather in Weather::ALL {
        for mood in Mood::ALL {
            for occasion in Occasion::ALL {
                let context =
                    RequestContext::new(*mood, *occasion, *weather).with_seed_category(Category::Top);

                let err = matcher
                    .recommend(&no_pants, &context, &mut StdRng::seed_from_u64(0))
                    .unwrap_err();
                assert_eq!(
                    err,
                    MatchError::NoMatchFound {
                        category: Category::Pants
                    }
                );
            }
        }
    }
}

#[test]
fn test_empty_wardrobe_is_no_match() {
    let matcher = Matcher::default();
    let context = RequestContext::new(Mood::Casual, Occasion::Daily, Weather::Hot)
        .with_seed_category(Category::Pants);

    let err = matcher
        .recommend(&[], &context, &mut StdRng::seed_from_u64(0))
        .unwrap_err();

    assert_eq!(err, MatchError::NoMatchFound { category: Category::Top });
}

#[test]
fn test_invalid_seed_fails_before_filtering() {
    let matcher = Matcher::default();
    let context = RequestContext::new(Mood::Casual, Occasion::Daily, Weather::Hot)
        .with_seed_category(Category::Shoes);

    // An empty wardrobe would otherwise report NoMatchFound
    let err = matcher
        .recommend(&[], &context, &mut StdRng::seed_from_u64(0))
        .unwrap_err();

    assert!(matches!(err, MatchError::InvalidContext(_)));
}

#[test]
fn test_seed_item_anchors_outfit() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();
    let seed_item = wardrobe[0].clone();
    let context =
        RequestContext::new(Mood::Energetic, Occasion::Date, Weather::Hot).with_seed_item(seed_item);

    let result = matcher
        .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(8))
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.selections[BOTTOM_SLOT].category, Category::Pants);
}

#[test]
fn test_uniform_choice_reaches_every_candidate() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();
    let context = RequestContext::new(Mood::Casual, Occasion::Daily, Weather::Hot)
        .with_seed_category(Category::Top);
    let mut rng = StdRng::seed_from_u64(99);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let result = matcher.recommend(&wardrobe, &context, &mut rng).unwrap();
        seen.insert(result.selections[BOTTOM_SLOT].id.clone());
    }

    assert_eq!(seen.len(), 4, "expected all pants to be picked at least once");
}

#[test]
fn test_matcher_shared_across_threads() {
    let matcher = Matcher::default();
    let wardrobe = create_wardrobe();

    std::thread::scope(|scope| {
        for seed in 0..4u64 {
            let matcher = &matcher;
            let wardrobe = &wardrobe;
            scope.spawn(move || {
                let context = RequestContext::new(Mood::Casual, Occasion::Daily, Weather::Cool);
                let result = matcher
                    .recommend(wardrobe, &context, &mut StdRng::seed_from_u64(seed))
                    .unwrap();
                assert_eq!(result.len(), 3);
            });
        }
    });
}

#[test]
fn test_generate_mode_partial_wardrobe() {
    let matcher = Matcher::default();
    let context = RequestContext::new(Mood::Casual, Occasion::Daily, Weather::Cool);
    let wardrobe = vec![
        create_item("pants-1", Category::Pants),
        create_item("jacket-1", Category::Jacket),
    ];

    let result = matcher
        .recommend(&wardrobe, &context, &mut StdRng::seed_from_u64(5))
        .unwrap();

    let keys: Vec<&str> = result.selections.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![BOTTOM_SLOT, LAYER_SLOT]);
    assert_eq!(result.scores[BOTTOM_SLOT], 0.95);

    let shoes_only = vec![create_item("shoes-1", Category::Shoes)];
    let err = matcher
        .recommend(&shoes_only, &context, &mut StdRng::seed_from_u64(5))
        .unwrap_err();
    assert_eq!(err, MatchError::NoMatchFound { category: Category::Top });
}
