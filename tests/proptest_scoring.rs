//! Property-based tests for scoring and recommendation invariants.

use ecotrack::{
    catalog::InMemoryCatalog,
    model::Product,
    recommend::AlternativeFinder,
    scoring::{EcoPointsCalculator, EcoScore, ScoreCalculator},
    AnalysisConfig, CartAnalyzer, CartRequest,
};
use proptest::prelude::*;

fn attribute() -> impl Strategy<Value = f64> {
    prop_oneof![0.0..1_000.0f64, Just(0.0), Just(100.0), Just(500.0)]
}

fn catalog_strategy() -> impl Strategy<Value = Vec<(f64, f64, bool, u8)>> {
    prop::collection::vec((0.0..150.0f64, 0.0..700.0f64, any::<bool>(), 0u8..3), 1..25)
}

fn build_catalog(rows: &[(f64, f64, bool, u8)]) -> InMemoryCatalog {
    let categories = ["Beverages", "Snacks", "Dairy"];
    InMemoryCatalog::from_products(rows.iter().enumerate().map(
        |(i, &(carbon, waste, sustainable, category))| {
            Product::new(
                format!("p-{i}"),
                format!("Product {i}"),
                categories[usize::from(category)],
            )
            .with_footprint(carbon, waste)
            .sustainable(sustainable)
        },
    ))
    .unwrap()
}

proptest! {
    // Scoring is cheap, so use a wide sample.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn score_stays_in_range(carbon in attribute(), waste in attribute()) {
        let score = ScoreCalculator::default().compute_eco_score(carbon, waste).unwrap();
        prop_assert!(score <= EcoScore::MAX);
    }

    #[test]
    fn score_is_monotone_in_carbon(carbon in attribute(), extra in 0.0..200.0f64, waste in attribute()) {
        let calculator = ScoreCalculator::default();
        let lower = calculator.compute_eco_score(carbon, waste).unwrap();
        let higher = calculator.compute_eco_score(carbon + extra, waste).unwrap();
        prop_assert!(higher <= lower);
    }

    #[test]
    fn score_is_monotone_in_waste(carbon in attribute(), waste in attribute(), extra in 0.0..800.0f64) {
        let calculator = ScoreCalculator::default();
        let lower = calculator.compute_eco_score(carbon, waste).unwrap();
        let higher = calculator.compute_eco_score(carbon, waste + extra).unwrap();
        prop_assert!(higher <= lower);
    }

    #[test]
    fn saturated_components_contribute_nothing(carbon in 100.0..10_000.0f64, waste in 500.0..10_000.0f64) {
        let calculator = ScoreCalculator::default();
        prop_assert_eq!(calculator.compute_eco_score(carbon, waste).unwrap(), EcoScore::MIN);
        prop_assert_eq!(calculator.compute_eco_score(carbon, 0.0).unwrap().value(), 40);
        prop_assert_eq!(calculator.compute_eco_score(0.0, waste).unwrap().value(), 60);
    }

    #[test]
    fn negative_input_is_rejected(value in -1_000.0..-0.001f64) {
        let calculator = ScoreCalculator::default();
        prop_assert!(calculator.compute_eco_score(value, 0.0).is_err());
        prop_assert!(calculator.compute_eco_score(0.0, value).is_err());
    }

    #[test]
    fn points_never_below_minimum(original in 0u8..=100, alternative in 0u8..=100) {
        let points = EcoPointsCalculator::default().compute_eco_points(
            EcoScore::new(original).unwrap(),
            EcoScore::new(alternative).unwrap(),
        );
        prop_assert!(points >= 5);
        if alternative >= original + 5 {
            prop_assert_eq!(points, u32::from(alternative - original));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn alternatives_are_strictly_better_and_sorted(rows in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let catalog = build_catalog(&rows);
        let calculator = ScoreCalculator::default();
        let finder = AlternativeFinder::with_defaults(&catalog, &calculator);

        let source = catalog.all().nth(pick.index(catalog.len())).unwrap().clone();
        let source_score = calculator.score_product(&source).unwrap();
        let lookup = finder.find_alternatives(&source);
        let alternatives = lookup.alternatives();

        prop_assert!(!lookup.is_degraded());
        prop_assert!(alternatives.len() <= 3);
        for alternative in alternatives {
            prop_assert!(alternative.eco_score > source_score);
            prop_assert!(alternative.id() != &source.id);
            prop_assert!(alternative.product.is_sustainable);
            prop_assert_eq!(&alternative.product.category, &source.category);
        }
        prop_assert!(alternatives.windows(2).all(|w| w[0].eco_score >= w[1].eco_score));
    }

    #[test]
    fn cart_score_is_mean_of_members(rows in catalog_strategy()) {
        let catalog = build_catalog(&rows);
        let ids: Vec<String> = catalog.all().map(|p| p.id.to_string()).collect();
        let report = CartAnalyzer::new(&catalog, &AnalysisConfig::default())
            .analyze_cart(&CartRequest::new(ids.iter().map(String::as_str)))
            .unwrap();

        prop_assert_eq!(report.total_items, rows.len());
        let sum: u32 = report.products.iter().map(|p| u32::from(p.eco_score.value())).sum();
        let mean = (f64::from(sum) / rows.len() as f64).round() as u8;
        prop_assert_eq!(report.cart_green_score.value(), mean);
        prop_assert!(report
            .suggestions
            .iter()
            .all(|s| !s.original_product.product.is_sustainable));
    }
}
