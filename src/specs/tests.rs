use super::*;
use crate::criteria::{Criterion, normalize_criteria};
use crate::vector::DeviceInput;
use proptest::prelude::*;

fn spec_fit(criteria: &[(&str, &str)], device: &DeviceInput) -> SpecFit {
    let raw: Vec<Criterion> = criteria
        .iter()
        .map(|(kind, description)| Criterion::new(*kind, *description))
        .collect();
    score_specifications(
        &normalize_criteria(&raw),
        &CharacteristicMap::from_device(device),
    )
}

mod characteristic_map_tests {
    use super::*;

    #[test]
    fn test_keys_are_folded_and_last_wins() {
        let device = DeviceInput::new("d1")
            .with_characteristic(" RAM ", "6")
            .with_characteristic("ram", "8")
            .with_characteristic("  ", "dropped");
        let map = CharacteristicMap::from_device(&device);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("ram"), Some("8"));
    }

    #[test]
    fn test_blank_only_device_is_empty() {
        let device = DeviceInput::new("d1").with_characteristic("  ", "dropped");
        let map = CharacteristicMap::from_device(&device);
        assert!(map.is_empty());
        assert_eq!(map.price(), None);
    }

    #[test]
    fn test_explicit_price_is_synthesized() {
        let device = DeviceInput::new("d1")
            .with_characteristic("preco", "999")
            .with_price(1600.0);
        let map = CharacteristicMap::from_device(&device);
        assert_eq!(map.get("preco"), Some("1600.00"));
        assert_eq!(map.price(), Some(1600.0));
    }

    #[test]
    fn test_price_key_fallback_order() {
        let device = DeviceInput::new("d1")
            .with_characteristic("preco", "consulte")
            .with_characteristic("valor", "1.299");
        let map = CharacteristicMap::from_device(&device);
        assert_eq!(map.price(), Some(1299.0));
        assert!(CharacteristicMap::new().price().is_none());
    }
}

mod numeric_score_tests {
    use super::*;

    #[test]
    fn test_equal_or_better_is_full() {
        assert_eq!(numeric_score(Some(8.0), Some(8.0)), 1.0);
        assert_eq!(numeric_score(Some(8.0), Some(12.0)), 1.0);
    }

    #[test]
    fn test_seventy_percent_is_zero() {
        assert_eq!(numeric_score(Some(10.0), Some(7.0)), 0.0);
        assert_eq!(numeric_score(Some(10.0), Some(5.0)), 0.0);
    }

    #[test]
    fn test_partial_credit() {
        let score = numeric_score(Some(5000.0), Some(4250.0));
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_values_score_zero() {
        assert_eq!(numeric_score(None, Some(8.0)), 0.0);
        assert_eq!(numeric_score(Some(8.0), None), 0.0);
    }

    proptest! {
        #[test]
        fn prop_numeric_score_monotonic_and_bounded(
            desired in 1.0f64..10_000.0,
            a in 0.0f64..1.2,
            b in 0.0f64..1.2,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_score = numeric_score(Some(desired), Some(desired * low));
            let high_score = numeric_score(Some(desired), Some(desired * high));
            prop_assert!((0.0..=1.0).contains(&low_score));
            prop_assert!((0.0..=1.0).contains(&high_score));
            prop_assert!(low_score <= high_score);
        }
    }
}

mod score_specifications_tests {
    use super::*;

    #[test]
    fn test_no_structured_criteria_is_neutral() {
        let fit = spec_fit(&[("texto_livre", "quero um celular bom")], &DeviceInput::new("d1"));
        assert_eq!(fit.score, 0.5);
        assert!(fit.per_criterion.is_empty());
    }

    #[test]
    fn test_ram_and_battery_scenario() {
        let device = DeviceInput::new("d1")
            .with_characteristic("ram", "8")
            .with_characteristic("battery", "5100");
        let fit = spec_fit(&[("ram", "8"), ("battery", "5000")], &device);

        assert_eq!(fit.per_criterion.len(), 2);
        assert!(fit.per_criterion.iter().all(|c| c.score >= 0.9));
        assert!(fit.score >= 0.95);
    }

    #[test]
    fn test_missing_characteristic_counts_as_zero() {
        let device = DeviceInput::new("d1").with_characteristic("ram", "8");
        let fit = spec_fit(&[("ram", "8"), ("battery", "5000")], &device);
        assert_eq!(fit.per_criterion[1].score, 0.0);
        assert_eq!(fit.score, 0.5);
    }

    #[test]
    fn test_price_range_weighs_double() {
        let device = DeviceInput::new("d1")
            .with_price(1600.0)
            .with_characteristic("ram", "4");
        let fit = spec_fit(&[("ram", "8"), ("preco_intervalo", "1200-2000")], &device);
        // ram scores 0, price scores 1 at weight 2 -> 2/3
        assert_eq!(fit.per_criterion[0].score, 0.0);
        assert_eq!(fit.per_criterion[1].score, 1.0);
        assert_eq!(fit.score, 0.6667);
    }

    #[test]
    fn test_text_criterion_matches_accent_insensitively() {
        let device = DeviceInput::new("d1").with_characteristic("cor", "Azul Petróleo");
        let fit = spec_fit(&[("cor", "petroleo")], &device);
        assert_eq!(fit.score, 1.0);

        let fit = spec_fit(&[("cor", "verde")], &device);
        assert_eq!(fit.score, 0.0);
    }

    #[test]
    fn test_generic_camera_is_text_matched() {
        let device = DeviceInput::new("d1").with_characteristic("camera", "Tripla 50MP");
        let fit = spec_fit(&[("camera", "50mp")], &device);
        assert_eq!(fit.score, 1.0);
    }

    #[test]
    fn test_per_criterion_preserves_order_and_tags() {
        let device = DeviceInput::new("d1");
        let fit = spec_fit(
            &[("battery", "5000"), ("texto_livre", "x"), ("screen_size", "6.5")],
            &device,
        );
        let tags: Vec<_> = fit.per_criterion.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["battery", "screen_size"]);
    }

    #[test]
    fn test_criterion_score_serializes_type_field() {
        let score = CriterionScore {
            tag: "ram".to_string(),
            kind: CriterionKind::Ram,
            score: 1.0,
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json, serde_json::json!({"type": "ram", "score": 1.0}));
    }
}
