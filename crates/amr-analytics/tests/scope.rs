use amr_analytics::error::AnalyticsError;
use amr_analytics::scope::{Scope, resolve_scope, summarize_scope, taluks_in_scope};
use amr_analytics::weighted::AggregationStrategy;
use amr_core::models::entity::Entity;
use serde_json::json;

fn regions() -> Vec<Entity> {
    serde_json::from_value(json!([
        {
            "id": "dharwad",
            "name": "Dharwad District",
            "kind": "district",
            "total_households": 15420,
            "total_individuals": 67890,
            "active_ashas": 245,
            "indicators": {
                "self_medication": {
                    "name": "Self-Medication Rate",
                    "current": 42.1, "previous": 45.8, "target": 30.0,
                    "raw_data": { "numerator": 1955, "denominator": 4650 }
                },
                "misuse_awareness": {
                    "name": "Antibiotic Misuse Awareness",
                    "current": 65.4, "previous": 58.7
                }
            },
            "children": [
                {
                    "id": "hubli", "name": "Hubli", "kind": "taluk",
                    "total_individuals": 20000,
                    "indicators": {
                        "self_medication": {
                            "name": "Self-Medication Rate",
                            "current": 40.0, "previous": 41.0,
                            "raw_data": { "numerator": 400, "denominator": 1000 }
                        }
                    }
                },
                { "id": "kalghatgi", "name": "Kalghatgi", "kind": "taluk" }
            ]
        },
        {
            "id": "belagavi",
            "name": "Belagavi District",
            "kind": "district",
            "total_households": 10000,
            "total_individuals": 40000,
            "active_ashas": 180,
            "indicators": {
                "self_medication": {
                    "name": "Self-Medication Rate",
                    "current": 30.0, "previous": 32.0,
                    "raw_data": { "numerator": 900, "denominator": 3000 }
                },
                "misuse_awareness": {
                    "name": "Antibiotic Misuse Awareness",
                    "current": 50.0, "previous": 50.0
                }
            },
            "children": [
                { "id": "gokak", "name": "Gokak", "kind": "taluk" }
            ]
        }
    ]))
    .unwrap()
}

#[test]
fn selectors_map_to_scopes() {
    assert_eq!(Scope::from_selectors(None, None), Scope::All);
    assert_eq!(Scope::from_selectors(Some("all"), Some("ALL")), Scope::All);
    assert_eq!(
        Scope::from_selectors(Some("dharwad"), Some("all")),
        Scope::District {
            district: "dharwad".to_string()
        }
    );
    assert_eq!(
        Scope::from_selectors(Some("all"), Some("Hubli")),
        Scope::Taluk {
            district: None,
            taluk: "Hubli".to_string()
        }
    );
}

#[test]
fn resolves_districts_and_taluks() {
    let regions = regions();
    assert_eq!(resolve_scope(&regions, &Scope::All).unwrap().len(), 2);

    let one = resolve_scope(
        &regions,
        &Scope::District {
            district: "Belagavi District".to_string(),
        },
    )
    .unwrap();
    assert_eq!(one[0].id, "belagavi");

    let anywhere = resolve_scope(
        &regions,
        &Scope::Taluk {
            district: None,
            taluk: "Gokak".to_string(),
        },
    )
    .unwrap();
    assert_eq!(anywhere[0].id, "gokak");
}

#[test]
fn taluk_must_belong_to_the_named_district() {
    let regions = regions();
    let err = resolve_scope(
        &regions,
        &Scope::Taluk {
            district: Some("dharwad".to_string()),
            taluk: "Gokak".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticsError::UnknownTaluk(_)));

    let err = resolve_scope(
        &regions,
        &Scope::District {
            district: "mysuru".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticsError::UnknownDistrict(_)));
}

#[test]
fn taluk_listing_follows_scope() {
    let regions = regions();
    assert_eq!(taluks_in_scope(&regions, &Scope::All).unwrap().len(), 3);
    let dharwad = Scope::District {
        district: "dharwad".to_string(),
    };
    assert_eq!(taluks_in_scope(&regions, &dharwad).unwrap().len(), 2);
}

#[test]
fn all_scope_combines_across_districts() {
    let summary = summarize_scope(&regions(), &Scope::All).unwrap();

    assert_eq!(summary.entity_count, 2);
    assert_eq!(summary.total_households, 25420.0);
    assert_eq!(summary.total_individuals, 107890.0);
    assert_eq!(summary.active_ashas, 425);

    let self_med = &summary.indicators["self_medication"];
    assert_eq!(self_med.strategy, AggregationStrategy::PooledCounts);
    assert!((self_med.value - 2855.0 / 7650.0 * 100.0).abs() < 1e-9);

    let awareness = &summary.indicators["misuse_awareness"];
    assert_eq!(awareness.strategy, AggregationStrategy::PopulationWeighted);
    let expected = (65.4 * 67890.0 + 50.0 * 40000.0) / 107890.0;
    assert!((awareness.value - expected).abs() < 1e-9);

    assert!(!summary.indicators.contains_key("completion_rate"));
}

#[test]
fn single_entity_reports_its_own_values() {
    let scope = Scope::Taluk {
        district: Some("dharwad".to_string()),
        taluk: "hubli".to_string(),
    };
    let summary = summarize_scope(&regions(), &scope).unwrap();

    assert_eq!(summary.entity_count, 1);
    assert_eq!(summary.total_households, 0.0);
    let self_med = &summary.indicators["self_medication"];
    assert_eq!(self_med.strategy, AggregationStrategy::EntityValue);
    assert_eq!(self_med.value, 40.0);
    assert_eq!(summary.indicators.len(), 1);
}

#[test]
fn empty_dataset_summarizes_to_zero() {
    let summary = summarize_scope(&[], &Scope::All).unwrap();
    assert_eq!(summary.entity_count, 0);
    assert!(summary.indicators.is_empty());
}
