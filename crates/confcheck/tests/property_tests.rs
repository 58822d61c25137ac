//! Property-based tests for nebula-confcheck.

use nebula_confcheck::prelude::*;
use nebula_confcheck::suggest::{MAX_SUGGESTION_DISTANCE, best_suggestions, levenshtein};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// STRATEGIES
// ============================================================================

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(|s| json!(s)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| json!(m)),
        ]
    })
}

fn primitive(index: usize) -> Validator {
    match index % 6 {
        0 => string(),
        1 => bool(),
        2 => int(),
        3 => number(),
        4 => is_type(TypeTag::Null),
        _ => noop(),
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

proptest! {
    #[test]
    fn value_passes_check_for_its_own_tag(raw in json_value()) {
        let mut value = Value::from(raw);
        let tag = value.type_tag();
        prop_assert!(is_type(tag).validate(&mut value).is_ok());
    }

    #[test]
    fn value_fails_checks_for_other_tags(raw in json_value()) {
        let mut value = Value::from(raw);
        let own = value.type_tag();
        for tag in TypeTag::all().iter().copied().filter(|t| *t != own) {
            let outcome = is_type(tag).validate(&mut value);
            prop_assert!(!outcome.is_ok());
            prop_assert_eq!(outcome.mismatch().map(|m| m.actual), Some(own));
        }
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn compose_passes_iff_both_pass(value in scalar(), a in 0usize..6, b in 0usize..6) {
        let (first, second) = (primitive(a), primitive(b));
        let composed = compose(first.clone(), second.clone());

        let first_ok = first.validate(&mut value.clone()).is_ok();
        let second_ok = second.validate(&mut value.clone()).is_ok();
        prop_assert_eq!(composed.validate(&mut value.clone()).is_ok(), first_ok && second_ok);
    }

    #[test]
    fn either_passes_iff_any_passes(value in scalar(), picks in prop::collection::vec(0usize..6, 1..4)) {
        let alternatives: Vec<Validator> = picks.into_iter().map(primitive).collect();
        let any_ok = alternatives
            .iter()
            .any(|v| v.validate(&mut value.clone()).is_ok());
        let combined = either(alternatives);
        prop_assert_eq!(combined.validate(&mut value.clone()).is_ok(), any_ok);
    }

    #[test]
    fn array_passes_iff_every_element_passes(
        items in prop::collection::vec(scalar(), 0..6),
        pick in 0usize..6,
    ) {
        let element = primitive(pick);
        let all_ok = items
            .iter()
            .all(|item| element.validate(&mut item.clone()).is_ok());

        let outcome = array(element).validate(&mut Value::from(items.clone()));
        prop_assert_eq!(outcome.is_ok(), all_ok);
        prop_assert_eq!(outcome.items().len(), items.len());
    }

    #[test]
    fn defaulting_never_changes_the_verdict(value in scalar(), pick in 0usize..6) {
        let plain = primitive(pick);
        let defaulted = plain.default(1);
        prop_assert_eq!(
            plain.validate(&mut value.clone()).is_ok(),
            defaulted.validate(&mut value.clone()).is_ok()
        );
    }
}

// ============================================================================
// DEFAULT INJECTION
// ============================================================================

proptest! {
    #[test]
    fn second_validation_changes_nothing(present in prop::collection::btree_set("[a-c]", 0..3)) {
        let schema = object(schema! {
            "a" => int().default(1),
            "b" => string().default("x"),
            "c" => array(int()).default(Value::from(json!([]))),
        });
        let mut map = serde_json::Map::new();
        for key in present {
            let entry = match key.as_str() {
                "a" => json!(5),
                "b" => json!("y"),
                _ => json!([2]),
            };
            map.insert(key, entry);
        }
        let mut value = Value::from(serde_json::Value::Object(map));

        prop_assert!(schema.validate(&mut value).is_ok());
        let once = value.to_json();
        prop_assert!(schema.validate(&mut value).is_ok());
        prop_assert_eq!(value.to_json(), once);
    }
}

// ============================================================================
// SUGGESTIONS
// ============================================================================

proptest! {
    #[test]
    fn levenshtein_is_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_is_bounded_by_longer_length(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let distance = levenshtein(&a, &b);
        prop_assert!(distance <= a.len().max(b.len()));
        prop_assert!(distance >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn suggestions_are_within_range_and_tied(
        word in "[a-z]{1,8}",
        candidates in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let suggested = best_suggestions(&word, candidates.iter().map(String::as_str));
        if let Some(first) = suggested.first() {
            let best = levenshtein(&word, first);
            prop_assert!(best <= MAX_SUGGESTION_DISTANCE);
            for s in &suggested {
                prop_assert_eq!(levenshtein(&word, s), best);
            }
            for c in &candidates {
                prop_assert!(levenshtein(&word, c) >= best);
            }
        }
    }
}
