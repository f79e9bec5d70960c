//! Property-based tests for inference determinism and round-trip behavior.

use ini_doc::{from_str, from_str_with_options, to_git_string, to_string, Entry, IniMap, IniOptions, Value};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn section_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}".prop_map(|name| format!("[{}]", name))
}

// Whole and half-valued floats print and reparse without rounding drift.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<i32>().prop_map(|n| Value::Float(f64::from(n))),
        any::<i32>().prop_map(|n| Value::Float(f64::from(n) + 0.5)),
        "[a-z]{1,8}".prop_map(Value::Str),
    ]
}

// Top-level scalars first, then sections: the canonical layout that
// serializes and reparses without structural drift.
fn root_strategy() -> impl Strategy<Value = IniMap> {
    (
        prop::collection::vec((key_strategy(), scalar_strategy()), 0..5),
        prop::collection::vec(
            (
                section_name_strategy(),
                prop::collection::vec((key_strategy(), scalar_strategy()), 1..5),
            ),
            0..4,
        ),
    )
        .prop_map(|(scalars, sections)| {
            let mut root = IniMap::new();
            for (key, value) in scalars {
                root.insert(key, Entry::Scalar(value));
            }
            for (name, pairs) in sections {
                let section = root.section_mut(name);
                for (key, value) in pairs {
                    section.insert(key, value);
                }
            }
            root
        })
}

proptest! {
    #[test]
    fn prop_integer_text_infers_integer(n in any::<i64>()) {
        prop_assert_eq!(Value::infer(&n.to_string()), Value::Int(n));
    }

    #[test]
    fn prop_decimal_text_infers_float(int in 0i64..1_000_000, frac in 0u32..1000u32) {
        let text = format!("{}.{}", int, frac);
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(Value::infer(&text), Value::Float(expected));
    }

    #[test]
    fn prop_alphabetic_text_stays_string(s in "[a-zA-Z][a-zA-Z_]{0,15}") {
        prop_assert_eq!(Value::infer(&s), Value::Str(s.clone()));
    }

    #[test]
    fn prop_plain_round_trip(root in root_strategy()) {
        let text = to_string(&root);
        prop_assert_eq!(from_str(&text), root);
    }

    #[test]
    fn prop_git_format_round_trip(root in root_strategy()) {
        // Tabs trim away and headers still switch context, so the git layout
        // reparses to the same structure.
        let text = to_git_string(&root);
        prop_assert_eq!(from_str(&text), root);
    }

    #[test]
    fn prop_render_is_deterministic(root in root_strategy()) {
        prop_assert_eq!(to_string(&root), to_string(&root.clone()));
    }

    #[test]
    fn prop_last_write_wins(key in key_strategy(), a in any::<i64>(), b in any::<i64>()) {
        let text = format!("{key} = {a}\n{key} = {b}");
        let root = from_str(&text);
        prop_assert_eq!(root.len(), 1);
        prop_assert_eq!(
            root.get(&key).and_then(|e| e.as_scalar()),
            Some(&Value::Int(b))
        );
    }

    #[test]
    fn prop_convert_types_disabled_keeps_raw_text(raw in "[a-z0-9.]{1,10}") {
        let options = IniOptions::new().with_convert_types(false);
        let root = from_str_with_options(&format!("k = {}", raw), options);
        prop_assert_eq!(
            root.get("k").and_then(|e| e.as_scalar()).and_then(|v| v.as_str()),
            Some(raw.as_str())
        );
    }
}
