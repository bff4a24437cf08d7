//! Properties of the explainer over generated value trees.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use whydiff_core::{explain, ExplainOptions, Finding, RecordingSink, Value};

const ROOT: &str = "v";

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        (-3i64..3).prop_map(serde_json::Value::from),
        "[a-c]{0,2}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(8, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-d]{1,2}", inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Nesting depth of a label built from `ROOT`; generated keys never contain
/// `.` or `[`, so each accessor counts once
fn label_depth(label: &str) -> usize {
    label.matches('.').count() + label.matches('[').count()
}

fn run(before: &Value, after: &Value, options: &ExplainOptions) -> RecordingSink {
    let mut sink = RecordingSink::new();
    explain(ROOT, before, after, options, &mut sink);
    sink
}

proptest! {
    #[test]
    fn prop_output_is_balanced_with_at_most_one_group(
        a in json_value(),
        b in json_value(),
    ) {
        let sink = run(&Value::from(a), &Value::from(b), &ExplainOptions::default());
        prop_assert!(sink.is_balanced());
        prop_assert!(sink.groups_opened() <= 1);
    }

    #[test]
    fn prop_no_line_is_deeper_than_max_depth(
        a in json_value(),
        b in json_value(),
        max_depth in 0i32..5,
    ) {
        let options = ExplainOptions::new().with_max_depth(max_depth);
        let sink = run(&Value::from(a), &Value::from(b), &options);
        let ceiling = usize::try_from(max_depth).unwrap();
        for (label, finding) in sink.lines() {
            let depth = label_depth(label);
            match finding {
                // Exclusion notes are labelled with the child they skip
                Finding::SkippingExcludedField => prop_assert!(depth <= ceiling + 1),
                Finding::DepthLimit => prop_assert_eq!(depth, ceiling),
                _ => prop_assert!(depth <= ceiling, "{} at depth {}", label, depth),
            }
        }
    }

    #[test]
    fn prop_explaining_is_deterministic(a in json_value(), b in json_value()) {
        let before = Value::from(a);
        let after = Value::from(b);
        let first = run(&before, &after, &ExplainOptions::default());
        let second = run(&before, &after, &ExplainOptions::default());
        prop_assert_eq!(first.events(), second.events());
    }

    #[test]
    fn prop_same_reference_short_circuits(a in json_value()) {
        let value = Value::from(a);
        let sink = run(&value, &value.clone(), &ExplainOptions::default());
        prop_assert_eq!(sink.lines(), vec![(ROOT, Finding::TopLevelRefEqual)]);
        prop_assert_eq!(sink.groups_opened(), 0);
    }

    #[test]
    fn prop_rebuilt_copies_never_report_empty_sides(a in json_value()) {
        let before = Value::from(a.clone());
        let after = Value::from(a);
        let sink = run(&before, &after, &ExplainOptions::default());
        for finding in sink.findings() {
            prop_assert!(
                !matches!(finding, Finding::BeforeEmpty | Finding::AfterEmpty),
                "unexpected {:?}",
                finding
            );
        }
    }
}
