//! Property-based testing strategies and engine properties
//!
//! This module provides proptest strategies for generating inputs, unit
//! plans and configurations, and checks the dataset invariants against them.

#![cfg(test)]

use crate::config::Config;
use crate::issue::IssueKind;
use crate::testing::{run_log, Probe};
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating JSON values with controlled depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,30}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            hash_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for generating unit kinds
pub fn issue_kind_strategy() -> impl Strategy<Value = IssueKind> {
    prop_oneof![
        Just(IssueKind::Schema),
        Just(IssueKind::Validation),
        Just(IssueKind::Transformation),
    ]
}

/// Strategy for generating a plan of units: kind and whether it fails
pub fn unit_plan_strategy() -> impl Strategy<Value = Vec<(IssueKind, bool)>> {
    vec((issue_kind_strategy(), any::<bool>()), 0..8)
}

/// Strategy for generating configurations
pub fn config_strategy() -> impl Strategy<Value = Config> {
    (
        option::of("[a-z]{2}"),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
    )
        .prop_map(|(lang, abort_early, abort_pipe_early)| Config {
            lang,
            abort_early,
            abort_pipe_early,
            ..Config::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, TypeState};
    use crate::issue::default_message;
    use crate::stringify::stringify;
    use crate::unit::Unit;

    proptest! {
        #[test]
        fn test_stringify_is_total(value in option::of(json_value_strategy())) {
            let rendered = stringify(value.as_ref());
            prop_assert!(!rendered.is_empty());
            if let Some(Value::String(s)) = &value {
                prop_assert_eq!(rendered, format!("\"{}\"", s));
            }
        }

        #[test]
        fn test_default_message_shape(
            label in "[a-z]{1,10}",
            expected in option::of("[a-z0-9>= ]{1,12}"),
            received in "[a-z0-9\"]{1,12}",
        ) {
            let message = default_message(&label, expected.as_deref(), &received);
            match expected {
                Some(expected) => prop_assert_eq!(
                    message,
                    format!("Invalid {}: Expected {} but received {}", label, expected, received)
                ),
                None => prop_assert_eq!(message, format!("Invalid {}: Received {}", label, received)),
            }
        }

        #[test]
        fn test_untyped_never_returns_to_typed(
            plan in unit_plan_strategy(),
            input in json_value_strategy(),
        ) {
            let log = run_log();
            let config = Config::new();
            let mut dataset = Dataset::new(input);
            let mut invalidated = false;

            for (kind, fails) in plan {
                let probe = if fails {
                    Probe::failing(kind, "probe", &log)
                } else {
                    Probe::passing(kind, "probe", &log)
                };
                dataset = Unit::run(&probe, dataset, &config);
                invalidated |= dataset.state() == TypeState::Untyped;
                if invalidated {
                    prop_assert!(!dataset.is_typed());
                }
            }
        }

        #[test]
        fn test_issues_follow_detection_order(
            failures in vec(any::<bool>(), 0..10),
            config in config_strategy(),
        ) {
            let log = run_log();
            let units: Vec<crate::UnitRef> = failures
                .iter()
                .enumerate()
                .map(|(i, fails)| {
                    let name = format!("v{}", i);
                    let probe = if *fails {
                        Probe::failing(IssueKind::Validation, &name, &log)
                    } else {
                        Probe::passing(IssueKind::Validation, &name, &log)
                    };
                    std::sync::Arc::new(probe) as crate::UnitRef
                })
                .collect();

            let dataset = crate::run(&units, Dataset::new(Value::Null), &config);
            let reported: Vec<String> = dataset
                .issues()
                .unwrap_or_default()
                .iter()
                .map(|issue| issue.issue_type.clone())
                .collect();
            let mut expected: Vec<String> = failures
                .iter()
                .enumerate()
                .filter(|(_, fails)| **fails)
                .map(|(i, _)| format!("v{}", i))
                .collect();
            if config.aborts_early() || config.aborts_pipe_early() {
                expected.truncate(1);
            }
            prop_assert_eq!(reported, expected);
        }
    }
}
