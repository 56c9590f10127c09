//! Transformation actions
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde_json::{Number, Value};
use sift_core::{add_issue, Config, Dataset, ErrorMessage, IssueKind, IssueSource, Unit};
use std::sync::Arc;

type Operation = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// A transformation action built from an operation on the value
///
/// The operation returns the replacement value, or `None` when the value
/// cannot be transformed; the latter is recorded as a transformation issue.
/// An absent value is passed through untouched.
#[derive(Clone)]
pub struct Transformation {
    unit_type: &'static str,
    label: &'static str,
    op: Operation,
    message: Option<ErrorMessage>,
}

impl Transformation {
    pub fn new(
        unit_type: &'static str,
        label: &'static str,
        op: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            unit_type,
            label,
            op: Arc::new(op),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl std::fmt::Debug for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformation")
            .field("unit_type", &self.unit_type)
            .finish_non_exhaustive()
    }
}

impl IssueSource for Transformation {
    fn kind(&self) -> IssueKind {
        IssueKind::Transformation
    }

    fn unit_type(&self) -> &str {
        self.unit_type
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for Transformation {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let Some(value) = dataset.value() else {
            return dataset;
        };
        match (self.op)(value) {
            Some(output) => dataset.set_value(output),
            None => add_issue(self, self.label, &mut dataset, config, None),
        }
        dataset
    }
}

fn map_str(value: &Value, f: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(s)),
        other => other.clone(),
    }
}

/// Remove leading and trailing whitespace from a string
pub fn trim() -> Transformation {
    Transformation::new("trim", "trim", |v| Some(map_str(v, |s| s.trim().to_string())))
}

pub fn to_lower_case() -> Transformation {
    Transformation::new("to_lower_case", "case", |v| Some(map_str(v, str::to_lowercase)))
}

pub fn to_upper_case() -> Transformation {
    Transformation::new("to_upper_case", "case", |v| Some(map_str(v, str::to_uppercase)))
}

fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::from(n));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

/// Convert strings and booleans to numbers
///
/// Strings that do not parse as a finite number are reported.
pub fn to_number() -> Transformation {
    Transformation::new("to_number", "number", |v| match v {
        Value::Number(_) => Some(v.clone()),
        Value::Bool(b) => Some(Value::from(u8::from(*b))),
        Value::String(s) => parse_number(s),
        _ => None,
    })
}

/// Replace the value with the result of `f`
pub fn transform(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Transformation {
    Transformation::new("transform", "input", move |v| Some(f(v.clone())))
}
