//! Validation actions
//!
//! A validation inspects a typed value without changing it and records a
//! validation issue when its requirement does not hold. It does nothing on a
//! dataset that is not typed, so a value of the wrong type is reported once by
//! its schema rather than again by every validation behind it.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use serde_json::Value;
use sift_core::{add_issue, Config, Dataset, ErrorMessage, IssueKind, IssueSource, Unit};
use std::sync::{Arc, OnceLock};

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A validation action built from a predicate
#[derive(Clone)]
pub struct Validation {
    unit_type: &'static str,
    label: &'static str,
    expects: Option<String>,
    requirement: Option<Value>,
    test: Predicate,
    message: Option<ErrorMessage>,
}

impl Validation {
    /// Create a validation; `test` returns `true` for acceptable values
    pub fn new(
        unit_type: &'static str,
        label: &'static str,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            unit_type,
            label,
            expects: None,
            requirement: None,
            test: Arc::new(test),
            message: None,
        }
    }

    pub fn with_expects(mut self, expects: impl Into<String>) -> Self {
        self.expects = Some(expects.into());
        self
    }

    pub fn with_requirement(mut self, requirement: impl Into<Value>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Label used by the default message, e.g. `length`
    pub fn label(&self) -> &str {
        self.label
    }
}

impl std::fmt::Debug for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validation")
            .field("unit_type", &self.unit_type)
            .field("expects", &self.expects)
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

impl IssueSource for Validation {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn unit_type(&self) -> &str {
        self.unit_type
    }

    fn expects(&self) -> Option<&str> {
        self.expects.as_deref()
    }

    fn requirement(&self) -> Option<Value> {
        self.requirement.clone()
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for Validation {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if dataset.is_typed() && dataset.value().is_some_and(|v| !(self.test)(v)) {
            add_issue(self, self.label, &mut dataset, config, None);
        }
        dataset
    }
}

/// Length of a string in characters or of an array in elements
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// String or array with at least `min` characters or elements
pub fn min_length(min: usize) -> Validation {
    Validation::new("min_length", "length", move |v| {
        length(v).map_or(true, |len| len >= min)
    })
    .with_expects(format!(">={}", min))
    .with_requirement(min)
}

/// String or array with at most `max` characters or elements
pub fn max_length(max: usize) -> Validation {
    Validation::new("max_length", "length", move |v| {
        length(v).map_or(true, |len| len <= max)
    })
    .with_expects(format!("<={}", max))
    .with_requirement(max)
}

/// String or array that is not empty
pub fn non_empty() -> Validation {
    Validation::new("non_empty", "length", |v| length(v).map_or(true, |len| len > 0))
        .with_expects("!0")
}

/// Number no smaller than `min`
pub fn min_value(min: f64) -> Validation {
    Validation::new("min_value", "value", move |v| {
        v.as_f64().map_or(true, |n| n >= min)
    })
    .with_expects(format!(">={}", min))
    .with_requirement(min)
}

/// Number no larger than `max`
pub fn max_value(max: f64) -> Validation {
    Validation::new("max_value", "value", move |v| {
        v.as_f64().map_or(true, |n| n <= max)
    })
    .with_expects(format!("<={}", max))
    .with_requirement(max)
}

/// Number without a fractional part
pub fn integer() -> Validation {
    Validation::new("integer", "integer", |v| match v {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
        _ => true,
    })
}

/// String matching `pattern`
pub fn regex(pattern: Regex) -> Validation {
    let expects = format!("/{}/", pattern.as_str());
    let requirement = pattern.as_str().to_string();
    Validation::new("regex", "format", move |v| {
        v.as_str().map_or(true, |s| pattern.is_match(s))
    })
    .with_expects(expects)
    .with_requirement(requirement)
}

const EMAIL_PATTERN: &str =
    r"^[\w+-]+(?:\.[\w+-]+)*@[\da-zA-Z]+(?:[.-][\da-zA-Z]+)*\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// String shaped like an email address
pub fn email() -> Validation {
    Validation::new("email", "email", |v| {
        v.as_str().map_or(true, |s| email_regex().is_match(s))
    })
    .with_requirement(EMAIL_PATTERN)
}

/// Value accepted by a custom predicate
pub fn check(test: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Validation {
    Validation::new("check", "input", test)
}
