//! Caller-facing entry points
//!
//! [`validate`] returns the raw dataset. The parse functions wrap it in
//! forms that are easier to consume: a result record, a `Result`, or a plain
//! boolean.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{flatten, summarize, FlatErrors, Issue};
use crate::unit::{AsyncUnit, Unit};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Run a schema against an input
pub fn validate<S: Unit + ?Sized>(schema: &S, input: Value, config: &Config) -> Dataset {
    let dataset = schema.run(Dataset::new(input), config);
    debug!(
        schema = %schema.unit_type(),
        typed = dataset.is_typed(),
        issue_count = dataset.issue_count(),
        "validation finished"
    );
    dataset
}

/// Run an async schema against an input
pub async fn validate_async<S: AsyncUnit + ?Sized>(
    schema: &S,
    input: Value,
    config: &Config,
) -> Dataset {
    let dataset = schema.run_async(Dataset::new(input), config).await;
    debug!(
        schema = %schema.unit_type(),
        typed = dataset.is_typed(),
        issue_count = dataset.issue_count(),
        "async validation finished"
    );
    dataset
}

/// Outcome of a non-failing parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafeParseResult {
    /// True when the output is typed and no issue was recorded
    pub success: bool,
    pub typed: bool,
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
}

impl From<Dataset> for SafeParseResult {
    fn from(dataset: Dataset) -> Self {
        let (output, typed, issues) = dataset.into_parts();
        let success = typed && issues.as_ref().map_or(true, Vec::is_empty);
        Self {
            success,
            typed,
            output,
            issues,
        }
    }
}

/// Validation failure returned by [`parse`]
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// Issue messages grouped by location
    pub fn flatten(&self) -> FlatErrors {
        flatten(&self.issues)
    }

    /// Multi-line summary of every issue
    pub fn summary(&self) -> String {
        summarize(&self.issues)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.first() {
            Some(issue) => write!(f, "{}", issue.message),
            None => write!(f, "Invalid input"),
        }
    }
}

/// Run a schema and report the outcome without failing
pub fn safe_parse<S: Unit + ?Sized>(schema: &S, input: Value, config: &Config) -> SafeParseResult {
    validate(schema, input, config).into()
}

/// Run a schema, returning the output or every recorded issue
pub fn parse<S: Unit + ?Sized>(
    schema: &S,
    input: Value,
    config: &Config,
) -> Result<Value, ValidationError> {
    into_result(validate(schema, input, config))
}

/// Whether the input satisfies the schema
///
/// Stops at the first issue.
pub fn is_valid<S: Unit + ?Sized>(schema: &S, input: Value) -> bool {
    let config = Config::new().abort_early(true);
    safe_parse(schema, input, &config).success
}

/// Async counterpart of [`safe_parse`]
pub async fn safe_parse_async<S: AsyncUnit + ?Sized>(
    schema: &S,
    input: Value,
    config: &Config,
) -> SafeParseResult {
    validate_async(schema, input, config).await.into()
}

/// Async counterpart of [`parse`]
pub async fn parse_async<S: AsyncUnit + ?Sized>(
    schema: &S,
    input: Value,
    config: &Config,
) -> Result<Value, ValidationError> {
    into_result(validate_async(schema, input, config).await)
}

fn into_result(dataset: Dataset) -> Result<Value, ValidationError> {
    let (output, typed, issues) = dataset.into_parts();
    match issues {
        Some(issues) if !issues.is_empty() => Err(ValidationError { issues }),
        _ if typed => Ok(output.unwrap_or(Value::Null)),
        _ => Err(ValidationError { issues: Vec::new() }),
    }
}
