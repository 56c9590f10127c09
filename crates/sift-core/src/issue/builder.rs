//! Issue builder
//!
//! [`add_issue`] is the only place issues are created. It resolves the
//! input, expected and received texts, builds the default message, picks the
//! final message through the [`resolver`](super::resolver) chain and appends
//! the result to the dataset.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use super::resolver::{resolve_message, ResolutionScope};
use super::types::{Issue, PathItem};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::message::ErrorMessage;
use crate::stringify::stringify;
use crate::unit::{is_schema, IssueSource};
use serde_json::Value;
use tracing::trace;

/// Per-call overrides for a single issue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueOverrides {
    /// `Some(..)` when the input was supplied, even if the supplied input is
    /// the absent value `Some(None)`; `None` falls back to the dataset value.
    pub input: Option<Option<Value>>,
    pub expected: Option<String>,
    pub received: Option<String>,
    pub message: Option<ErrorMessage>,
    pub path: Option<Vec<PathItem>>,
    pub issues: Option<Vec<Issue>>,
}

impl IssueOverrides {
    /// Empty overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the input explicitly; `None` reports an absent value
    pub fn input(mut self, input: Option<Value>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    pub fn message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn path(mut self, path: Vec<PathItem>) -> Self {
        self.path = Some(path);
        self
    }

    /// Nest sub-issues under the new issue
    pub fn issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = Some(issues);
        self
    }
}

/// Build the fallback message used when no override resolves
pub fn default_message(label: &str, expected: Option<&str>, received: &str) -> String {
    match expected {
        Some(expected) if !expected.is_empty() => {
            format!("Invalid {}: Expected {} but received {}", label, expected, received)
        }
        _ => format!("Invalid {}: Received {}", label, received),
    }
}

/// Record a failure of `context` on the dataset
///
/// `label` names the failing aspect for the default message, e.g. `type`,
/// `length` or `key`. Schema-kind failures also mark the dataset untyped.
/// Neither `context`, `config` nor `other` is modified.
pub fn add_issue<C: IssueSource + ?Sized>(
    context: &C,
    label: &str,
    dataset: &mut Dataset,
    config: &Config,
    other: Option<&IssueOverrides>,
) {
    let input = match other.and_then(|o| o.input.as_ref()) {
        Some(supplied) => supplied.clone(),
        None => dataset.value().cloned(),
    };
    let expected = other
        .and_then(|o| o.expected.clone())
        .or_else(|| context.expects().map(str::to_string));
    let received = other
        .and_then(|o| o.received.clone())
        .unwrap_or_else(|| stringify(input.as_ref()));

    let mut issue = Issue {
        kind: context.kind(),
        issue_type: context.unit_type().to_string(),
        message: default_message(label, expected.as_deref(), &received),
        input,
        expected,
        received,
        requirement: context.requirement(),
        path: other.and_then(|o| o.path.clone()),
        issues: other.and_then(|o| o.issues.clone()),
        lang: config.lang.clone(),
        abort_early: config.abort_early,
        abort_pipe_early: config.abort_pipe_early,
    };

    let scope = ResolutionScope::new(context, config, other);
    match resolve_message(&scope) {
        // An empty literal keeps the default message
        Some((_, ErrorMessage::Text(text))) if text.is_empty() => {}
        Some((source, message)) => {
            trace!(source = %source, "issue message overridden");
            issue.message = message.render(&issue);
        }
        None => {}
    }

    if is_schema(context) {
        dataset.mark_untyped();
    }

    trace!(
        kind = %issue.kind,
        issue_type = %issue.issue_type,
        issue_count = dataset.issue_count() + 1,
        "issue recorded"
    );
    dataset.push_issue(issue);
}
