//! Union schema
//!
//! Options are tried in order against independent datasets. The first option
//! that passes cleanly decides the result. Otherwise the union reports one
//! `type` issue with the failing options' issues nested beneath it, unless a
//! single option is responsible for the failure, in which case that option's
//! own result is returned.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use sift_core::{
    add_issue, Config, Dataset, ErrorMessage, Issue, IssueKind, IssueOverrides, IssueSource, Unit,
    UnitRef,
};
use std::sync::Arc;
use tracing::trace;

/// Schema matching any one of its options
pub struct UnionSchema {
    options: Vec<UnitRef>,
    expects: String,
    message: Option<ErrorMessage>,
}

impl UnionSchema {
    pub fn new(options: Vec<UnitRef>) -> Self {
        let expects = join_expects(&options);
        Self {
            options,
            expects,
            message: None,
        }
    }

    /// Add another option
    pub fn or(mut self, option: impl Unit + 'static) -> Self {
        self.options.push(Arc::new(option));
        self.expects = join_expects(&self.options);
        self
    }

    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn options(&self) -> &[UnitRef] {
        &self.options
    }
}

/// Union of the given options
pub fn union(options: Vec<UnitRef>) -> UnionSchema {
    UnionSchema::new(options)
}

fn join_expects(options: &[UnitRef]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for expects in options.iter().filter_map(|o| o.expects()) {
        if !parts.contains(&expects) {
            parts.push(expects);
        }
    }
    if parts.is_empty() {
        "never".to_string()
    } else {
        parts.join(" | ")
    }
}

fn collect_issues(datasets: Vec<Dataset>) -> Vec<Issue> {
    datasets
        .into_iter()
        .filter_map(Dataset::into_issues)
        .flatten()
        .collect()
}

impl IssueSource for UnionSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        "union"
    }

    fn expects(&self) -> Option<&str> {
        Some(&self.expects)
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for UnionSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let mut typed_failures = Vec::new();
        let mut untyped_failures = Vec::new();

        for (index, option) in self.options.iter().enumerate() {
            let attempt = option.run(Dataset::new(dataset.value().cloned()), config);
            if attempt.is_typed() {
                if !attempt.has_issues() {
                    trace!(option = index, "union option matched");
                    return attempt;
                }
                typed_failures.push(attempt);
            } else {
                untyped_failures.push(attempt);
            }
        }

        // Options that matched the type but failed an action beat type mismatches
        let mut failures = if typed_failures.is_empty() {
            untyped_failures
        } else {
            typed_failures
        };

        if failures.len() == 1 {
            if let Some(only) = failures.pop() {
                return only;
            }
        }

        let nested = collect_issues(failures);
        let overrides = if nested.is_empty() {
            IssueOverrides::new()
        } else {
            IssueOverrides::new().issues(nested)
        };
        add_issue(self, "type", &mut dataset, config, Some(&overrides));
        dataset
    }
}
