//! Flat and textual views of an issue list
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use super::path::dot_path;
use super::types::Issue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Issue messages grouped by location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatErrors {
    /// Messages of issues without a path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Vec<String>>,
    /// Messages keyed by dot path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<BTreeMap<String, Vec<String>>>,
    /// Messages of issues whose path has no usable dot form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<String>>,
}

/// Group issue messages by their location
pub fn flatten(issues: &[Issue]) -> FlatErrors {
    let mut flat = FlatErrors::default();

    for issue in issues {
        match dot_path(issue) {
            Some(path) if !path.is_empty() => {
                flat.nested
                    .get_or_insert_with(BTreeMap::new)
                    .entry(path)
                    .or_default()
                    .push(issue.message.clone());
            }
            _ if issue.path.is_some() => {
                flat.other.get_or_insert_with(Vec::new).push(issue.message.clone());
            }
            _ => {
                flat.root.get_or_insert_with(Vec::new).push(issue.message.clone());
            }
        }
    }

    flat
}

/// Render issues as a human-readable summary, one block per issue
pub fn summarize(issues: &[Issue]) -> String {
    let mut summary = String::new();

    for issue in issues {
        if !summary.is_empty() {
            summary.push('\n');
        }
        summary.push_str("× ");
        summary.push_str(&issue.message);
        if let Some(path) = dot_path(issue).filter(|p| !p.is_empty()) {
            summary.push_str("\n  → at ");
            summary.push_str(&path);
        }
    }

    summary
}
