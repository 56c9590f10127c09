//! Core issue types
//!
//! An [`Issue`] is the single failure taxonomy of the engine. It is built once
//! by the issue builder and never modified after it lands on a dataset.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Category of the unit that raised an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Base-type check of a schema
    Schema,
    /// Validation action (checks a value, never changes it)
    Validation,
    /// Transformation action (may change the value)
    Transformation,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Schema => write!(f, "schema"),
            IssueKind::Validation => write!(f, "validation"),
            IssueKind::Transformation => write!(f, "transformation"),
        }
    }
}

/// Kind of collection a path item points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathItemKind {
    Object,
    Array,
    Unknown,
}

/// Whether the failure concerns the key itself or the value stored under it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrigin {
    Key,
    Value,
}

/// Key of a path item: an object key or an array index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Key(key) => write!(f, "{}", key),
            PathKey::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

/// One step of an issue's location inside a nested input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathItem {
    #[serde(rename = "type")]
    pub kind: PathItemKind,
    pub origin: PathOrigin,
    /// The collection that contains the failing entry, shared by its siblings
    pub input: Arc<Value>,
    pub key: PathKey,
    /// The entry's value, absent for missing keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PathItem {
    /// Path item for the value stored under an object key
    pub fn object_value(
        input: impl Into<Arc<Value>>,
        key: impl Into<PathKey>,
        value: Option<Value>,
    ) -> Self {
        Self {
            kind: PathItemKind::Object,
            origin: PathOrigin::Value,
            input: input.into(),
            key: key.into(),
            value,
        }
    }

    /// Path item for an object key itself (e.g. a missing required key)
    pub fn object_key(
        input: impl Into<Arc<Value>>,
        key: impl Into<PathKey>,
        value: Option<Value>,
    ) -> Self {
        Self {
            kind: PathItemKind::Object,
            origin: PathOrigin::Key,
            input: input.into(),
            key: key.into(),
            value,
        }
    }

    /// Path item for an array element
    pub fn array_value(input: impl Into<Arc<Value>>, index: usize, value: Option<Value>) -> Self {
        Self {
            kind: PathItemKind::Array,
            origin: PathOrigin::Value,
            input: input.into(),
            key: PathKey::Index(index),
            value,
        }
    }
}

/// A structured validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Specific unit identifier such as `min_length` or `string`
    #[serde(rename = "type")]
    pub issue_type: String,
    /// The offending value, `None` when it was absent
    pub input: Option<Value>,
    pub expected: Option<String>,
    pub received: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathItem>>,
    /// Sub-issues of composite failures (e.g. no union option matched)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "abortEarly", skip_serializing_if = "Option::is_none")]
    pub abort_early: Option<bool>,
    #[serde(rename = "abortPipeEarly", skip_serializing_if = "Option::is_none")]
    pub abort_pipe_early: Option<bool>,
}

impl Issue {
    /// Prepend a path item, keeping any deeper items after it
    pub fn with_parent(mut self, item: PathItem) -> Self {
        match self.path.as_mut() {
            Some(path) => path.insert(0, item),
            None => self.path = Some(vec![item]),
        }
        self
    }

    /// Nested issues, empty when the issue has none
    pub fn sub_issues(&self) -> &[Issue] {
        self.issues.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
