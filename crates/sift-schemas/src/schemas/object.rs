//! Object schema
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use sift_core::{
    add_issue, Config, Dataset, ErrorMessage, IssueKind, IssueOverrides, IssueSource, PathItem,
    Unit, UnitRef,
};
use std::sync::Arc;
use tracing::trace;

/// Schema for a JSON object with a fixed set of entries
///
/// Entries are checked in the order they were declared. Keys not declared are
/// dropped from the output. A missing key is accepted only when its schema is
/// optional; a default from the entry schema fills it in.
pub struct ObjectSchema {
    entries: Vec<(String, UnitRef)>,
    message: Option<ErrorMessage>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            message: None,
        }
    }

    /// Declare an entry
    pub fn entry(mut self, key: impl Into<String>, schema: impl Unit + 'static) -> Self {
        self.entries.push((key.into(), Arc::new(schema)));
        self
    }

    /// Declare an entry from a shared schema
    pub fn entry_ref(mut self, key: impl Into<String>, schema: UnitRef) -> Self {
        self.entries.push((key.into(), schema));
        self
    }

    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Declared entries in order
    pub fn entries(&self) -> &[(String, UnitRef)] {
        &self.entries
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Start an object schema; add entries with [`ObjectSchema::entry`]
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

impl IssueSource for ObjectSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        "object"
    }

    fn expects(&self) -> Option<&str> {
        Some("Object")
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for ObjectSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let input = match dataset.take_value() {
            Some(Value::Object(map)) => map,
            other => {
                dataset.set_value(other);
                add_issue(self, "type", &mut dataset, config, None);
                return dataset;
            }
        };

        dataset.mark_typed();
        let mut output = Map::new();
        // Built on the first failing entry and shared by every path item
        let mut parent: Option<Arc<Value>> = None;

        for (key, schema) in &self.entries {
            let value = input.get(key).cloned();

            if value.is_some() || schema.default_value().is_some() {
                trace!(key = %key, "checking object entry");
                let child = schema.run(Dataset::new(value.clone()), config);
                let (child_value, child_typed, child_issues) = child.into_parts();

                if let Some(issues) = child_issues {
                    let parent = parent.get_or_insert_with(|| Arc::new(Value::Object(input.clone())));
                    let item = PathItem::object_value(Arc::clone(parent), key.as_str(), value);
                    dataset.extend_issues(issues.into_iter().map(|i| i.with_parent(item.clone())));
                    if config.aborts_early() {
                        dataset.mark_untyped();
                        break;
                    }
                }
                if !child_typed {
                    dataset.mark_untyped();
                }
                if let Some(child_value) = child_value {
                    output.insert(key.clone(), child_value);
                }
            } else if !schema.is_optional() {
                let parent = parent.get_or_insert_with(|| Arc::new(Value::Object(input.clone())));
                let overrides = IssueOverrides::new()
                    .input(None)
                    .expected(format!("\"{}\"", key))
                    .path(vec![PathItem::object_key(Arc::clone(parent), key.as_str(), None)]);
                add_issue(self, "key", &mut dataset, config, Some(&overrides));
                if config.aborts_early() {
                    break;
                }
            }
        }

        dataset.set_value(Value::Object(output));
        dataset
    }
}
