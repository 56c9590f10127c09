//! Array schema
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use sift_core::{
    add_issue, Config, Dataset, ErrorMessage, IssueKind, IssueSource, PathItem, Unit, UnitRef,
};
use std::sync::Arc;

/// Schema for a JSON array whose every element matches one item schema
pub struct ArraySchema {
    item: UnitRef,
    message: Option<ErrorMessage>,
}

impl ArraySchema {
    pub fn new(item: UnitRef) -> Self {
        Self { item, message: None }
    }

    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn item(&self) -> &UnitRef {
        &self.item
    }
}

/// Array of values matching `item`
pub fn array(item: impl Unit + 'static) -> ArraySchema {
    ArraySchema::new(Arc::new(item))
}

impl IssueSource for ArraySchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        "array"
    }

    fn expects(&self) -> Option<&str> {
        Some("Array")
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for ArraySchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let items = match dataset.take_value() {
            Some(Value::Array(items)) => items,
            other => {
                dataset.set_value(other);
                add_issue(self, "type", &mut dataset, config, None);
                return dataset;
            }
        };

        dataset.mark_typed();
        let mut output = Vec::with_capacity(items.len());
        // Built on the first failing element and shared by every path item
        let mut parent: Option<Arc<Value>> = None;

        for (index, value) in items.iter().enumerate() {
            let child = self.item.run(Dataset::new(value.clone()), config);
            let (child_value, child_typed, child_issues) = child.into_parts();

            if let Some(issues) = child_issues {
                let parent = parent.get_or_insert_with(|| Arc::new(Value::Array(items.clone())));
                let item = PathItem::array_value(Arc::clone(parent), index, Some(value.clone()));
                dataset.extend_issues(issues.into_iter().map(|i| i.with_parent(item.clone())));
                if config.aborts_early() {
                    dataset.mark_untyped();
                    break;
                }
            }
            if !child_typed {
                dataset.mark_untyped();
            }
            output.push(child_value.unwrap_or(Value::Null));
        }

        dataset.set_value(Value::Array(output));
        dataset
    }
}
