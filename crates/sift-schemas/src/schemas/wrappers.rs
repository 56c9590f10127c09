//! Wrapper schemas admitting absent or null values
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use sift_core::{Config, Dataset, ErrorMessage, IssueKind, IssueSource, Unit, UnitRef};
use std::sync::Arc;

/// Which empty values a wrapper lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admits {
    /// An absent value
    Undefined,
    /// `null`
    Null,
    /// Either of the two
    Both,
}

impl Admits {
    fn unit_type(self) -> &'static str {
        match self {
            Admits::Undefined => "optional",
            Admits::Null => "nullable",
            Admits::Both => "nullish",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Admits::Undefined => "undefined",
            Admits::Null => "null",
            Admits::Both => "null | undefined",
        }
    }

    fn admits(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Admits::Undefined | Admits::Both, None) => true,
            (Admits::Null | Admits::Both, Some(Value::Null)) => true,
            _ => false,
        }
    }
}

/// Schema running its wrapped schema unless the value is empty
///
/// An empty value is replaced by the default when one is configured and the
/// default is then handed to the wrapped schema. Without a default the empty
/// value is accepted as is.
pub struct WrapperSchema {
    wrapped: UnitRef,
    admits: Admits,
    default: Option<Value>,
    expects: String,
}

impl WrapperSchema {
    /// Wrap `wrapped`, letting the values named by `admits` through
    pub fn new(wrapped: UnitRef, admits: Admits) -> Self {
        let expects = format!(
            "({} | {})",
            wrapped.expects().unwrap_or("unknown"),
            admits.suffix()
        );
        Self {
            wrapped,
            admits,
            default: None,
            expects,
        }
    }

    /// Value substituted for an empty input
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn wrapped(&self) -> &UnitRef {
        &self.wrapped
    }
}

/// Admit an absent value, e.g. a missing object key
pub fn optional(wrapped: impl Unit + 'static) -> WrapperSchema {
    WrapperSchema::new(Arc::new(wrapped), Admits::Undefined)
}

/// Admit an absent value, substituting `default` for it
pub fn optional_with_default(
    wrapped: impl Unit + 'static,
    default: impl Into<Value>,
) -> WrapperSchema {
    optional(wrapped).with_default(default)
}

/// Admit `null`
pub fn nullable(wrapped: impl Unit + 'static) -> WrapperSchema {
    WrapperSchema::new(Arc::new(wrapped), Admits::Null)
}

/// Admit `null` and an absent value
pub fn nullish(wrapped: impl Unit + 'static) -> WrapperSchema {
    WrapperSchema::new(Arc::new(wrapped), Admits::Both)
}

impl IssueSource for WrapperSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        self.admits.unit_type()
    }

    fn expects(&self) -> Option<&str> {
        Some(&self.expects)
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.wrapped.message()
    }
}

impl Unit for WrapperSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if self.admits.admits(dataset.value()) {
            match &self.default {
                Some(default) => dataset.set_value(default.clone()),
                None => {
                    dataset.mark_typed();
                    return dataset;
                }
            }
        }
        self.wrapped.run(dataset, config)
    }

    fn is_optional(&self) -> bool {
        matches!(self.admits, Admits::Undefined | Admits::Both)
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone()
    }
}
