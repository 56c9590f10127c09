//! Leaf schemas checking a value's base type
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use sift_core::{add_issue, Config, Dataset, ErrorMessage, IssueKind, IssueSource, Unit};

/// Schema accepting values for which a type check holds
pub struct TypeSchema {
    unit_type: &'static str,
    expects: &'static str,
    check: fn(&Value) -> bool,
    message: Option<ErrorMessage>,
}

impl TypeSchema {
    fn new(unit_type: &'static str, expects: &'static str, check: fn(&Value) -> bool) -> Self {
        Self {
            unit_type,
            expects,
            check,
            message: None,
        }
    }

    /// Attach a message used whenever this schema rejects a value
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IssueSource for TypeSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        self.unit_type
    }

    fn expects(&self) -> Option<&str> {
        Some(self.expects)
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for TypeSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if dataset.value().is_some_and(self.check) {
            dataset.mark_typed();
        } else {
            add_issue(self, "type", &mut dataset, config, None);
        }
        dataset
    }
}

/// Any JSON string
pub fn string() -> TypeSchema {
    TypeSchema::new("string", "string", Value::is_string)
}

/// Any JSON number
pub fn number() -> TypeSchema {
    TypeSchema::new("number", "number", Value::is_number)
}

/// `true` or `false`
pub fn boolean() -> TypeSchema {
    TypeSchema::new("boolean", "boolean", Value::is_boolean)
}

/// Exactly `null`
pub fn null() -> TypeSchema {
    TypeSchema::new("null", "null", Value::is_null)
}

/// Schema accepting one exact value
pub struct LiteralSchema {
    literal: Value,
    expects: String,
    message: Option<ErrorMessage>,
}

impl LiteralSchema {
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Exactly the given value
pub fn literal(literal: impl Into<Value>) -> LiteralSchema {
    let literal = literal.into();
    LiteralSchema {
        expects: sift_core::stringify(Some(&literal)),
        literal,
        message: None,
    }
}

impl IssueSource for LiteralSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        "literal"
    }

    fn expects(&self) -> Option<&str> {
        Some(&self.expects)
    }

    fn requirement(&self) -> Option<Value> {
        Some(self.literal.clone())
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for LiteralSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if dataset.value() == Some(&self.literal) {
            dataset.mark_typed();
        } else {
            add_issue(self, "type", &mut dataset, config, None);
        }
        dataset
    }
}

/// Schema accepting every value, including an absent one
pub struct PassthroughSchema {
    unit_type: &'static str,
}

/// Any value; use when the value is not inspected further
pub fn any() -> PassthroughSchema {
    PassthroughSchema { unit_type: "any" }
}

/// Any value; use when later actions narrow it down
pub fn unknown() -> PassthroughSchema {
    PassthroughSchema { unit_type: "unknown" }
}

impl IssueSource for PassthroughSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        self.unit_type
    }

    fn expects(&self) -> Option<&str> {
        Some(self.unit_type)
    }
}

impl Unit for PassthroughSchema {
    fn run(&self, mut dataset: Dataset, _config: &Config) -> Dataset {
        dataset.mark_typed();
        dataset
    }
}
