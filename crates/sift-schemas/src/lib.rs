//! Sift Schemas - Schema and action catalog
//!
//! This crate provides the concrete units that run on the `sift-core`
//! pipeline engine:
//!
//! - **Schemas**: `string`, `number`, `boolean`, `null`, `literal`, `any`,
//!   `unknown`, `object`, `array`, `union`, and the `optional` / `nullable` /
//!   `nullish` wrappers
//! - **Validations**: `min_length`, `max_length`, `non_empty`, `min_value`,
//!   `max_value`, `integer`, `regex`, `email`, `check`
//! - **Transformations**: `trim`, `to_lower_case`, `to_upper_case`,
//!   `to_number`, `transform`
//! - **Async actions**: `check_async`, `transform_async`
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_schemas::prelude::*;
//! use serde_json::json;
//!
//! let schema = object()
//!     .entry("name", pipe!(string(), trim(), min_length(2)))
//!     .entry("age", optional(pipe!(number(), integer(), min_value(0.0))));
//!
//! let result = safe_parse(&schema, json!({"name": "  Al  ", "age": 7}), &Config::new());
//! assert!(result.success);
//! assert_eq!(result.output, Some(json!({"name": "Al", "age": 7})));
//!
//! let err = parse(&schema, json!({"name": 1}), &Config::new()).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid type: Expected string but received 1");
//! ```
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod actions;
pub mod schemas;

pub use actions::*;
pub use schemas::*;

/// Everything needed to declare and run schemas
pub mod prelude {
    pub use crate::actions::*;
    pub use crate::schemas::*;
    pub use sift_core::{
        is_valid, parse, parse_async, pipe, pipe_async, safe_parse, safe_parse_async, validate,
        validate_async, Config, Dataset, ErrorMessage, Issue, IssueKind, MessageStore, Step, Unit,
        UnitRef,
    };
}
