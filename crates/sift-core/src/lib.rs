//! Sift Core - Pipeline engine for composable schema validation
//!
//! This crate provides the execution model shared by every schema, validation
//! and transformation: the dataset threaded through a call, the structured
//! issues recorded on it, the layered resolution of issue messages, and the
//! pipeline runner with its abort semantics.
//!
//! # Main Components
//!
//! - **Dataset**: Value, typed state and append-only issue list of one call
//! - **Issues**: Structured failures built by [`add_issue`]
//! - **Messages**: Locale-keyed [`MessageStore`] and per-call overrides
//! - **Pipelines**: Ordered unit execution with `abort_early` / `abort_pipe_early`
//! - **Units**: The [`Unit`] / [`AsyncUnit`] contract implemented by every schema and action
//!
//! Concrete schemas and actions live in the `sift-schemas` crate.
//!
//! # Example
//!
//! ```
//! use sift_core::{add_issue, validate, Config, Dataset, IssueKind, IssueSource, Unit};
//! use serde_json::json;
//!
//! struct Text;
//!
//! impl IssueSource for Text {
//!     fn kind(&self) -> IssueKind { IssueKind::Schema }
//!     fn unit_type(&self) -> &str { "string" }
//!     fn expects(&self) -> Option<&str> { Some("string") }
//! }
//!
//! impl Unit for Text {
//!     fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
//!         if dataset.value().is_some_and(|v| v.is_string()) {
//!             dataset.mark_typed();
//!         } else {
//!             add_issue(self, "type", &mut dataset, config, None);
//!         }
//!         dataset
//!     }
//! }
//!
//! let dataset = validate(&Text, json!(12), &Config::new());
//! assert!(!dataset.is_typed());
//! assert_eq!(
//!     dataset.issues().unwrap()[0].message,
//!     "Invalid type: Expected string but received 12"
//! );
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod issue;
pub mod message;
pub mod parse;
pub mod pipeline;
pub mod stringify;
pub mod unit;

#[cfg(test)]
mod proptest_strategies;
#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{Config, Settings};
pub use dataset::{Dataset, TypeState};
pub use error::{Error, Result};
pub use issue::{
    add_issue, dot_path, flatten, summarize, FlatErrors, Issue, IssueKind, IssueOverrides,
    MessageSource, PathItem, PathItemKind, PathKey, PathOrigin,
};
pub use message::{ErrorMessage, MessageCatalog, MessageStore};
pub use parse::{
    is_valid, parse, parse_async, safe_parse, safe_parse_async, validate, validate_async,
    SafeParseResult, ValidationError,
};
pub use pipeline::{
    pipe, pipe_async, run, run_async, AsyncUnitRef, Pipe, PipeAsync, Step, UnitRef,
};
pub use stringify::stringify;
pub use unit::{AsyncUnit, IssueSource, Unit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
