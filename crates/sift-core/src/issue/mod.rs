//! Structured issues and the issue builder
//!
//! The issue subsystem is organized into the following modules:
//!
//! - [`types`] - The issue record and its path items
//! - [`builder`] - [`add_issue`], which creates and appends issues
//! - [`resolver`] - The ordered message resolution chain
//! - [`path`] - Dot-path rendering of issue locations
//! - [`flatten`] - Grouped and textual views of issue lists
//!
//! # Examples
//!
//! ```
//! use sift_core::{add_issue, Config, Dataset, IssueKind, IssueSource};
//! use serde_json::json;
//!
//! struct Even;
//!
//! impl IssueSource for Even {
//!     fn kind(&self) -> IssueKind { IssueKind::Validation }
//!     fn unit_type(&self) -> &str { "even" }
//!     fn expects(&self) -> Option<&str> { Some("an even number") }
//! }
//!
//! let mut dataset = Dataset::new(json!(3));
//! add_issue(&Even, "number", &mut dataset, &Config::new(), None);
//!
//! let issue = &dataset.issues().unwrap()[0];
//! assert_eq!(issue.message, "Invalid number: Expected an even number but received 3");
//! ```
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod flatten;
pub mod path;
pub mod resolver;
pub mod types;
mod tests;

pub use builder::{add_issue, default_message, IssueOverrides};
pub use flatten::{flatten, summarize, FlatErrors};
pub use path::dot_path;
pub use resolver::{resolve_message, MessageSource, ResolutionScope, RESOLVERS};
pub use types::{Issue, IssueKind, PathItem, PathItemKind, PathKey, PathOrigin};
