//! The unit contract shared by schemas, validations and transformations
//!
//! Every check or mutation in a pipeline is a unit: it takes the dataset and
//! the active configuration and returns the dataset. The [`IssueKind`]
//! returned by [`IssueSource::kind`] is the discriminant the runner and the
//! issue builder use to tell schemas from actions; there is no type
//! inspection beyond it.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::IssueKind;
use crate::message::ErrorMessage;
use async_trait::async_trait;
use serde_json::Value;

/// Identity of a unit as seen by the issue builder
pub trait IssueSource {
    /// Category of the unit
    fn kind(&self) -> IssueKind;

    /// Specific identifier, e.g. `min_length`
    fn unit_type(&self) -> &str;

    /// Stable identity used to look up unit-specific messages
    ///
    /// Defaults to the unit type.
    fn reference(&self) -> &str {
        self.unit_type()
    }

    /// Human description of what the unit requires
    fn expects(&self) -> Option<&str> {
        None
    }

    /// Configured constraint, opaque to the engine
    fn requirement(&self) -> Option<Value> {
        None
    }

    /// Message attached when the unit was defined
    fn message(&self) -> Option<&ErrorMessage> {
        None
    }
}

/// A synchronous schema, validation or transformation
pub trait Unit: IssueSource + Send + Sync {
    /// Run the unit against a dataset
    ///
    /// Units may replace the value and append issues, but must never drop
    /// issues that are already recorded.
    fn run(&self, dataset: Dataset, config: &Config) -> Dataset;

    /// Whether a missing object key is acceptable for this schema
    fn is_optional(&self) -> bool {
        false
    }

    /// Value used in place of a missing or absent input
    fn default_value(&self) -> Option<Value> {
        None
    }
}

/// A unit that may suspend while it waits for external work
#[async_trait]
pub trait AsyncUnit: IssueSource + Send + Sync {
    /// Run the unit against a dataset
    async fn run_async(&self, dataset: Dataset, config: &Config) -> Dataset;
}

/// Whether a unit is a schema
pub fn is_schema<U: IssueSource + ?Sized>(unit: &U) -> bool {
    unit.kind() == IssueKind::Schema
}
