//! Synchronous pipeline runner
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::IssueKind;
use crate::message::ErrorMessage;
use crate::unit::{IssueSource, Unit};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Shared handle to a unit
pub type UnitRef = Arc<dyn Unit>;

/// Why a pipeline stopped before its last unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// `abort_early` is set and an issue exists
    AbortEarly,
    /// `abort_pipe_early` is set and an issue exists
    AbortPipeEarly,
    /// The next unit would retype or transform a value that already failed
    Invalid,
}

/// Decide whether the next unit of kind `next` may run
///
/// Checked at unit boundaries only; a unit that started always completes.
pub fn halt_before(next: IssueKind, dataset: &Dataset, config: &Config) -> Option<Halt> {
    if !dataset.has_issues() {
        return None;
    }
    if config.aborts_early() {
        Some(Halt::AbortEarly)
    } else if config.aborts_pipe_early() {
        Some(Halt::AbortPipeEarly)
    } else if matches!(next, IssueKind::Schema | IssueKind::Transformation) {
        Some(Halt::Invalid)
    } else {
        None
    }
}

/// Apply a halt decision to the dataset
///
/// A skipped schema or transformation leaves the value short of the pipe's
/// output type, so the dataset is untyped for every halt reason.
pub(crate) fn record_halt(halt: Halt, next: IssueKind, unit_type: &str, dataset: &mut Dataset) {
    if matches!(next, IssueKind::Schema | IssueKind::Transformation) {
        dataset.mark_untyped();
    }
    debug!(
        halt = ?halt,
        unit_type = %unit_type,
        issue_count = dataset.issue_count(),
        "pipeline stopped"
    );
}

/// Run units in declaration order over a dataset
pub fn run(units: &[UnitRef], mut dataset: Dataset, config: &Config) -> Dataset {
    for unit in units {
        if let Some(halt) = halt_before(unit.kind(), &dataset, config) {
            record_halt(halt, unit.kind(), unit.unit_type(), &mut dataset);
            break;
        }
        trace!(unit_type = %unit.unit_type(), kind = %unit.kind(), "running unit");
        dataset = unit.run(dataset, config);
    }
    dataset
}

/// A schema followed by the actions validating and transforming its output
///
/// The pipe presents itself as its head schema: same kind, type, expected
/// description and message, so parents report it like the schema itself.
pub struct Pipe {
    units: Vec<UnitRef>,
}

impl Pipe {
    /// Create a pipe from a head schema and its actions
    pub fn new(schema: UnitRef, actions: impl IntoIterator<Item = UnitRef>) -> Self {
        let mut units = vec![schema];
        units.extend(actions);
        Self { units }
    }

    /// Append another action
    pub fn then(mut self, action: impl Unit + 'static) -> Self {
        self.units.push(Arc::new(action));
        self
    }

    /// The head schema
    pub fn schema(&self) -> &UnitRef {
        &self.units[0]
    }

    /// All units, head schema first
    pub fn units(&self) -> &[UnitRef] {
        &self.units
    }
}

/// Build a [`Pipe`] from a head schema and any number of actions
///
/// ```
/// # use sift_core::{Config, Dataset, IssueKind, IssueSource, Unit};
/// # struct Any;
/// # impl IssueSource for Any {
/// #     fn kind(&self) -> IssueKind { IssueKind::Schema }
/// #     fn unit_type(&self) -> &str { "any" }
/// # }
/// # impl Unit for Any {
/// #     fn run(&self, mut d: Dataset, _: &Config) -> Dataset { d.mark_typed(); d }
/// # }
/// let schema = sift_core::pipe!(Any);
/// assert_eq!(schema.units().len(), 1);
/// ```
#[macro_export]
macro_rules! pipe {
    ($schema:expr $(, $action:expr)* $(,)?) => {
        $crate::Pipe::new(
            ::std::sync::Arc::new($schema),
            ::std::vec![$(::std::sync::Arc::new($action) as $crate::UnitRef),*],
        )
    };
}

/// Create a pipe from a head schema and its actions
pub fn pipe(schema: impl Unit + 'static, actions: Vec<UnitRef>) -> Pipe {
    Pipe::new(Arc::new(schema), actions)
}

impl IssueSource for Pipe {
    fn kind(&self) -> IssueKind {
        self.schema().kind()
    }

    fn unit_type(&self) -> &str {
        self.schema().unit_type()
    }

    fn reference(&self) -> &str {
        self.schema().reference()
    }

    fn expects(&self) -> Option<&str> {
        self.schema().expects()
    }

    fn requirement(&self) -> Option<Value> {
        self.schema().requirement()
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.schema().message()
    }
}

impl Unit for Pipe {
    fn run(&self, dataset: Dataset, config: &Config) -> Dataset {
        run(&self.units, dataset, config)
    }

    fn is_optional(&self) -> bool {
        self.schema().is_optional()
    }

    fn default_value(&self) -> Option<Value> {
        self.schema().default_value()
    }
}
