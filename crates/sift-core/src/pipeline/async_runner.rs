//! Asynchronous pipeline runner
//!
//! Steps run strictly one after another; an async step may suspend, but the
//! next step is only considered after it has resumed and returned the
//! dataset. Abort checks are the same as in the synchronous runner.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use super::runner::{halt_before, record_halt, UnitRef};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::IssueKind;
use crate::message::ErrorMessage;
use crate::unit::{AsyncUnit, IssueSource, Unit};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

/// Shared handle to an async unit
pub type AsyncUnitRef = Arc<dyn AsyncUnit>;

/// One step of an async pipeline
#[derive(Clone)]
pub enum Step {
    Sync(UnitRef),
    Async(AsyncUnitRef),
}

impl Step {
    /// Wrap a synchronous unit
    pub fn of(unit: impl Unit + 'static) -> Self {
        Step::Sync(Arc::new(unit))
    }

    /// Wrap an asynchronous unit
    pub fn of_async(unit: impl AsyncUnit + 'static) -> Self {
        Step::Async(Arc::new(unit))
    }

    /// Run the step, suspending only for async units
    pub async fn run(&self, dataset: Dataset, config: &Config) -> Dataset {
        match self {
            Step::Sync(unit) => unit.run(dataset, config),
            Step::Async(unit) => unit.run_async(dataset, config).await,
        }
    }
}

impl From<UnitRef> for Step {
    fn from(unit: UnitRef) -> Self {
        Step::Sync(unit)
    }
}

impl From<AsyncUnitRef> for Step {
    fn from(unit: AsyncUnitRef) -> Self {
        Step::Async(unit)
    }
}

impl IssueSource for Step {
    fn kind(&self) -> IssueKind {
        match self {
            Step::Sync(unit) => unit.kind(),
            Step::Async(unit) => unit.kind(),
        }
    }

    fn unit_type(&self) -> &str {
        match self {
            Step::Sync(unit) => unit.unit_type(),
            Step::Async(unit) => unit.unit_type(),
        }
    }

    fn reference(&self) -> &str {
        match self {
            Step::Sync(unit) => unit.reference(),
            Step::Async(unit) => unit.reference(),
        }
    }

    fn expects(&self) -> Option<&str> {
        match self {
            Step::Sync(unit) => unit.expects(),
            Step::Async(unit) => unit.expects(),
        }
    }

    fn requirement(&self) -> Option<Value> {
        match self {
            Step::Sync(unit) => unit.requirement(),
            Step::Async(unit) => unit.requirement(),
        }
    }

    fn message(&self) -> Option<&ErrorMessage> {
        match self {
            Step::Sync(unit) => unit.message(),
            Step::Async(unit) => unit.message(),
        }
    }
}

/// Run steps in declaration order over a dataset
pub async fn run_async(steps: &[Step], mut dataset: Dataset, config: &Config) -> Dataset {
    for step in steps {
        if let Some(halt) = halt_before(step.kind(), &dataset, config) {
            record_halt(halt, step.kind(), step.unit_type(), &mut dataset);
            break;
        }
        trace!(unit_type = %step.unit_type(), kind = %step.kind(), "running step");
        dataset = step.run(dataset, config).await;
    }
    dataset
}

/// Async counterpart of [`Pipe`](super::Pipe)
pub struct PipeAsync {
    steps: Vec<Step>,
}

impl PipeAsync {
    /// Create a pipe from a head schema and its steps
    pub fn new(schema: Step, steps: impl IntoIterator<Item = Step>) -> Self {
        let mut all = vec![schema];
        all.extend(steps);
        Self { steps: all }
    }

    /// Append another step
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// The head schema
    pub fn schema(&self) -> &Step {
        &self.steps[0]
    }

    /// All steps, head schema first
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Create an async pipe from a head schema and its steps
pub fn pipe_async(schema: impl Into<Step>, steps: Vec<Step>) -> PipeAsync {
    PipeAsync::new(schema.into(), steps)
}

impl IssueSource for PipeAsync {
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

#[async_trait]
impl AsyncUnit for PipeAsync {
    async fn run_async(&self, dataset: Dataset, config: &Config) -> Dataset {
        run_async(&self.steps, dataset, config).await
    }
}
