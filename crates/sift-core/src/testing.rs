//! Minimal units for exercising the engine in unit tests
//!
//! The real catalog lives in `sift-schemas`; these only implement what the
//! core tests need to drive datasets through the builder and the runner.

#![cfg(test)]

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{add_issue, IssueKind};
use crate::message::ErrorMessage;
use crate::unit::{AsyncUnit, IssueSource, Unit};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Shared log of unit invocations
pub type RunLog = Arc<Mutex<Vec<String>>>;

pub fn run_log() -> RunLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &RunLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Schema accepting JSON strings
pub struct TextSchema {
    pub message: Option<ErrorMessage>,
}

impl TextSchema {
    pub fn new() -> Self {
        Self { message: None }
    }
}

impl IssueSource for TextSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn unit_type(&self) -> &str {
        "string"
    }

    fn expects(&self) -> Option<&str> {
        Some("string")
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for TextSchema {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if dataset.value().is_some_and(Value::is_string) {
            dataset.mark_typed();
        } else {
            add_issue(self, "type", &mut dataset, config, None);
        }
        dataset
    }
}

/// Unit of any kind that records its run and optionally fails
pub struct Probe {
    pub kind: IssueKind,
    pub name: String,
    pub fails: bool,
    pub log: RunLog,
}

impl Probe {
    pub fn passing(kind: IssueKind, name: &str, log: &RunLog) -> Self {
        Self {
            kind,
            name: name.to_string(),
            fails: false,
            log: Arc::clone(log),
        }
    }

    pub fn failing(kind: IssueKind, name: &str, log: &RunLog) -> Self {
        Self {
            fails: true,
            ..Self::passing(kind, name, log)
        }
    }
}

impl IssueSource for Probe {
    fn kind(&self) -> IssueKind {
        self.kind
    }

    fn unit_type(&self) -> &str {
        &self.name
    }
}

impl Unit for Probe {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        self.log.lock().unwrap().push(self.name.clone());
        if self.kind == IssueKind::Schema && !self.fails {
            dataset.mark_typed();
        }
        if self.fails {
            add_issue(self, "input", &mut dataset, config, None);
        }
        dataset
    }
}

#[async_trait]
impl AsyncUnit for Probe {
    async fn run_async(&self, dataset: Dataset, config: &Config) -> Dataset {
        tokio::task::yield_now().await;
        Unit::run(self, dataset, config)
    }
}

/// Transformation trimming string values
pub struct TrimAction;

impl IssueSource for TrimAction {
    fn kind(&self) -> IssueKind {
        IssueKind::Transformation
    }

    fn unit_type(&self) -> &str {
        "trim"
    }
}

impl Unit for TrimAction {
    fn run(&self, mut dataset: Dataset, _config: &Config) -> Dataset {
        if let Some(Value::String(s)) = dataset.value_mut() {
            *s = s.trim().to_string();
        }
        dataset
    }
}

/// Validation requiring a minimum string length
pub struct MinLengthAction {
    pub requirement: usize,
    pub expects: String,
    pub message: Option<ErrorMessage>,
}

impl MinLengthAction {
    pub fn new(requirement: usize) -> Self {
        Self {
            requirement,
            expects: format!(">={}", requirement),
            message: None,
        }
    }
}

impl IssueSource for MinLengthAction {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn unit_type(&self) -> &str {
        "min_length"
    }

    fn expects(&self) -> Option<&str> {
        Some(&self.expects)
    }

    fn requirement(&self) -> Option<Value> {
        Some(json!(self.requirement))
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Unit for MinLengthAction {
    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let too_short = dataset.is_typed()
            && dataset
                .value()
                .and_then(Value::as_str)
                .is_some_and(|s| s.chars().count() < self.requirement);
        if too_short {
            add_issue(self, "length", &mut dataset, config, None);
        }
        dataset
    }
}
