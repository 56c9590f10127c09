//! Async actions
//!
//! These run only inside async pipelines built with
//! [`pipe_async`](sift_core::pipe_async) and follow the same rules as their
//! synchronous counterparts.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use sift_core::{add_issue, AsyncUnit, Config, Dataset, ErrorMessage, IssueKind, IssueSource};
use std::future::Future;

/// Validation whose predicate awaits external work
pub struct CheckAsync {
    test: Box<dyn Fn(Value) -> BoxFuture<'static, bool> + Send + Sync>,
    message: Option<ErrorMessage>,
}

impl CheckAsync {
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Value accepted by an async predicate
pub fn check_async<F, Fut>(test: F) -> CheckAsync
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    CheckAsync {
        test: Box::new(move |value: Value| test(value).boxed()),
        message: None,
    }
}

impl IssueSource for CheckAsync {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn unit_type(&self) -> &str {
        "check"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

#[async_trait]
impl AsyncUnit for CheckAsync {
    async fn run_async(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if !dataset.is_typed() {
            return dataset;
        }
        if let Some(value) = dataset.value().cloned() {
            if !(self.test)(value).await {
                add_issue(self, "input", &mut dataset, config, None);
            }
        }
        dataset
    }
}

/// Transformation whose operation awaits external work
pub struct TransformAsync {
    op: Box<dyn Fn(Value) -> BoxFuture<'static, Value> + Send + Sync>,
}

/// Replace the value with the awaited result of `f`
pub fn transform_async<F, Fut>(f: F) -> TransformAsync
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Value> + Send + 'static,
{
    TransformAsync {
        op: Box::new(move |value: Value| f(value).boxed()),
    }
}

impl IssueSource for TransformAsync {
    fn kind(&self) -> IssueKind {
        IssueKind::Transformation
    }

    fn unit_type(&self) -> &str {
        "transform"
    }
}

#[async_trait]
impl AsyncUnit for TransformAsync {
    async fn run_async(&self, mut dataset: Dataset, _config: &Config) -> Dataset {
        if let Some(value) = dataset.take_value() {
            let output = (self.op)(value).await;
            dataset.set_value(output);
        }
        dataset
    }
}
