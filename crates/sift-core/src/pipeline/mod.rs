//! Pipeline runner for ordered unit lists
//!
//! A pipeline runs its units in declaration order over one dataset. Before
//! each unit the runner checks, in this order:
//!
//! - `abort_early` with recorded issues: stop, leaving the dataset as it is
//!   so enclosing pipelines and composites stop as well
//! - `abort_pipe_early` with recorded issues: stop this list only; a parent
//!   composite still moves on to its next field or element
//! - recorded issues and the next unit is a schema or transformation: stop
//!   and mark the dataset untyped, since neither may run on a failed value
//!
//! Validations otherwise keep running after a failure, so one call reports
//! every issue it can collect.
//!
//! - [`runner`] - Synchronous runner and [`Pipe`]
//! - [`async_runner`] - Async runner, [`Step`] and [`PipeAsync`]
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod async_runner;
pub mod runner;

pub use async_runner::{pipe_async, run_async, AsyncUnitRef, PipeAsync, Step};
pub use runner::{halt_before, pipe, run, Halt, Pipe, UnitRef};
