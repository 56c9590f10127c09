//! Actions
//!
//! Actions follow a schema in a pipe. Validations inspect the typed value,
//! transformations replace it.
//!
//! - [`validations`] - Length, range, format and custom checks
//! - [`transformations`] - String normalisation, number conversion and custom mapping
//! - [`async_actions`] - Async check and transform
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod async_actions;
pub mod transformations;
pub mod validations;

pub use async_actions::{check_async, transform_async, CheckAsync, TransformAsync};
pub use transformations::{
    to_lower_case, to_number, to_upper_case, transform, trim, Transformation,
};
pub use validations::{
    check, email, integer, max_length, max_value, min_length, min_value, non_empty, regex,
    Validation,
};
