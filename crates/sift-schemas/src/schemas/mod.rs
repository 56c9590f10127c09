//! Schemas
//!
//! Schemas check a value's base type. On success they mark the dataset typed;
//! on failure they record a schema issue, which leaves the dataset untyped.
//!
//! - [`primitives`] - `string`, `number`, `boolean`, `null`, `literal`, `any`, `unknown`
//! - [`wrappers`] - `optional`, `nullable`, `nullish`
//! - [`object`] - Objects with declared entries
//! - [`array`] - Arrays of one item schema
//! - [`union`] - First matching option
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod object;
pub mod primitives;
pub mod union;
pub mod wrappers;

pub use array::{array, ArraySchema};
pub use object::{object, ObjectSchema};
pub use primitives::{
    any, boolean, literal, null, number, string, unknown, LiteralSchema, PassthroughSchema,
    TypeSchema,
};
pub use union::{union, UnionSchema};
pub use wrappers::{nullable, nullish, optional, optional_with_default, Admits, WrapperSchema};
