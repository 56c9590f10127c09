//! Error messages and the message store
//!
//! A message is either literal text or a function that renders text from the
//! finished [`Issue`]. Messages can be attached to a unit at definition time,
//! passed per call through the [`Config`](crate::Config), or registered in a
//! [`MessageStore`] keyed by locale.
//!
//! - [`store`] - Locale-keyed registries for global, schema and unit-specific messages
//! - [`catalog`] - Serde form for loading registries from YAML or JSON
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod store;

pub use catalog::MessageCatalog;
pub use store::MessageStore;

use crate::issue::Issue;
use std::fmt;
use std::sync::Arc;

/// Function form of a message, rendered from the issue it describes
pub type MessageFn = Arc<dyn Fn(&Issue) -> String + Send + Sync>;

/// A literal message or a function producing one
#[derive(Clone)]
pub enum ErrorMessage {
    Text(String),
    Func(MessageFn),
}

impl ErrorMessage {
    /// Create a literal message
    pub fn text(text: impl Into<String>) -> Self {
        ErrorMessage::Text(text.into())
    }

    /// Create a message rendered from the issue
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Issue) -> String + Send + Sync + 'static,
    {
        ErrorMessage::Func(Arc::new(f))
    }

    /// Produce the final text for an issue
    pub fn render(&self, issue: &Issue) -> String {
        match self {
            ErrorMessage::Text(text) => text.clone(),
            ErrorMessage::Func(f) => f(issue),
        }
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMessage::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ErrorMessage::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

impl PartialEq for ErrorMessage {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorMessage::Text(a), ErrorMessage::Text(b)) => a == b,
            // Functions compare by identity
            (ErrorMessage::Func(a), ErrorMessage::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for ErrorMessage {
    fn from(text: &str) -> Self {
        ErrorMessage::Text(text.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(text: String) -> Self {
        ErrorMessage::Text(text)
    }
}
