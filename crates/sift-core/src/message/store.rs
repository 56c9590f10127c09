//! Locale-keyed message registries
//!
//! The store is populated during setup and then shared read-only (usually
//! behind an `Arc` inside [`Config`](crate::Config)). Registration takes
//! `&mut self`, so writing after the store has been shared requires the caller
//! to own a fresh copy or synchronize externally.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use super::catalog::MessageCatalog;
use super::ErrorMessage;
use std::collections::HashMap;
use tracing::debug;

/// Locale key; `None` stands for the default locale
type LangKey = Option<String>;

/// Registries for global, schema-default and unit-specific messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageStore {
    global: HashMap<LangKey, ErrorMessage>,
    schema: HashMap<LangKey, ErrorMessage>,
    specific: HashMap<String, HashMap<LangKey, ErrorMessage>>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded catalog
    pub fn from_catalog(catalog: &MessageCatalog) -> Self {
        let mut store = Self::new();
        store.load_catalog(catalog);
        store
    }

    /// Register every message of a catalog, replacing existing entries
    pub fn load_catalog(&mut self, catalog: &MessageCatalog) {
        for (lang, text) in catalog.global_entries() {
            self.set_global_message(text, lang);
        }
        for (lang, text) in catalog.schema_entries() {
            self.set_schema_message(text, lang);
        }
        for (reference, lang, text) in catalog.specific_entries() {
            self.set_specific_message(reference, text, lang);
        }
    }

    /// Register the global fallback message for a locale
    pub fn set_global_message(&mut self, message: impl Into<ErrorMessage>, lang: Option<&str>) {
        debug!(lang = ?lang, "registering global message");
        self.global.insert(lang.map(str::to_string), message.into());
    }

    /// Look up the global fallback message for a locale
    pub fn global_message(&self, lang: Option<&str>) -> Option<&ErrorMessage> {
        self.global.get(&lang.map(str::to_string))
    }

    /// Remove the global fallback message for a locale
    pub fn delete_global_message(&mut self, lang: Option<&str>) -> Option<ErrorMessage> {
        self.global.remove(&lang.map(str::to_string))
    }

    /// Register the default message used by every schema-kind issue
    pub fn set_schema_message(&mut self, message: impl Into<ErrorMessage>, lang: Option<&str>) {
        debug!(lang = ?lang, "registering schema message");
        self.schema.insert(lang.map(str::to_string), message.into());
    }

    /// Look up the schema default message for a locale
    pub fn schema_message(&self, lang: Option<&str>) -> Option<&ErrorMessage> {
        self.schema.get(&lang.map(str::to_string))
    }

    /// Remove the schema default message for a locale
    pub fn delete_schema_message(&mut self, lang: Option<&str>) -> Option<ErrorMessage> {
        self.schema.remove(&lang.map(str::to_string))
    }

    /// Register a message for every unit defined with the given reference
    pub fn set_specific_message(
        &mut self,
        reference: impl Into<String>,
        message: impl Into<ErrorMessage>,
        lang: Option<&str>,
    ) {
        let reference = reference.into();
        debug!(reference = %reference, lang = ?lang, "registering specific message");
        self.specific
            .entry(reference)
            .or_default()
            .insert(lang.map(str::to_string), message.into());
    }

    /// Look up a unit-specific message
    pub fn specific_message(&self, reference: &str, lang: Option<&str>) -> Option<&ErrorMessage> {
        self.specific
            .get(reference)
            .and_then(|messages| messages.get(&lang.map(str::to_string)))
    }

    /// Remove a unit-specific message
    pub fn delete_specific_message(
        &mut self,
        reference: &str,
        lang: Option<&str>,
    ) -> Option<ErrorMessage> {
        let messages = self.specific.get_mut(reference)?;
        let removed = messages.remove(&lang.map(str::to_string));
        if messages.is_empty() {
            self.specific.remove(reference);
        }
        removed
    }

    /// Check whether no message is registered at all
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.schema.is_empty() && self.specific.is_empty()
    }
}
