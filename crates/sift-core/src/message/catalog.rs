//! Message catalogs loaded from YAML or JSON
//!
//! ```yaml
//! global:
//!   "*": "The input is invalid"
//!   de: "Die Eingabe ist ungültig"
//! schema:
//!   de: "Falscher Typ"
//! specific:
//!   min_length:
//!     de: "Zu kurz"
//! ```
//!
//! The `"*"` locale key registers a message for the default locale.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Locale key that maps to the default locale
pub const DEFAULT_LOCALE_KEY: &str = "*";

/// Serialized form of a message store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageCatalog {
    /// Locale -> global fallback message
    pub global: BTreeMap<String, String>,
    /// Locale -> schema default message
    pub schema: BTreeMap<String, String>,
    /// Unit reference -> locale -> message
    pub specific: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    /// Parse a catalog from YAML text
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(source)?;
        catalog.check()?;
        debug!(entries = catalog.len(), "loaded message catalog from YAML");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(source: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(source)?;
        catalog.check()?;
        debug!(entries = catalog.len(), "loaded message catalog from JSON");
        Ok(catalog)
    }

    /// Total number of messages in the catalog
    pub fn len(&self) -> usize {
        self.global.len()
            + self.schema.len()
            + self.specific.values().map(BTreeMap::len).sum::<usize>()
    }

    /// Check whether the catalog holds no messages
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn global_entries(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
        self.global.iter().map(|(lang, text)| (locale(lang), text.as_str()))
    }

    pub(crate) fn schema_entries(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
        self.schema.iter().map(|(lang, text)| (locale(lang), text.as_str()))
    }

    pub(crate) fn specific_entries(&self) -> impl Iterator<Item = (&str, Option<&str>, &str)> {
        self.specific.iter().flat_map(|(reference, messages)| {
            messages
                .iter()
                .map(move |(lang, text)| (reference.as_str(), locale(lang), text.as_str()))
        })
    }

    fn check(&self) -> Result<()> {
        let sections = [("global", &self.global), ("schema", &self.schema)];
        for (section, messages) in sections {
            check_section(section, messages)?;
        }
        for (reference, messages) in &self.specific {
            if reference.trim().is_empty() {
                return Err(Error::configuration(
                    "specific message references cannot be empty",
                ));
            }
            check_section(&format!("specific.{}", reference), messages)?;
        }
        Ok(())
    }
}

fn locale(key: &str) -> Option<&str> {
    if key == DEFAULT_LOCALE_KEY {
        None
    } else {
        Some(key)
    }
}

fn check_section(section: &str, messages: &BTreeMap<String, String>) -> Result<()> {
    for (lang, text) in messages {
        if lang.trim().is_empty() {
            return Err(Error::configuration(format!(
                "empty locale key in '{}' (use \"{}\" for the default locale)",
                section, DEFAULT_LOCALE_KEY
            )));
        }
        if text.is_empty() {
            return Err(Error::configuration(format!(
                "empty message for locale '{}' in '{}'",
                lang, section
            )));
        }
    }
    Ok(())
}
