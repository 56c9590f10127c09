//! Per-call validation configuration
//!
//! [`Config`] is what every unit receives next to the dataset. [`Settings`] is
//! its file form, so locale and abort behaviour can be loaded from YAML or
//! JSON at startup.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use crate::message::{ErrorMessage, MessageStore};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Options active for one validation call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Target locale for message lookup
    pub lang: Option<String>,
    /// Call-level fallback message
    pub message: Option<ErrorMessage>,
    /// Stop everything after the first issue
    pub abort_early: Option<bool>,
    /// Stop only the current pipeline after the first issue
    pub abort_pipe_early: Option<bool>,
    /// Message registry consulted while building issues
    pub messages: Arc<MessageStore>,
}

impl Config {
    /// Create a configuration with no options and an empty message store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration backed by a shared message store
    pub fn with_store(messages: Arc<MessageStore>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Build a configuration from loaded settings
    pub fn from_settings(settings: &Settings, messages: Arc<MessageStore>) -> Self {
        Self {
            lang: settings.lang.clone(),
            message: settings.message.clone().map(ErrorMessage::Text),
            abort_early: settings.abort_early,
            abort_pipe_early: settings.abort_pipe_early,
            messages,
        }
    }

    /// Set the locale
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the call-level fallback message
    pub fn message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Enable or disable abort-early
    pub fn abort_early(mut self, enabled: bool) -> Self {
        self.abort_early = Some(enabled);
        self
    }

    /// Enable or disable abort-pipe-early
    pub fn abort_pipe_early(mut self, enabled: bool) -> Self {
        self.abort_pipe_early = Some(enabled);
        self
    }

    /// Whether abort-early is active
    pub fn aborts_early(&self) -> bool {
        self.abort_early.unwrap_or(false)
    }

    /// Whether abort-pipe-early is active
    pub fn aborts_pipe_early(&self) -> bool {
        self.abort_pipe_early.unwrap_or(false)
    }

    /// Fill absent options from process-wide defaults
    ///
    /// The locale and abort flags are inherited; the call-level message is
    /// not, and the message store always stays the one of `self`.
    pub fn with_defaults(&self, defaults: &Config) -> Config {
        Config {
            lang: self.lang.clone().or_else(|| defaults.lang.clone()),
            message: self.message.clone(),
            abort_early: self.abort_early.or(defaults.abort_early),
            abort_pipe_early: self.abort_pipe_early.or(defaults.abort_pipe_early),
            messages: Arc::clone(&self.messages),
        }
    }
}

/// File form of [`Config`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub lang: Option<String>,
    pub message: Option<String>,
    pub abort_early: Option<bool>,
    pub abort_pipe_early: Option<bool>,
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(source)?;
        settings.check()?;
        Ok(settings)
    }

    /// Parse settings from JSON text
    pub fn from_json_str(source: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(source)?;
        settings.check()?;
        Ok(settings)
    }

    /// Load settings from a `.yaml`, `.yml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading validation settings");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            other => Err(Error::configuration(format!(
                "unsupported settings format '{}' for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    fn check(&self) -> Result<()> {
        if let Some(lang) = &self.lang {
            if lang.trim().is_empty() {
                return Err(Error::configuration("lang cannot be empty"));
            }
        }
        Ok(())
    }
}
