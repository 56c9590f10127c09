//! Message resolution chain
//!
//! The final message of an issue comes from the first level that provides
//! one, tried in this order:
//!
//! 1. call-site override ([`IssueOverrides::message`])
//! 2. override attached to the unit definition
//! 3. locale message registered for the unit's reference
//! 4. schema default for the locale (schema-kind issues only)
//! 5. call-level message from the [`Config`]
//! 6. global default for the locale
//!
//! Each level is a plain function in [`RESOLVERS`], so the order can be read
//! off a single list and each level tested on its own.
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

use super::builder::IssueOverrides;
use crate::config::Config;
use crate::issue::IssueKind;
use crate::message::ErrorMessage;
use crate::unit::IssueSource;
use std::fmt;

/// The level a resolved message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    CallSite,
    UnitDefinition,
    Specific,
    SchemaDefault,
    CallConfig,
    Global,
}

impl fmt::Display for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSource::CallSite => write!(f, "call-site"),
            MessageSource::UnitDefinition => write!(f, "unit-definition"),
            MessageSource::Specific => write!(f, "specific"),
            MessageSource::SchemaDefault => write!(f, "schema-default"),
            MessageSource::CallConfig => write!(f, "call-config"),
            MessageSource::Global => write!(f, "global"),
        }
    }
}

/// Everything the resolvers may consult
pub struct ResolutionScope<'a> {
    pub kind: IssueKind,
    pub reference: &'a str,
    pub lang: Option<&'a str>,
    pub unit_message: Option<&'a ErrorMessage>,
    pub config: &'a Config,
    pub other: Option<&'a IssueOverrides>,
}

impl<'a> ResolutionScope<'a> {
    /// Scope for a unit failing under the given configuration
    pub fn new<C: IssueSource + ?Sized>(
        context: &'a C,
        config: &'a Config,
        other: Option<&'a IssueOverrides>,
    ) -> Self {
        Self {
            kind: context.kind(),
            reference: context.reference(),
            lang: config.lang.as_deref(),
            unit_message: context.message(),
            config,
            other,
        }
    }
}

/// One level of the chain
pub type Resolver = for<'a> fn(&ResolutionScope<'a>) -> Option<&'a ErrorMessage>;

/// The chain, highest precedence first
pub const RESOLVERS: [(MessageSource, Resolver); 6] = [
    (MessageSource::CallSite, call_site),
    (MessageSource::UnitDefinition, unit_definition),
    (MessageSource::Specific, specific),
    (MessageSource::SchemaDefault, schema_default),
    (MessageSource::CallConfig, call_config),
    (MessageSource::Global, global),
];

/// Find the first message provided by the chain
pub fn resolve_message<'a>(
    scope: &ResolutionScope<'a>,
) -> Option<(MessageSource, &'a ErrorMessage)> {
    RESOLVERS
        .iter()
        .find_map(|(source, resolver)| resolver(scope).map(|message| (*source, message)))
}

fn call_site<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    scope.other.and_then(|other| other.message.as_ref())
}

fn unit_definition<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    scope.unit_message
}

fn specific<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    scope
        .config
        .messages
        .specific_message(scope.reference, scope.lang)
}

fn schema_default<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    if scope.kind == IssueKind::Schema {
        scope.config.messages.schema_message(scope.lang)
    } else {
        None
    }
}

fn call_config<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    scope.config.message.as_ref()
}

fn global<'a>(scope: &ResolutionScope<'a>) -> Option<&'a ErrorMessage> {
    scope.config.messages.global_message(scope.lang)
}
