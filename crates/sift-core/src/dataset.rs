//! The dataset threaded through every unit of a validation call
//!
//! A dataset is owned by exactly one in-flight call. Units receive it by
//! value and hand it back, mutating it in place in between. The API only
//! allows the two state changes the engine relies on: the typed state moves
//! forward and never back to typed once invalidated, and issues are only
//! ever appended.

use crate::issue::Issue;
use serde_json::Value;

/// Whether the value has been confirmed to match the schema's base type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeState {
    /// No schema has checked the value yet
    Unchecked,
    /// A schema confirmed the value's type
    Typed,
    /// A schema rejected the value; permanent for this dataset
    Untyped,
}

/// Execution state of one validation call
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    value: Option<Value>,
    state: TypeState,
    issues: Option<Vec<Issue>>,
}

impl Dataset {
    /// Create a dataset for a raw input; `None` is an absent value
    pub fn new(value: impl Into<Option<Value>>) -> Self {
        Self {
            value: value.into(),
            state: TypeState::Unchecked,
            issues: None,
        }
    }

    /// Current value
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Mutable access to the current value
    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    /// Replace the current value
    pub fn set_value(&mut self, value: impl Into<Option<Value>>) {
        self.value = value.into();
    }

    /// Take the current value, leaving it absent
    pub fn take_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Current typed state
    pub fn state(&self) -> TypeState {
        self.state
    }

    /// True iff a schema confirmed the value and none rejected it
    pub fn is_typed(&self) -> bool {
        self.state == TypeState::Typed
    }

    /// Record a successful base-type check
    ///
    /// Has no effect once the dataset is untyped.
    pub fn mark_typed(&mut self) {
        if self.state == TypeState::Unchecked {
            self.state = TypeState::Typed;
        }
    }

    /// Record that the value does not match its schema
    pub fn mark_untyped(&mut self) {
        self.state = TypeState::Untyped;
    }

    /// Issues in detection order, `None` until the first one is appended
    pub fn issues(&self) -> Option<&[Issue]> {
        self.issues.as_deref()
    }

    /// Whether any issue has been recorded
    pub fn has_issues(&self) -> bool {
        self.issues.as_ref().is_some_and(|issues| !issues.is_empty())
    }

    /// Number of recorded issues
    pub fn issue_count(&self) -> usize {
        self.issues.as_ref().map_or(0, Vec::len)
    }

    /// Append one issue at the end
    pub fn push_issue(&mut self, issue: Issue) {
        self.issues.get_or_insert_with(Vec::new).push(issue);
    }

    /// Append issues at the end, keeping their order
    pub fn extend_issues(&mut self, issues: impl IntoIterator<Item = Issue>) {
        let mut issues = issues.into_iter().peekable();
        if issues.peek().is_some() {
            self.issues.get_or_insert_with(Vec::new).extend(issues);
        }
    }

    /// Final value
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// Recorded issues
    pub fn into_issues(self) -> Option<Vec<Issue>> {
        self.issues
    }

    /// Split into value, typed flag and issues
    pub fn into_parts(self) -> (Option<Value>, bool, Option<Vec<Issue>>) {
        let typed = self.is_typed();
        (self.value, typed, self.issues)
    }
}
