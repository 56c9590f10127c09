//! Dot-path rendering of issue locations

use super::types::Issue;

/// Join the keys of an issue's path with dots, e.g. `users.0.email`
///
/// Returns `None` for issues without a path.
pub fn dot_path(issue: &Issue) -> Option<String> {
    let path = issue.path.as_ref()?;
    let keys: Vec<String> = path.iter().map(|item| item.key.to_string()).collect();
    Some(keys.join("."))
}
