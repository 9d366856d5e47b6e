//! Hint collection from environment sources.
//!
//! Three sources feed discovery, in priority order: the explicit
//! override variable, `JAVA_HOME`, and `PATH` entries whose text looks
//! runtime-related. Collection never touches the filesystem; it only
//! reads variables and records where each hint came from.

use std::env;

use super::types::{RawHint, SourceTag};

/// Override variable consulted before anything else.
pub const OVERRIDE_VAR: &str = "JDK_SCOUT_JDK";

/// Conventional home variable.
pub const HOME_VAR: &str = "JAVA_HOME";

/// Search-path variable scanned for runtime-looking entries.
pub const PATH_VAR: &str = "PATH";

/// Case-insensitive substrings marking a `PATH` entry as runtime-related.
const RUNTIME_TOKENS: &[&str] = &[
    "java", "jdk", "jre", "zulu", "corretto", "temurin", "graalvm", "semeru", "liberica",
];

/// Collect raw hints from the real process environment.
pub fn collect() -> Vec<RawHint> {
    collect_with_env(|key| env::var(key))
}

/// Collect raw hints with a custom env var lookup (for testing).
///
/// Insertion order is significant: override first, then `JAVA_HOME`,
/// then matching `PATH` entries in list order with the first tagged
/// [`SourceTag::PathPrimary`]. Blank or whitespace-only values are
/// skipped silently; a missing hint is a normal, expected condition.
pub fn collect_with_env<F>(env_fn: F) -> Vec<RawHint>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    let mut hints = Vec::new();

    if let Ok(value) = env_fn(OVERRIDE_VAR) {
        if value.trim().is_empty() {
            tracing::debug!("{OVERRIDE_VAR} is blank, skipping");
        } else {
            hints.push(RawHint::new(value, SourceTag::Override));
        }
    }

    if let Ok(value) = env_fn(HOME_VAR) {
        if value.trim().is_empty() {
            tracing::debug!("{HOME_VAR} is blank, skipping");
        } else {
            hints.push(RawHint::new(value, SourceTag::Home));
        }
    }

    if let Ok(value) = env_fn(PATH_VAR) {
        let mut primary_seen = false;
        for entry in env::split_paths(&value) {
            let entry = entry.to_string_lossy();
            if entry.trim().is_empty() || !looks_like_runtime(&entry) {
                continue;
            }
            let tag = if primary_seen {
                SourceTag::Path
            } else {
                primary_seen = true;
                SourceTag::PathPrimary
            };
            hints.push(RawHint::new(entry.into_owned(), tag));
        }
    }

    tracing::debug!(count = hints.len(), "collected raw hints");
    hints
}

/// Whether a `PATH` entry's text contains any known runtime token.
fn looks_like_runtime(entry: &str) -> bool {
    let lowered = entry.to_lowercase();
    RUNTIME_TOKENS.iter().any(|token| lowered.contains(token))
}
