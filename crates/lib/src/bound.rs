//! # Deduplication and Bounding
//!
//! Folds the raw candidate stream into the final prompt list: first seen wins,
//! comparison is case-insensitive on a truncated key, and the list is capped.

use crate::constants::{DEDUPE_KEY_CHARS, MAX_PROMPTS};
use std::collections::HashSet;
use tracing::debug;

/// The key two candidates are compared by: lowercase, first 400 characters.
pub fn dedupe_key(candidate: &str) -> String {
    candidate.to_lowercase().chars().take(DEDUPE_KEY_CHARS).collect()
}

/// Returns at most `MAX_PROMPTS` candidates with unique dedupe keys, in input order.
///
/// Iteration stops as soon as the cap is reached; later candidates are never
/// looked at.
pub fn bound<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for candidate in candidates {
        let candidate = candidate.into();
        if seen.insert(dedupe_key(&candidate)) {
            unique.push(candidate);
        }
        if unique.len() >= MAX_PROMPTS {
            debug!("Prompt cap of {MAX_PROMPTS} reached; ignoring remaining candidates.");
            break;
        }
    }

    unique
}
