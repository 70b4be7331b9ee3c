//! # Bounding Logic Tests
//!
//! This file contains tests for the `bound` function to ensure its logic for
//! case-insensitive de-duplication, first-seen ordering and capping is correct.

use promptfeed::constants::{DEDUPE_KEY_CHARS, MAX_PROMPTS};
use promptfeed::{bound, dedupe_key};

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("candidate prompt number {i}")).collect()
}

#[test]
fn test_keeps_first_seen_order() {
    let input = vec!["gamma ray burst", "alpha centauri", "beta pictoris"];

    assert_eq!(bound(input.clone()), input);
}

#[test]
fn test_case_insensitive_dedup_keeps_first_spelling() {
    let input = vec!["Neon Tokyo Street", "an unrelated one", "neon tokyo street", "NEON TOKYO STREET"];

    assert_eq!(bound(input), vec!["Neon Tokyo Street", "an unrelated one"]);
}

#[test]
fn test_dedup_ignores_text_past_key_length() {
    let prefix = "x".repeat(DEDUPE_KEY_CHARS);
    let first = format!("{prefix} ending one");
    let second = format!("{prefix} ending two");
    let shorter = "x".repeat(DEDUPE_KEY_CHARS - 1);

    let result = bound(vec![first.clone(), second, shorter.clone()]);

    assert_eq!(result, vec![first, shorter]);
}

#[test]
fn test_dedupe_key_counts_characters_not_bytes() {
    let candidate = "é".repeat(DEDUPE_KEY_CHARS + 10);

    let key = dedupe_key(&candidate);

    assert_eq!(key.chars().count(), DEDUPE_KEY_CHARS);
}

#[test]
fn test_cap_is_enforced() {
    let result = bound(numbered(MAX_PROMPTS * 3));

    assert_eq!(result.len(), MAX_PROMPTS);
    assert_eq!(result, numbered(MAX_PROMPTS));
}

#[test]
fn test_fewer_than_cap_keeps_everything_unique() {
    let mut input = numbered(10);
    input.extend(numbered(10).into_iter().map(|c| c.to_uppercase()));

    let result = bound(input);

    assert_eq!(result, numbered(10));
}

#[test]
fn test_duplicates_do_not_consume_slots() {
    let mut input = vec!["repeated prompt".to_string(); 100];
    input.extend(numbered(MAX_PROMPTS));

    let result = bound(input);

    assert_eq!(result.len(), MAX_PROMPTS);
    assert_eq!(result[0], "repeated prompt");
    assert_eq!(result[MAX_PROMPTS - 1], format!("candidate prompt number {}", MAX_PROMPTS - 2));
}

#[test]
fn test_bound_is_idempotent() {
    let mut input = numbered(80);
    input.insert(5, "CANDIDATE PROMPT NUMBER 1".to_string());

    let once = bound(input);
    let twice = bound(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_empty_input() {
    assert!(bound(Vec::<String>::new()).is_empty());
}
