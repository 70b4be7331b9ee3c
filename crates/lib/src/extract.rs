//! # Prompt Extraction
//!
//! Heuristics that mine free-form post text for strings that look like
//! image-generation prompts. Three independent rules run over the same text:
//!
//! 1. Fenced blocks: anything between a pair of triple-backtick fences.
//! 2. Labeled lines: lines such as `Prompt: ...` or `prompt- ...`.
//! 3. Long lines: any line long and wordy enough to be a prompt on its own.
//!
//! Results are unioned in rule order, whitespace-normalized and deduplicated.

use crate::constants::{MIN_LINE_CHARS, MIN_LINE_WORDS, MIN_SNIPPET_CHARS};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fenced block pattern is valid"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

static LABELED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^prompt[:\-]\s*(.+)").expect("labeled line pattern is valid"));

/// Extracts candidate prompts from a block of text.
///
/// Absent or empty input yields an empty list. The returned list has no
/// duplicates and keeps the order in which candidates were first found.
pub fn extract<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let mut found = Candidates::default();

    for capture in FENCED_BLOCK.captures_iter(text) {
        let block = capture[1].trim();
        if char_len(block) > MIN_SNIPPET_CHARS {
            found.push(block);
        }
    }

    let lines: Vec<&str> = LINE_BREAK.split(text).map(str::trim).collect();

    for line in &lines {
        if let Some(capture) = LABELED_LINE.captures(line) {
            let remainder = capture[1].trim();
            if char_len(remainder) > MIN_SNIPPET_CHARS {
                found.push(remainder);
            }
        }
    }

    for line in &lines {
        if char_len(line) > MIN_LINE_CHARS && line.split_whitespace().count() > MIN_LINE_WORDS {
            found.push(line);
        }
    }

    found.into_inner()
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Insertion-ordered set of normalized candidates.
#[derive(Default)]
struct Candidates {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Candidates {
    fn push(&mut self, raw: &str) {
        let candidate = normalize_whitespace(raw);
        if self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
        }
    }

    fn into_inner(self) -> Vec<String> {
        self.ordered
    }
}
