//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared across
//! the crates in the `promptfeed` workspace. Using these constants helps to avoid
//! "magic numbers" and keeps the extraction thresholds in one place.

/// The feeds harvested when no override is configured, in priority order.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.reddit.com/r/StableDiffusion/.rss",
    "https://www.reddit.com/r/midjourney/.rss",
    "https://www.reddit.com/r/AIArt/.rss",
];

/// The maximum number of prompts kept in the output document.
pub const MAX_PROMPTS: usize = 50;

/// The number of leading characters (after lowercasing) used as the dedupe key.
pub const DEDUPE_KEY_CHARS: usize = 400;

/// Fenced blocks and labeled lines must be strictly longer than this.
pub const MIN_SNIPPET_CHARS: usize = 20;

/// Unlabeled lines must be strictly longer than this to be considered.
pub const MIN_LINE_CHARS: usize = 80;

/// Unlabeled lines must contain strictly more words than this.
pub const MIN_LINE_WORDS: usize = 6;

/// The default path of the output document.
pub const DEFAULT_OUTPUT_FILE: &str = "prompts.json";

/// Reddit rejects requests without a browser-like User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; prompt-fetcher/1.0)";

/// Per-request timeout for feed fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
