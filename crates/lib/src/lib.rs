//! # promptfeed
//!
//! This crate harvests image-generation prompts from community feeds. It mines
//! each feed item with a set of text heuristics, deduplicates the candidates
//! case-insensitively, and produces a bounded, timestamped [`PromptDocument`].
//!
//! Fetching and parsing feeds is delegated to a [`FeedSource`] plugin (see the
//! `promptfeed-rss` crate), which keeps this crate free of network code.

pub mod bound;
pub mod collect;
pub mod constants;
pub mod errors;
pub mod extract;
pub mod output;
pub mod types;

pub use bound::{bound, dedupe_key};
pub use collect::{collect, FeedSource};
pub use errors::{FeedError, OutputError};
pub use extract::extract;
pub use output::write_document;
pub use types::{FeedItem, PromptDocument};

use tracing::info;

/// Runs one full harvest: collect from every source, bound, and stamp.
pub async fn harvest<S>(sources: &[S], fetcher: &dyn FeedSource) -> PromptDocument
where
    S: AsRef<str>,
{
    let candidates = collect(sources, fetcher).await;
    info!(
        "Collected {} candidates from {} feeds.",
        candidates.len(),
        sources.len()
    );
    PromptDocument::new(bound(candidates))
}
