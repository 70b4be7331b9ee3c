//! # Feed Collection
//!
//! Walks the configured sources one at a time, mines every item they return,
//! and accumulates the raw candidate stream for the bounder.

use crate::errors::FeedError;
use crate::extract::extract;
use crate::types::FeedItem;
use async_trait::async_trait;
use tracing::{info, warn};

/// A generic trait that defines the contract for a feed fetch plugin.
///
/// Implementations own both the transport and the decoding of a feed, so the
/// collector only ever sees a list of items or a single error.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches and parses the feed identified by `source`.
    async fn fetch(&self, source: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Collects candidates from every source, in order.
///
/// Sources are fetched sequentially so that "first seen" is deterministic. A
/// failing source is logged and skipped; this function itself never fails.
/// Duplicates are kept here and resolved later by [`crate::bound`].
pub async fn collect<S>(sources: &[S], fetcher: &dyn FeedSource) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut candidates = Vec::new();

    for source in sources {
        let source = source.as_ref();
        let items = match fetcher.fetch(source).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Skipping feed {source}: {e}");
                continue;
            }
        };

        let before = candidates.len();
        for item in &items {
            candidates.extend(extract(item.mined_text().as_str()));
        }
        info!(
            "Feed {source}: {} items yielded {} candidates.",
            items.len(),
            candidates.len() - before
        );
    }

    candidates
}
