//! # `promptfeed-rss`: Feed Fetch Plugin
//!
//! This crate provides the network side of a harvest as a self-contained
//! plugin. It implements the `FeedSource` trait from the core `promptfeed`
//! library: one HTTP GET per feed, then decoding as RSS 2.0 with a fallback to
//! Atom, which is what Reddit actually serves.

use async_trait::async_trait;
use promptfeed::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use promptfeed::extract::normalize_whitespace;
use promptfeed::{FeedError, FeedItem, FeedSource};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Custom error types for fetching and decoding a feed.
#[derive(Error, Debug)]
pub enum RssFetchError {
    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Feed responded with status {0}")]
    Status(u16),
    #[error("Failed to parse feed as RSS ({rss}) or Atom ({atom})")]
    Parse {
        rss: rss::Error,
        atom: atom_syndication::Error,
    },
}

/// A helper to convert the specific `RssFetchError` into the generic `promptfeed::FeedError`.
impl From<RssFetchError> for FeedError {
    fn from(err: RssFetchError) -> Self {
        match err {
            RssFetchError::Fetch(e) => FeedError::Fetch(e.to_string()),
            RssFetchError::Status(status) => FeedError::Status { status },
            e @ RssFetchError::Parse { .. } => FeedError::Parse(e.to_string()),
        }
    }
}

/// The `FeedSource` implementation backed by `reqwest`, `rss` and `atom_syndication`.
#[derive(Clone, Debug)]
pub struct RssFeedSource {
    client: reqwest::Client,
}

impl RssFeedSource {
    /// Creates a source with the default User-Agent and timeout.
    pub fn new() -> Result<Self, RssFetchError> {
        Self::with_options(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a source with a custom User-Agent and per-request timeout.
    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, RssFetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, RssFetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RssFetchError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    /// Fetches a feed and flattens its entries into `FeedItem`s.
    async fn fetch(&self, source: &str) -> Result<Vec<FeedItem>, FeedError> {
        info!("Fetching feed from: {source}");
        let content = self.fetch_bytes(source).await?;
        let items = parse_feed(&content)?;
        debug!("Parsed {} items from {source}", items.len());
        Ok(items)
    }
}

/// Decodes a feed body, trying RSS 2.0 first and Atom second.
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedItem>, RssFetchError> {
    let rss_err = match rss::Channel::read_from(content) {
        Ok(channel) => return Ok(channel.items().iter().map(rss_item).collect()),
        Err(e) => e,
    };
    atom_syndication::Feed::read_from(content)
        .map(|feed| feed.entries().iter().map(atom_entry).collect())
        .map_err(|atom| RssFetchError::Parse { rss: rss_err, atom })
}

fn rss_item(item: &rss::Item) -> FeedItem {
    // RSS has no summary distinct from its body, and the body always outranks
    // the snippet when mining, so none is derived.
    FeedItem {
        rich_content: item.content().map(str::to_string),
        content: item.description().map(str::to_string),
        snippet: None,
        title: item.title().map(str::to_string),
    }
}

fn atom_entry(entry: &atom_syndication::Entry) -> FeedItem {
    let content = entry
        .content()
        .and_then(|c| c.value())
        .map(str::to_string);
    let snippet = entry
        .summary()
        .map(|s| strip_html(s.as_str()))
        .filter(|s| !s.is_empty());

    FeedItem {
        rich_content: None,
        content,
        snippet,
        title: Some(entry.title().as_str().to_string()),
    }
}

/// Reduces an HTML fragment to its text, decoding entities and collapsing whitespace.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    normalize_whitespace(&text)
}
