use async_trait::async_trait;
use promptfeed::{FeedError, FeedItem, FeedSource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// --- Mock Feed Source ---

/// What the mock returns for a given source.
#[derive(Clone, Debug)]
enum Scripted {
    Items(Vec<FeedItem>),
    FetchFailure(String),
    ParseFailure(String),
}

/// An in-memory `FeedSource` with pre-programmed responses per source.
///
/// Unknown sources fail with a fetch error, like an unreachable host would.
#[derive(Clone, Debug, Default)]
pub struct MockFeedSource {
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs a successful response for `source`.
    pub fn with_items(self, source: &str, items: Vec<FeedItem>) -> Self {
        self.script(source, Scripted::Items(items))
    }

    /// Pre-programs a transport failure for `source`.
    pub fn with_fetch_failure(self, source: &str, message: &str) -> Self {
        self.script(source, Scripted::FetchFailure(message.to_string()))
    }

    /// Pre-programs a decoding failure for `source`.
    pub fn with_parse_failure(self, source: &str, message: &str) -> Self {
        self.script(source, Scripted::ParseFailure(message.to_string()))
    }

    /// Retrieves the sources fetched so far, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn script(self, source: &str, response: Scripted) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(source.to_string(), response);
        self
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self, source: &str) -> Result<Vec<FeedItem>, FeedError> {
        self.calls.lock().unwrap().push(source.to_string());
        let response = self.responses.lock().unwrap().get(source).cloned();
        match response {
            Some(Scripted::Items(items)) => Ok(items),
            Some(Scripted::FetchFailure(msg)) => Err(FeedError::Fetch(msg)),
            Some(Scripted::ParseFailure(msg)) => Err(FeedError::Parse(msg)),
            None => Err(FeedError::Fetch(format!("no response scripted for {source}"))),
        }
    }
}

// --- Item and Feed Fixtures ---

/// An item carrying only a title.
pub fn titled_item(title: &str) -> FeedItem {
    FeedItem {
        title: Some(title.to_string()),
        content: Some(String::new()),
        ..Default::default()
    }
}

/// An item carrying a body in the plain content field and a title.
pub fn content_item(content: &str, title: &str) -> FeedItem {
    FeedItem {
        content: Some(content.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// Wraps `(title, description)` pairs into an RSS 2.0 document.
pub fn rss_feed(items: &[(&str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(title, description)| {
            format!(
                "<item><title>{}</title><link>http://localhost/post</link><description>{}</description></item>",
                escape_xml(title),
                escape_xml(description)
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
    <title>Test Feed</title>
    <link>http://localhost/test</link>
    <description>A feed for testing prompt extraction.</description>
    {items}
</channel>
</rss>"#
    )
}

/// Wraps `(title, html_content)` pairs into an Atom document, the format Reddit serves.
pub fn atom_feed(entries: &[(&str, &str)]) -> String {
    let entries: String = entries
        .iter()
        .enumerate()
        .map(|(i, (title, content))| {
            format!(
                r#"<entry><id>t3_{i}</id><title>{}</title><updated>2026-10-19T08:00:00+00:00</updated><link href="http://localhost/post/{i}"/><content type="html">{}</content></entry>"#,
                escape_xml(title),
                escape_xml(content)
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
    <id>/r/test/.rss</id>
    <title>Test Atom Feed</title>
    <updated>2026-10-19T08:00:00+00:00</updated>
    {entries}
</feed>"#
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
