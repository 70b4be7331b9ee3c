use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// One entry yielded by a feed, reduced to the fields the extractor mines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    /// The `content:encoded` body, when the feed provides one.
    pub rich_content: Option<String>,
    /// The main content (RSS `description` or Atom `content`).
    pub content: Option<String>,
    /// A short plain-text summary.
    pub snippet: Option<String>,
    pub title: Option<String>,
}

impl FeedItem {
    /// Builds the text handed to the extractor.
    ///
    /// The richest non-empty body field wins, falling back to the title, and the
    /// title is always appended on its own line so labeled titles are mined too.
    pub fn mined_text(&self) -> String {
        let body = [
            &self.rich_content,
            &self.content,
            &self.snippet,
            &self.title,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .find(|value| !value.is_empty())
        .unwrap_or_default();

        format!("{body}\n{}", self.title.as_deref().unwrap_or_default())
    }
}

/// The document persisted at the end of every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDocument {
    /// Generation time, serialized as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    #[serde(serialize_with = "serialize_millis")]
    pub updated: DateTime<Utc>,
    pub prompts: Vec<String>,
}

impl PromptDocument {
    /// Stamps a prompt list with the current time.
    pub fn new(prompts: Vec<String>) -> Self {
        Self {
            updated: Utc::now(),
            prompts,
        }
    }
}

fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
