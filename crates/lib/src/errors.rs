use thiserror::Error;

/// A generic error type for feed fetch plugins.
///
/// Each plugin maps its transport and decoding errors into these variants so the
/// collector can log and skip a failing source in a uniform way.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to fetch feed: {0}")]
    Fetch(String),

    #[error("Feed responded with non-success status {status}")]
    Status { status: u16 },

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Errors raised while persisting the output document. These are fatal to a run.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize prompt document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
