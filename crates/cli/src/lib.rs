//! # `promptfeed-cli` Library Crate
//!
//! This crate contains the logic behind the `fetch-prompts` binary: argument
//! parsing and a single harvest run from configured feeds to the output file.

use anyhow::{Context, Result};
use clap::Parser;
use promptfeed::constants::{
    DEFAULT_FEEDS, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use promptfeed::{harvest, write_document, PromptDocument};
use promptfeed_rss::RssFeedSource;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Harvest image-generation prompts from community feeds", long_about = None)]
pub struct Cli {
    /// Where to write the prompt document.
    #[arg(long, env = "PROMPTFEED_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Feed URLs to harvest, in priority order. Defaults to the built-in list.
    #[arg(long = "feed", env = "PROMPTFEED_FEEDS", value_delimiter = ',')]
    pub feeds: Vec<String>,

    /// User-Agent header sent with every feed request.
    #[arg(long, env = "PROMPTFEED_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "PROMPTFEED_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    /// The feeds to harvest: the configured list, or the built-in defaults.
    pub fn feeds(&self) -> Vec<String> {
        if self.feeds.is_empty() {
            DEFAULT_FEEDS.iter().map(|f| f.to_string()).collect()
        } else {
            self.feeds.clone()
        }
    }
}

// --- Public Entrypoint ---

/// Runs one harvest and writes the result. Only a failure to build the HTTP
/// client or to persist the output is returned as an error.
pub async fn run(cli: Cli) -> Result<PromptDocument> {
    info!("Starting harvest with args: {:?}", cli);

    let source = RssFeedSource::with_options(&cli.user_agent, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build the feed HTTP client")?;

    let document = harvest(&cli.feeds(), &source).await;

    write_document(&cli.output, &document)
        .with_context(|| format!("Failed to write prompts to '{}'", cli.output.display()))?;

    info!("Wrote {} prompts to {}", document.prompts.len(), cli.output.display());
    Ok(document)
}
