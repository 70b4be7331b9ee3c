//! # fetch-prompts
//!
//! This is the main entry point for the `fetch-prompts` binary. All logic is
//! delegated to the `promptfeed_cli` library crate.

use anyhow::Result;
use clap::Parser;
use promptfeed_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

/// Exit code for an unexpected top-level failure, such as an unwritable output file.
const FAILURE_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Setup logging
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("promptfeed=info".parse()?)
                .add_directive("promptfeed_rss=info".parse()?)
                .add_directive("promptfeed_cli=info".parse()?),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Run the harvest; per-feed failures are already reduced to warnings
    if let Err(e) = run(cli).await {
        eprintln!("[fetch-prompts error] {e:?}");
        std::process::exit(FAILURE_EXIT_CODE);
    }

    Ok(())
}
