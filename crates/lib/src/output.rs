//! # Output Sink
//!
//! Persists the prompt document as pretty-printed JSON, overwriting any
//! previous run's output.

use crate::errors::OutputError;
use crate::types::PromptDocument;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes `document` to `path`, creating missing parent directories.
pub fn write_document(path: &Path, document: &PromptDocument) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(document)?;
    let io_err = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, json).map_err(io_err)?;

    debug!("Wrote prompt document to {}", path.display());
    Ok(())
}
