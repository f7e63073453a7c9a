//! Text Extractor: turns a stored résumé file into plain text.
//!
//! Parsing is CPU-bound and synchronous; the async entry point runs it inside
//! `tokio::task::spawn_blocking`. A parser panic surfaces as `ExtractionError::Panicked`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub mod docx;
pub mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX: {0}")]
    Docx(String),

    #[error("Document parser crashed: {0}")]
    Panicked(String),
}

/// The document kinds the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive lookup. `None` for anything outside the allowed set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

/// Extracts text from the file at `path` on the blocking pool.
pub async fn extract(path: &Path, format: DocumentFormat) -> Result<String, ExtractionError> {
    let path: PathBuf = path.to_path_buf();

    let text = tokio::task::spawn_blocking(move || extract_blocking(&path, format))
        .await
        .map_err(|e| ExtractionError::Panicked(e.to_string()))??;

    debug!(
        "Extracted {} chars from {} upload",
        text.len(),
        format.extension()
    );
    Ok(text)
}

/// Blocking implementation. Reads the file; never writes to it.
pub fn extract_blocking(path: &Path, format: DocumentFormat) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    match format {
        DocumentFormat::Pdf => pdf::extract_text(&bytes),
        DocumentFormat::Docx => docx::extract_text(&bytes),
    }
}
