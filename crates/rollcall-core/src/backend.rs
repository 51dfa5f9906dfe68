use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step; the record
/// scanning and normalization pipeline lives in `rollcall_parsing`.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF file.
    ///
    /// Returns the concatenated text of every page, in page order.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
