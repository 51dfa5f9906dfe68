use std::path::Path;

use thiserror::Error;

pub mod extract;
pub mod normalize;

pub use extract::{RawRecord, scan_raw_records};
pub use normalize::format_name;
// Re-export domain types from core (canonical definitions live there)
pub use rollcall_core::{BackendError, PdfBackend, StudentRecord};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Extract student records from a PDF file using the given backend for
/// text extraction.
///
/// Pipeline:
/// 1. Extract the text layer via `backend`
/// 2. Scan for identifier + name patterns
/// 3. Normalize each raw name into its display form
///
/// An empty vec means the document contained no records; callers should
/// treat that as "nothing to write" rather than an error.
pub fn extract_records(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
) -> Result<Vec<StudentRecord>, ParsingError> {
    let text = backend.extract_text(pdf_path)?;
    Ok(extract_records_from_text(&text))
}

/// Run the scan + normalization pipeline on already-extracted text.
pub fn extract_records_from_text(text: &str) -> Vec<StudentRecord> {
    let raw = extract::scan_raw_records(text);
    tracing::debug!(matches = raw.len(), "scanned text layer");

    raw.into_iter()
        .map(|r| StudentRecord {
            student_id: r.student_id.to_string(),
            name: normalize::format_name(r.raw_name),
        })
        .collect()
}
