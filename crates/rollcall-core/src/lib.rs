use serde::{Deserialize, Serialize};

pub mod backend;

pub use backend::{BackendError, PdfBackend};

/// A student record extracted from a document's text layer.
///
/// `student_id` is a literal `F` followed by exactly 10 ASCII digits;
/// `name` is the title-cased, whitespace-collapsed display form of the
/// raw name field. Records are immutable once produced and keep the
/// order in which they appear in the source text; duplicate identifiers
/// are preserved as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
}
