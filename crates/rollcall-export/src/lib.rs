use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use rollcall_core::StudentRecord;
use rust_xlsxwriter::Workbook;

/// Name of the single sheet in the spreadsheet output.
pub const SHEET_NAME: &str = "Students";

/// Header row of the spreadsheet output.
pub const HEADER: [&str; 2] = ["Student ID", "Name"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Write the record sequence to `path` as a UTF-8 JSON array of
/// `{studentId, name}` objects with 4-space indentation.
pub fn write_json(records: &[StudentRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut ser)?;
    writer.flush()?;

    tracing::debug!(records = records.len(), path = %path.display(), "wrote JSON output");
    Ok(())
}

/// Write the record sequence to `path` as a single-sheet XLSX workbook:
/// a `Students` sheet with a `["Student ID", "Name"]` header row followed
/// by one row per record in original order.
pub fn write_xlsx(records: &[StudentRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.write_string(0, 0, HEADER[0])?;
    sheet.write_string(0, 1, HEADER[1])?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, record.student_id.as_str())?;
        sheet.write_string(row, 1, record.name.as_str())?;
    }

    workbook.save(path)?;

    tracing::debug!(records = records.len(), path = %path.display(), "wrote XLSX output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<StudentRecord> {
        vec![
            StudentRecord {
                student_id: "F1234567890".into(),
                name: "John Smith".into(),
            },
            StudentRecord {
                student_id: "F0000000001".into(),
                name: "Jane Doe".into(),
            },
        ]
    }

    #[test]
    fn test_write_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");

        write_json(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: Vec<StudentRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, sample_records());
    }

    #[test]
    fn test_write_json_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");

        write_json(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    {"));
        assert!(content.contains("\n        \"studentId\": \"F1234567890\""));
    }

    #[test]
    fn test_write_json_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("students.json");

        let err = write_json(&sample_records(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_write_xlsx_produces_a_workbook_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.xlsx");

        write_xlsx(&sample_records(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // XLSX is a zip container
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_write_xlsx_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("students.xlsx");

        assert!(write_xlsx(&sample_records(), &path).is_err());
    }
}
