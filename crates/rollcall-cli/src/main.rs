use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;

use rollcall_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// Extract student records from a PDF roster and save them to JSON and Excel.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file to process
    pdf_file: PathBuf,

    /// Path to save the JSON file
    #[arg(long, default_value = "students.json")]
    json: PathBuf,

    /// Path to save the Excel file
    #[arg(long, default_value = "students.xlsx")]
    excel: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let color = ColorMode(!cli.no_color);

    validate_pdf_path(&cli.pdf_file)?;

    let pdf_name = cli
        .pdf_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.pdf_file.display().to_string());

    let backend = MupdfBackend::new();
    let records = rollcall_parsing::extract_records(&cli.pdf_file, &backend)
        .with_context(|| format!("failed to read the PDF file {}", cli.pdf_file.display()))?;

    let mut stdout = std::io::stdout();

    if records.is_empty() {
        output::print_no_records(&mut stdout, &pdf_name, color)?;
        return Ok(());
    }

    output::print_extraction_summary(&mut stdout, &pdf_name, records.len(), color)?;

    // Sinks are written sequentially: a JSON failure stops the run before
    // the spreadsheet is attempted, and a spreadsheet failure leaves the
    // JSON file behind.
    rollcall_export::write_json(&records, &cli.json)
        .with_context(|| format!("failed to save JSON to {}", cli.json.display()))?;
    output::print_sink_written(&mut stdout, "JSON", &cli.json, color)?;

    rollcall_export::write_xlsx(&records, &cli.excel)
        .with_context(|| format!("failed to save Excel to {}", cli.excel.display()))?;
    output::print_sink_written(&mut stdout, "Excel", &cli.excel, color)?;

    Ok(())
}

/// Validate the input path before any read attempt: the file must exist
/// and carry a `.pdf` extension (case-insensitive).
fn validate_pdf_path(path: &Path) -> anyhow::Result<()> {
    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }

    let is_pdf = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        bail!("Not a PDF file: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_existing_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        assert!(validate_pdf_path(&path).is_ok());
    }

    #[test]
    fn test_validate_accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ROSTER.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        assert!(validate_pdf_path(&path).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let err = validate_pdf_path(Path::new("does-not-exist.pdf")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_validate_rejects_non_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(&path, b"not a pdf").unwrap();

        let err = validate_pdf_path(&path).unwrap_err();
        assert!(err.to_string().contains("Not a PDF file"));
    }

    #[test]
    fn test_validate_rejects_extensionless_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster");
        std::fs::write(&path, b"not a pdf").unwrap();

        assert!(validate_pdf_path(&path).is_err());
    }
}
