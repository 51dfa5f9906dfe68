use std::io::Write;

use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the extraction summary after the PDF scan.
pub fn print_extraction_summary(
    w: &mut dyn Write,
    pdf_name: &str,
    total_records: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Extracting student records from {}...", pdf_name)?;
    if color.enabled() {
        writeln!(
            w,
            "Found {} student records",
            total_records.to_string().bold()
        )?;
    } else {
        writeln!(w, "Found {} student records", total_records)?;
    }
    Ok(())
}

/// Print the informational no-match message. Not an error; no output
/// files are written in this case.
pub fn print_no_records(w: &mut dyn Write, pdf_name: &str, color: ColorMode) -> std::io::Result<()> {
    let msg = format!("No student records found in {}.", pdf_name);
    if color.enabled() {
        writeln!(w, "{}", msg.yellow())?;
    } else {
        writeln!(w, "{}", msg)?;
    }
    Ok(())
}

/// Print a per-sink confirmation after a successful write.
pub fn print_sink_written(
    w: &mut dyn Write,
    sink: &str,
    path: &std::path::Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{} {}",
            format!("Student data saved to {}:", sink).green(),
            path.display()
        )?;
    } else {
        writeln!(w, "Student data saved to {}: {}", sink, path.display())?;
    }
    Ok(())
}
