// src/presentation.rs
use crate::RunSummary;
use crate::error::AppError;
use file_indexer_engine::pdf::PageCountMethod;
use file_indexer_report::AttemptKind;
use std::fmt::Write;

/// Console summary printed after a successful run.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let result = &summary.result;
    let _ = writeln!(out, "file_indexer v{}", crate::VERSION);
    let _ = writeln!(out, "Indexed items: {}", result.entries.len());
    let _ = writeln!(out, "Total pages:   {}", result.total_pages());
    let estimated = result
        .entries
        .iter()
        .filter(|e| e.page_method == Some(PageCountMethod::Heuristic))
        .count();
    if estimated > 0 {
        let _ = writeln!(out, "Estimated page counts: {estimated} PDF(s) could only be read by byte scan");
    }

    for output in &summary.export.outputs {
        let _ = writeln!(out, "{} written to {}", output.format, output.path.display());
    }

    let fallbacks: Vec<_> = summary.export.fallbacks().collect();
    if !fallbacks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notices:");
        for fallback in fallbacks {
            let _ = writeln!(out, "  - could not use {}: {}", fallback.path.display(), fallback.error);
        }
    }
    if summary.export.outputs.iter().any(|o| o.kind == AttemptKind::CsvDegraded) {
        let _ = writeln!(out, "  - the workbook could not be written; the index was saved as CSV");
    }
    if let Some(err) = &summary.export.mirror_failure {
        let _ = writeln!(out, "  - CSV copy not written: {err}");
    }
    if !result.warnings.is_empty() {
        let _ = writeln!(
            out,
            "{} item(s) used default values (run with --debug for details)",
            result.warnings.len()
        );
    }
    out
}

pub fn print_summary(summary: &RunSummary) {
    print!("{}", render_summary(summary));
}

pub fn print_error(err: &AppError) {
    eprintln!("Error: {err}");
    if let Some(hint) = err.remediation() {
        eprintln!("Hint: {hint}");
    }
}
