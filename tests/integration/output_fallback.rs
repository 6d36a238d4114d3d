// tests/integration/output_fallback.rs
use std::path::Path;

use chrono::{Local, TimeZone};
use clap::Parser;
use file_indexer::args::Args;
use file_indexer::config::RunConfig;
use file_indexer_report::{AttemptKind, OutputFormat, ReportWriter};

#[path = "../common/mod.rs"]
mod common;
use common::{SAMPLE_ORDER, names, sample_case_folder, workbook_rows};

fn config(input: &Path, output: &Path) -> RunConfig {
    let args = Args::try_parse_from([
        "file_indexer".to_string(),
        "-d".to_string(),
        input.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
    ])
    .unwrap();
    RunConfig::try_from(args).unwrap()
}

fn pinned_writer(temp: &Path) -> ReportWriter {
    let at = Local.with_ymd_and_hms(2024, 2, 29, 16, 45, 9).single().unwrap();
    ReportWriter::new().with_temp_dir(temp).with_timestamp(at)
}

#[test]
fn blocked_primary_yields_timestamped_workbook_with_same_rows() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let temp = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());
    // A folder with the target's name stands in for a file held open elsewhere.
    std::fs::create_dir(out.path().join("indice.xlsx")).unwrap();

    let summary =
        file_indexer::run_with_writer(&config(input.path(), &out.path().join("indice.xlsx")), &pinned_writer(temp.path()))
            .unwrap();
    let written = &summary.export.outputs[0];
    assert_eq!(written.kind, AttemptKind::Timestamped);
    assert_eq!(written.path, out.path().join("indice_20240229_164509.xlsx"));
    assert_eq!(written.fallbacks.len(), 1);

    let rows = workbook_rows(&written.path);
    assert_eq!(names(&rows), SAMPLE_ORDER);

    let reference = file_indexer::run(&config(input.path(), &out.path().join("referencia"))).unwrap();
    assert_eq!(rows, workbook_rows(&reference.export.outputs[0].path));
}

#[test]
fn unwritable_folder_falls_back_to_temp_dir() {
    let input = tempfile::tempdir().unwrap();
    let temp = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());
    let output = input.path().join("falta").join("indice.xlsx");

    let summary = file_indexer::run_with_writer(&config(input.path(), &output), &pinned_writer(temp.path())).unwrap();
    let written = &summary.export.outputs[0];
    assert_eq!(written.kind, AttemptKind::TempDirectory);
    assert_eq!(written.format, OutputFormat::Xlsx);
    assert!(written.path.starts_with(temp.path()));
    assert_eq!(workbook_rows(&written.path).len(), SAMPLE_ORDER.len());
}

#[test]
fn nowhere_to_write_exits_with_three() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());
    let missing = out.path().join("falta");

    let err = file_indexer::run_with_writer(
        &config(input.path(), &missing.join("indice.xlsx")),
        &pinned_writer(&missing),
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.remediation().is_some());
}
