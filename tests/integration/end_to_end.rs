// tests/integration/end_to_end.rs
use std::path::Path;

use clap::Parser;
use file_indexer::args::Args;
use file_indexer::config::RunConfig;

#[path = "../common/mod.rs"]
mod common;
use common::{SAMPLE_ORDER, csv_rows, names, sample_case_folder, workbook_rows};

fn config(input: &Path, output: &Path, extra: &[&str]) -> RunConfig {
    let mut argv = vec![
        "file_indexer".to_string(),
        "-d".to_string(),
        input.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| (*s).to_string()));
    RunConfig::try_from(Args::try_parse_from(argv).unwrap()).unwrap()
}

#[test]
fn one_row_per_entry_in_numeric_order() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());

    let summary = file_indexer::run(&config(input.path(), &out.path().join("indice"), &[])).unwrap();
    assert_eq!(summary.export.outputs.len(), 1);
    let rows = workbook_rows(&summary.export.outputs[0].path);

    assert_eq!(rows.len(), summary.result.entries.len());
    assert_eq!(names(&rows), SAMPLE_ORDER);
}

#[test]
fn page_ranges_fold_across_files_and_folders() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());

    let summary = file_indexer::run(&config(input.path(), &out.path().join("indice.xlsx"), &[])).unwrap();
    let rows = workbook_rows(&summary.export.outputs[0].path);
    let ranges: Vec<_> = rows
        .iter()
        .map(|r| (r[3].as_str(), r[4].as_str(), r[5].as_str(), r[6].as_str()))
        .collect();
    assert_eq!(
        ranges,
        [
            ("1", "3", "1", "3"),
            ("2", "1", "4", "4"),
            ("3", "1", "5", "5"),
            ("4", "1", "6", "6"),
            ("5", "2", "7", "8"),
            ("6", "1", "9", "9"),
        ]
    );
    assert_eq!(summary.result.total_pages(), 9);
}

#[test]
fn format_size_and_origin_columns() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());

    let summary = file_indexer::run(&config(input.path(), &out.path().join("indice"), &[])).unwrap();
    let rows = workbook_rows(&summary.export.outputs[0].path);

    let folder = &rows[2];
    assert_eq!(folder[7], "CARPETA");
    assert_eq!(folder[8], "2 archivos");
    let note = &rows[5];
    assert_eq!(note[7], "TXT");
    assert_eq!(note[8], "13 bytes");
    assert!(rows.iter().all(|r| r[9] == "ELECTRONICO" && r[10].is_empty()));
    assert!(rows.iter().all(|r| r[1] == r[2]));
}

#[test]
fn both_mode_mirrors_rows_in_csv() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());

    let summary = file_indexer::run(&config(input.path(), &out.path().join("indice"), &["--csv"])).unwrap();
    let paths: Vec<_> = summary.export.outputs.iter().map(|o| o.path.clone()).collect();
    assert_eq!(paths, [out.path().join("indice.xlsx"), out.path().join("indice.csv")]);
    let mirrored = csv_rows(&paths[1]);
    assert!(mirrored.iter().all(|r| r.len() == 11 && r[10].is_empty()));
    assert_eq!(mirrored, workbook_rows(&paths[0]));
}

#[test]
fn output_inside_the_indexed_folder_is_not_indexed() {
    let input = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());
    let output = input.path().join("indice.xlsx");

    let first = file_indexer::run(&config(input.path(), &output, &[])).unwrap();
    let second = file_indexer::run(&config(input.path(), &output, &[])).unwrap();

    assert_eq!(first.result.entries.len(), SAMPLE_ORDER.len());
    assert_eq!(second.result.entries.len(), SAMPLE_ORDER.len());
}

#[test]
fn repeated_runs_produce_identical_rows() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    sample_case_folder(input.path());

    let a = file_indexer::run(&config(input.path(), &out.path().join("a"), &[])).unwrap();
    let b = file_indexer::run(&config(input.path(), &out.path().join("b"), &[])).unwrap();
    assert_eq!(
        workbook_rows(&a.export.outputs[0].path),
        workbook_rows(&b.export.outputs[0].path)
    );
}

#[test]
fn empty_folder_yields_header_only() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let summary = file_indexer::run(&config(input.path(), &out.path().join("vacio"), &[])).unwrap();
    assert!(summary.result.entries.is_empty());
    assert!(workbook_rows(&summary.export.outputs[0].path).is_empty());
}

#[test]
fn invalid_directory_is_fatal_before_writing() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("no-existe");

    let err = file_indexer::run(&config(&missing, &out.path().join("indice"), &[])).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(!out.path().join("indice.xlsx").exists());
}
