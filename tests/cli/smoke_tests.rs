use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_indexer"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--csv-only").and(predicate::str::contains("--header-config")));
}

#[test]
fn invalid_directory_exits_with_two() {
    let out = tempfile::tempdir().unwrap();
    bin()
        .args(["-d", "/definitivamente/no/existe", "-o"])
        .arg(out.path().join("indice"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn prints_summary_on_success() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    common::sample_case_folder(input.path());
    let output = out.path().join("indice");

    bin()
        .arg("-d")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Indexed items: 6")
                .and(predicate::str::contains("Total pages:   9"))
                .and(predicate::str::contains("indice.xlsx")),
        );
    assert!(out.path().join("indice.xlsx").is_file());
}

#[test]
fn csv_only_writes_a_single_csv() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    common::sample_case_folder(input.path());

    bin()
        .arg("-d")
        .arg(input.path())
        .arg("-o")
        .arg(out.path().join("indice.xlsx"))
        .args(["--csv-only", "--csv-delimiter", ";"])
        .assert()
        .success();

    assert!(!out.path().join("indice.xlsx").exists());
    let text = std::fs::read_to_string(out.path().join("indice.csv")).unwrap();
    assert!(text.contains("01Demanda.pdf;"));
    assert_eq!(text.trim_end().split("\r\n").count(), 7);
}

#[test]
fn bad_header_config_exits_with_one() {
    let input = tempfile::tempdir().unwrap();
    let config = input.path().join("encabezado.yaml");
    std::fs::write(&config, "[no es un mapa").unwrap();

    bin()
        .arg("-d")
        .arg(input.path())
        .arg("--header-config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("header template"));
}
