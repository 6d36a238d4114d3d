#![allow(dead_code)]

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use file_indexer_report::{HeaderTemplate, Report, ReportRow};

pub fn row(sequence: usize, name: &str, pages: usize, start: usize, is_directory: bool) -> ReportRow {
    ReportRow {
        name: name.to_string(),
        created: "5/03/2024 2:07 p. m.".to_string(),
        incorporated: "5/03/2024 2:07 p. m.".to_string(),
        sequence,
        page_count: pages,
        start_page: start,
        end_page: start + pages.max(1) - 1,
        end_page_is_formula: !is_directory,
        format: if is_directory { "CARPETA".into() } else { "PDF".into() },
        size: if is_directory { "2 archivos".into() } else { "1,5 KB".into() },
        origin: "ELECTRONICO".to_string(),
        observations: String::new(),
    }
}

pub fn sample_report() -> Report {
    Report {
        header: HeaderTemplate::default().with_litigant("Ana Gómez"),
        rows: vec![
            row(1, "01Demanda.pdf", 1, 1, false),
            row(2, "02Poder, \"firmado\".pdf", 5, 2, false),
            row(3, "03Anexos", 1, 7, true),
        ],
    }
}

/// Sheet cells as display text, row by row, starting at A1.
pub fn read_sheet(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook opens");
    let range = workbook.worksheet_range("Indice").expect("sheet exists");
    let (height, width) = range.get_size();
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    assert_eq!((first_row, first_col), (0, 0), "sheet starts at A1");
    (0..height as u32)
        .map(|r| {
            (0..width as u32)
                .map(|c| match range.get_value((r, c)) {
                    Some(Data::String(s)) => s.clone(),
                    Some(Data::Float(f)) => format!("{f}"),
                    Some(Data::Int(i)) => i.to_string(),
                    Some(other) if *other != Data::Empty => other.to_string(),
                    _ => String::new(),
                })
                .collect()
        })
        .collect()
}

/// Data rows (row 12 onwards) of a workbook.
pub fn data_rows(path: &Path) -> Vec<Vec<String>> {
    read_sheet(path).into_iter().skip(11).collect()
}

/// Data rows of a CSV produced with `sep`, unquoted.
pub fn csv_rows(path: &Path, sep: char) -> Vec<Vec<String>> {
    let text = std::fs::read_to_string(path).expect("csv readable");
    let text = text.trim_start_matches('\u{feff}');
    text.split("\r\n")
        .filter(|line| !line.is_empty())
        .skip(1)
        .map(|line| split_line(line, sep))
        .collect()
}

fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            c if c == sep && !quoted => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}
