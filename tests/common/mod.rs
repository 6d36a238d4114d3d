// tests/common/mod.rs
//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use lopdf::{Document, Object, Stream, dictionary};

/// Minimal PDF with `pages` blank A4 pages.
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("pdf fixture saved");
    path
}

/// A small expediente: three numbered PDFs, a folder, an unnumbered note
/// and a PDF name that is not really a PDF.
pub fn sample_case_folder(dir: &Path) {
    write_pdf(dir, "10Sentencia.pdf", 2);
    write_pdf(dir, "01Demanda.pdf", 3);
    write_pdf(dir, "2Poder.pdf", 1);
    std::fs::create_dir(dir.join("03Anexos")).unwrap();
    std::fs::write(dir.join("03Anexos").join("a.txt"), b"a").unwrap();
    std::fs::write(dir.join("03Anexos").join("b.txt"), b"b").unwrap();
    std::fs::write(dir.join("Notas.txt"), b"observaciones").unwrap();
    std::fs::write(dir.join("04Falso.pdf"), b"not a pdf at all").unwrap();
}

/// Names in the order the index must list them for [`sample_case_folder`].
pub const SAMPLE_ORDER: [&str; 6] = [
    "01Demanda.pdf",
    "2Poder.pdf",
    "03Anexos",
    "04Falso.pdf",
    "10Sentencia.pdf",
    "Notas.txt",
];

pub fn cell_text(value: Option<&Data>) -> String {
    match value {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) => format!("{f}"),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Data rows of the index sheet (row 12 onwards) as text.
pub fn workbook_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook opens");
    let range = workbook.worksheet_range("Indice").expect("sheet exists");
    let (height, _) = range.get_size();
    (11..height as u32)
        .map(|r| (0..11).map(|c| cell_text(range.get_value((r, c)))).collect())
        .collect()
}

/// Data rows of a comma-separated mirror, unquoted.
pub fn csv_rows(path: &Path) -> Vec<Vec<String>> {
    let text = std::fs::read_to_string(path).expect("csv readable");
    text.trim_start_matches('\u{feff}')
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .skip(1)
        .map(split_line)
        .collect()
}

/// Quote-aware split of one comma-separated line.
fn split_line(line: &str) -> Vec<String> {
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
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Column A of the data rows.
pub fn names(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[0].as_str()).collect()
}
