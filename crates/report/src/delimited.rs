//! Delimited-text mirror of the index: one column-title line, then the data rows.

use std::path::Path;

use crate::error::{ReportError, Result};
use crate::render::{OutputFormat, Renderer};
use crate::row::Report;
use crate::template::COLUMN_TITLES;

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone, Copy)]
pub struct CsvRenderer {
    delimiter: char,
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvRenderer {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Renderer for CsvRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn render(&self, report: &Report, path: &Path) -> Result<()> {
        // BOM so spreadsheet programs pick UTF-8 for the accented titles.
        let text = format!("{UTF8_BOM}{}", to_delimited(report, self.delimiter));
        std::fs::write(path, text).map_err(|source| ReportError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render the column titles and data rows, CRLF-terminated.
pub fn to_delimited(report: &Report, sep: char) -> String {
    let mut out = String::new();
    push_line(&mut out, COLUMN_TITLES.iter().copied(), sep);
    for row in &report.rows {
        let fields = row.fields();
        push_line(&mut out, fields.iter().map(String::as_str), sep);
    }
    out
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, sep: char) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(&escape_field(field, sep));
    }
    out.push_str("\r\n");
}

fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' || s.contains([sep, '"', '\r', '\n']) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
