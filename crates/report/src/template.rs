//! Header block of the legal index (rows 1 to 11).
//!
//! The case-file fields are configuration, not logic: the defaults are
//! placeholders to be overridden per expediente from a YAML/JSON file or the
//! command line.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Number of columns in the index (A..K).
pub const COLUMN_COUNT: usize = 11;

/// Column titles written on row 11 and as the first CSV line.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = [
    "Nombre Documento",
    "Fecha Creación Documento",
    "Fecha Incorporación Expediente",
    "Orden Documento",
    "Número Páginas",
    "Página Inicio",
    "Página Fin",
    "Formato",
    "Tamaño",
    "Origen",
    "Observaciones",
];

/// 0-based row of the title banner (row 1).
pub const TITLE_ROW: u32 = 0;
/// 0-based row of the first case-file field (row 3).
pub const FIRST_FIELD_ROW: u32 = 2;
/// 0-based row of the column titles (row 11).
pub const COLUMN_TITLE_ROW: u32 = 10;
/// 0-based row of the first data row (row 12).
pub const FIRST_DATA_ROW: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderTemplate {
    pub title: String,
    pub city: String,
    pub court: String,
    pub documentary_series: String,
    pub case_number: String,
    pub litigant: String,
    pub respondent: String,
    pub third_parties: String,
    pub notebook: String,
}

impl Default for HeaderTemplate {
    // Placeholders; real values come from --header-config / --litigant.
    fn default() -> Self {
        Self {
            title: "ÍNDICE ELECTRÓNICO DEL EXPEDIENTE JUDICIAL".into(),
            city: "CIUDAD".into(),
            court: "JUZGADO".into(),
            documentary_series: "PROCESOS".into(),
            case_number: "00000000000000000000000".into(),
            litigant: "DEMANDANTE".into(),
            respondent: "DEMANDADO".into(),
            third_parties: "NINGUNO".into(),
            notebook: "PRINCIPAL".into(),
        }
    }
}

impl HeaderTemplate {
    /// Load a template from a `.yaml`/`.yml` or `.json` file; missing fields
    /// keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if ext == "json" {
            serde_json::from_str(&text).map_err(|e| parse_error("JSON", path, e))
        } else {
            serde_yaml::from_str(&text).map_err(|e| parse_error("YAML", path, e))
        }
    }

    #[must_use]
    pub fn with_litigant(mut self, litigant: impl Into<String>) -> Self {
        self.litigant = litigant.into();
        self
    }

    /// Label/value pairs for rows 3 to 10, in order.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Ciudad", &self.city),
            ("Despacho Judicial", &self.court),
            ("Serie o Subserie Documental", &self.documentary_series),
            ("No. Radicación del Proceso", &self.case_number),
            ("Partes Procesales (Parte A)", &self.litigant),
            ("Partes Procesales (Parte B)", &self.respondent),
            ("Terceros Intervinientes", &self.third_parties),
            ("Cuaderno", &self.notebook),
        ]
    }
}

fn parse_error(format: &'static str, path: &Path, err: impl std::fmt::Display) -> ReportError {
    ReportError::TemplateParse {
        format,
        path: path.to_path_buf(),
        details: err.to_string(),
    }
}
