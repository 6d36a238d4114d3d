// src/args.rs
use crate::parsers::{self, DelimiterArg};
use clap::{Args as ClapArgs, Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "file_indexer",
    version,
    about = "Genera el índice electrónico de un expediente judicial a partir de una carpeta"
)]
pub struct Args {
    /// Carpeta del expediente a indexar
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "Entrada")]
    pub directory: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub header: HeaderOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// Registro detallado (nivel debug)
    #[arg(long, help_heading = "Diagnóstico")]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Solo Excel (.xlsx)
    #[default]
    Excel,
    /// Solo CSV (.csv)
    Csv,
    /// Excel y CSV
    Both,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Archivo de salida (se agrega la extensión si falta)
    #[arg(short, long, default_value = "indice_expediente.xlsx", value_hint = ValueHint::FilePath, help_heading = "Salida")]
    pub output: PathBuf,

    /// Formato de exportación
    #[arg(long, value_enum, help_heading = "Salida", conflicts_with_all = ["csv", "csv_only"])]
    pub format: Option<FormatArg>,

    /// Exportar también a CSV (equivale a --format both)
    #[arg(long, help_heading = "Salida", conflicts_with = "csv_only")]
    pub csv: bool,

    /// Exportar solo CSV (equivale a --format csv)
    #[arg(long, help_heading = "Salida")]
    pub csv_only: bool,

    /// Separador de campos del CSV (un carácter o 'tab')
    #[arg(long, default_value = ",", help_heading = "Salida")]
    pub csv_delimiter: DelimiterArg,
}

impl OutputOptions {
    pub fn export_format(&self) -> FormatArg {
        match (self.format, self.csv, self.csv_only) {
            (Some(format), _, _) => format,
            (None, _, true) => FormatArg::Csv,
            (None, true, false) => FormatArg::Both,
            (None, false, false) => FormatArg::Excel,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct HeaderOptions {
    /// Nombre de la parte demandante (Parte A)
    #[arg(long, help_heading = "Encabezado")]
    pub litigant: Option<String>,

    /// Plantilla del encabezado en YAML o JSON
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Encabezado")]
    pub header_config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Omitir archivos y carpetas ocultos
    #[arg(long, help_heading = "Escaneo")]
    pub skip_hidden: bool,

    /// Tiempo máximo por estrategia de conteo de páginas, en segundos
    #[arg(long, value_parser = parsers::parse_timeout, help_heading = "Escaneo")]
    pub pdf_timeout: Option<Duration>,

    /// No usar el lector estructural de PDF
    #[arg(long, help_heading = "Escaneo")]
    pub no_structural: bool,

    /// No usar el lector alternativo de PDF
    #[arg(long, help_heading = "Escaneo")]
    pub no_alternate: bool,
}
