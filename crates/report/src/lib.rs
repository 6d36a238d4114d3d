// crates/report/src/lib.rs
pub mod delimited;
pub mod error;
pub mod render;
pub mod row;
pub mod template;
pub mod writer;
pub mod xlsx;

pub use delimited::CsvRenderer;
pub use error::{ReportError, Result};
pub use render::{OutputFormat, Renderer};
pub use row::{Report, ReportRow};
pub use template::HeaderTemplate;
pub use writer::{AttemptKind, ExportMode, ExportOutcome, Fallback, ReportWriter, WriteOutcome};
pub use xlsx::XlsxRenderer;
