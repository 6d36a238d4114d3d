use file_indexer_engine::entry::ResolvedMetadata;

use crate::template::{COLUMN_COUNT, HeaderTemplate};

/// One data row of the index, already rendered to display text except for the
/// numeric columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub created: String,
    pub incorporated: String,
    pub sequence: usize,
    pub page_count: usize,
    pub start_page: usize,
    pub end_page: usize,
    /// End page is derived from start and count in the workbook.
    pub end_page_is_formula: bool,
    pub format: String,
    pub size: String,
    pub origin: String,
    pub observations: String,
}

impl From<&ResolvedMetadata> for ReportRow {
    fn from(meta: &ResolvedMetadata) -> Self {
        let created = meta.creation.to_label();
        Self {
            name: meta.display_name.clone(),
            incorporated: created.clone(),
            created,
            sequence: meta.sequence,
            page_count: meta.page_count,
            start_page: meta.start_page,
            end_page: meta.end_page,
            end_page_is_formula: !meta.is_directory,
            format: meta.format_label.clone(),
            size: meta.size_label.clone(),
            origin: meta.origin_label.to_string(),
            observations: String::new(),
        }
    }
}

impl ReportRow {
    /// Columns A..K as text, in column order.
    pub fn fields(&self) -> [String; COLUMN_COUNT] {
        [
            self.name.clone(),
            self.created.clone(),
            self.incorporated.clone(),
            self.sequence.to_string(),
            self.page_count.to_string(),
            self.start_page.to_string(),
            self.end_page.to_string(),
            self.format.clone(),
            self.size.clone(),
            self.origin.clone(),
            self.observations.clone(),
        ]
    }
}

/// Everything a renderer needs: the header block and the data rows.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub header: HeaderTemplate,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(header: HeaderTemplate, entries: &[ResolvedMetadata]) -> Self {
        Self {
            header,
            rows: entries.iter().map(ReportRow::from).collect(),
        }
    }
}
