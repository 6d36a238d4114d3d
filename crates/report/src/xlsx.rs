//! Styled workbook in the legal-index layout.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet, XlsxError};

use crate::error::{ReportError, Result};
use crate::render::{OutputFormat, Renderer};
use crate::row::{Report, ReportRow};
use crate::template::{COLUMN_COUNT, COLUMN_TITLE_ROW, COLUMN_TITLES, FIRST_DATA_ROW, FIRST_FIELD_ROW, TITLE_ROW};

pub const SHEET_NAME: &str = "Indice";

const LAST_COL: u16 = (COLUMN_COUNT - 1) as u16;
const COLUMN_WIDTHS: [f64; COLUMN_COUNT] = [42.0, 22.0, 22.0, 10.0, 10.0, 10.0, 10.0, 10.0, 14.0, 14.0, 24.0];

struct Styles {
    title: Format,
    label: Format,
    value: Format,
    column_title: Format,
    text: Format,
    number: Format,
}

impl Styles {
    fn new() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(14)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            label: bordered.clone().set_bold().set_background_color(Color::RGB(0xD9E1F2)),
            value: bordered.clone(),
            column_title: bordered
                .clone()
                .set_bold()
                .set_text_wrap()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x1F4E78))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            text: bordered.clone(),
            number: bordered.set_align(FormatAlign::Center),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxRenderer;

impl Renderer for XlsxRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }

    fn render(&self, report: &Report, path: &Path) -> Result<()> {
        let wrap = |source| ReportError::Workbook {
            path: path.to_path_buf(),
            source,
        };
        let mut workbook = build_workbook(report).map_err(wrap)?;
        workbook.save(path).map_err(wrap)
    }
}

fn build_workbook(report: &Report) -> std::result::Result<Workbook, XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    write_header(sheet, report, &styles)?;
    for (offset, row) in report.rows.iter().enumerate() {
        write_row(sheet, FIRST_DATA_ROW + offset as u32, row, &styles)?;
    }
    sheet.set_freeze_panes(FIRST_DATA_ROW, 0)?;
    Ok(workbook)
}

fn write_header(sheet: &mut Worksheet, report: &Report, styles: &Styles) -> std::result::Result<(), XlsxError> {
    sheet.set_row_height(TITLE_ROW, 24.0)?;
    sheet.merge_range(TITLE_ROW, 0, TITLE_ROW, LAST_COL, &report.header.title, &styles.title)?;

    for (offset, (label, value)) in report.header.fields().into_iter().enumerate() {
        let row = FIRST_FIELD_ROW + offset as u32;
        sheet.merge_range(row, 0, row, 2, label, &styles.label)?;
        sheet.merge_range(row, 3, row, LAST_COL, value, &styles.value)?;
    }

    sheet.set_row_height(COLUMN_TITLE_ROW, 30.0)?;
    for (col, title) in COLUMN_TITLES.iter().enumerate() {
        sheet.write_string_with_format(COLUMN_TITLE_ROW, col as u16, *title, &styles.column_title)?;
    }
    Ok(())
}

fn write_row(sheet: &mut Worksheet, r: u32, row: &ReportRow, styles: &Styles) -> std::result::Result<(), XlsxError> {
    sheet.write_string_with_format(r, 0, &row.name, &styles.text)?;
    sheet.write_string_with_format(r, 1, &row.created, &styles.text)?;
    sheet.write_string_with_format(r, 2, &row.incorporated, &styles.text)?;
    sheet.write_number_with_format(r, 3, row.sequence as f64, &styles.number)?;
    sheet.write_number_with_format(r, 4, row.page_count as f64, &styles.number)?;
    sheet.write_number_with_format(r, 5, row.start_page as f64, &styles.number)?;
    if row.end_page_is_formula {
        // Spreadsheet rows are 1-based.
        let excel_row = r + 1;
        let formula = Formula::new(format!("=F{excel_row}+E{excel_row}-1")).set_result(row.end_page.to_string());
        sheet.write_formula_with_format(r, 6, formula, &styles.number)?;
    } else {
        sheet.write_number_with_format(r, 6, row.end_page as f64, &styles.number)?;
    }
    sheet.write_string_with_format(r, 7, &row.format, &styles.text)?;
    sheet.write_string_with_format(r, 8, &row.size, &styles.text)?;
    sheet.write_string_with_format(r, 9, &row.origin, &styles.text)?;
    sheet.write_string_with_format(r, 10, &row.observations, &styles.text)?;
    Ok(())
}
