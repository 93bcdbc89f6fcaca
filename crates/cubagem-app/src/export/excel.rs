//! Excel export of the viable vehicles table

use cubagem_domain::model::{AggregateResult, ReportRow};
use cubagem_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::info;

pub const SHEET_NAME: &str = "Viable Vehicles";
pub const DEFAULT_FILE_NAME: &str = "viable_vehicles.xlsx";

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Write the viable rows of `result` to an .xlsx file
pub fn export_to_excel(result: &AggregateResult, output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(result)?;
    workbook.save(output_path).map_err(excel_err)?;
    info!(path = %output_path.display(), rows = result.viable_reports.len(), "spreadsheet written");
    Ok(())
}

/// Same workbook as [`export_to_excel`], returned as bytes
pub fn export_to_buffer(result: &AggregateResult) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(result)?;
    workbook.save_to_buffer().map_err(excel_err)
}

fn build_workbook(result: &AggregateResult) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_rows_sheet(sheet, &result.rows())?;
    Ok(workbook)
}

fn write_rows_sheet(sheet: &mut Worksheet, rows: &[ReportRow]) -> Result<()> {
    sheet.set_name(SHEET_NAME).map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let decimal_format = Format::new().set_num_format("0.00");

    for (col, header) in ReportRow::HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        sheet.write_string(r, 0, &row.vehicle).map_err(excel_err)?;
        sheet
            .write_number_with_format(r, 1, row.cubic_volume, &decimal_format)
            .map_err(excel_err)?;
        sheet
            .write_number(r, 2, row.max_quantity as f64)
            .map_err(excel_err)?;
        sheet
            .write_number_with_format(r, 3, row.total_weight, &decimal_format)
            .map_err(excel_err)?;
    }

    sheet.set_column_width(0, 32).map_err(excel_err)?;
    sheet.set_column_width(1, 18).map_err(excel_err)?;
    sheet.set_column_width(2, 14).map_err(excel_err)?;
    sheet.set_column_width(3, 18).map_err(excel_err)?;

    Ok(())
}
