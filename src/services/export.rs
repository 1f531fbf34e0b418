//! Spreadsheet export of the equipment listing

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{EquipmentColumn, EquipmentRow},
};

/// File name offered to the browser
pub const EXPORT_FILE_NAME: &str = "equipment.xlsx";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Columns of the exported sheet, in order; same labels as the on-screen table
pub const EXPORT_COLUMNS: [EquipmentColumn; 10] = [
    EquipmentColumn::PropertyNumber,
    EquipmentColumn::EquipmentName,
    EquipmentColumn::Brand,
    EquipmentColumn::Model,
    EquipmentColumn::SerialNumber,
    EquipmentColumn::Description,
    EquipmentColumn::Name,
    EquipmentColumn::SectionDivision,
    EquipmentColumn::LocationDescription,
    EquipmentColumn::AcquiredDate,
];

fn xlsx_error(e: XlsxError) -> AppError {
    AppError::Internal(format!("Failed to build spreadsheet: {}", e))
}

/// Render the rows to an XLSX workbook in memory
pub fn equipment_workbook(rows: &[EquipmentRow]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name("Equipment").map_err(xlsx_error)?;

    let header = Format::new().set_bold();
    for (col, column) in EXPORT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, column.heading(), &header)
            .map_err(xlsx_error)?;
        worksheet.set_column_width(col, 20.0).map_err(xlsx_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, column) in EXPORT_COLUMNS.iter().enumerate() {
            if let Some(value) = row.value(*column) {
                worksheet
                    .write_string(r, col as u16, &value)
                    .map_err(xlsx_error)?;
            }
        }
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer().map_err(xlsx_error)
}
