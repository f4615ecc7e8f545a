//! XLSX encoder: one worksheet, header row first.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use super::{ExportFormat, serialization_error};
use crate::batch::Batch;
use crate::error::ExportError;
use crate::record::FieldValue;

const SHEET_NAME: &str = "Sheet1";

pub(super) fn encode(batch: &Batch) -> Result<Vec<u8>, ExportError> {
    write_workbook(batch).map_err(|err| serialization_error(ExportFormat::Xlsx, &err))
}

fn write_workbook(batch: &Batch) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in batch.field_names().into_iter().enumerate() {
        worksheet.write_string(0, column(col)?, name)?;
    }
    for (index, record) in batch.records().iter().enumerate() {
        let row = u32::try_from(index)
            .ok()
            .and_then(|value| value.checked_add(1))
            .ok_or(XlsxError::RowColumnLimitError)?;
        for (col, value) in record.values().enumerate() {
            write_cell(worksheet, row, column(col)?, value)?;
        }
    }
    workbook.save_to_buffer()
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &FieldValue,
) -> Result<(), XlsxError> {
    match value {
        FieldValue::Flag(flag) => worksheet.write_boolean(row, col, *flag)?,
        FieldValue::Integer(number) => match i32::try_from(*number) {
            Ok(small) => worksheet.write_number(row, col, f64::from(small))?,
            Err(_) => worksheet.write_string(row, col, number.to_string())?,
        },
        FieldValue::Text(text) => worksheet.write_string(row, col, text)?,
    };
    Ok(())
}
