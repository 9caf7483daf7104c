use std::io::Write;
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::PackmatchError;
use crate::model::MatchedRow;

pub const EXPORT_HEADERS: [&str; 3] = ["SKU Code", "Quantity", "Price"];

/// Worksheet name of the `.xlsx` export.
pub const EXPORT_SHEET: &str = "Sheet1";

/// Write matched rows as CSV with the `SKU Code,Quantity,Price` header.
pub fn write_csv<W: Write>(rows: &[MatchedRow], writer: W) -> Result<(), PackmatchError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADERS)?;
    for row in rows {
        let quantity = row.quantity.to_string();
        let price = row.price.to_string();
        wtr.write_record([row.sku_code.as_str(), quantity.as_str(), price.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV export as a string.
pub fn to_csv_string(rows: &[MatchedRow]) -> Result<String, PackmatchError> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write matched rows to an `.xlsx` workbook at `path`.
///
/// One sheet, a bold header row, then one row per match with quantity and
/// price stored as numbers.
pub fn write_xlsx(rows: &[MatchedRow], path: &Path) -> Result<(), PackmatchError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    Ok(())
}

/// `.xlsx` export as bytes.
pub fn to_xlsx_bytes(rows: &[MatchedRow]) -> Result<Vec<u8>, PackmatchError> {
    let mut workbook = build_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(rows: &[MatchedRow]) -> Result<Workbook, PackmatchError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET)?;

    for (col, title) in (0u16..).zip(EXPORT_HEADERS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }
    for (row, matched) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, &matched.sku_code)?;
        write_amount(sheet, row, 1, matched.quantity)?;
        write_amount(sheet, row, 2, matched.price)?;
    }
    Ok(workbook)
}

fn write_amount(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Decimal,
) -> Result<(), PackmatchError> {
    match value.to_f64() {
        Some(n) => sheet.write_number(row, col, n)?,
        None => sheet.write_string(row, col, value.to_string())?,
    };
    Ok(())
}
