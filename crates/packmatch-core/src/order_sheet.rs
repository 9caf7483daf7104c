use std::io::Cursor;

use calamine::{Data, Range, Reader};
use tracing::{debug, info};

use crate::error::PackmatchError;
use crate::layout::schema::SheetSettings;
use crate::model::OrderRow;
use crate::parsing::normalize::{normalize_code, normalize_header};

/// Column positions of the three roles the join needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub sku: usize,
    pub lookup: usize,
    pub description: usize,
}

/// Read the order rows from a workbook (xlsx, xls, xlsb or ods).
///
/// The first row of the configured sheet holds the headers; the three
/// columns are located by header text.
pub fn read_order_sheet(
    bytes: &[u8],
    settings: &SheetSettings,
) -> Result<Vec<OrderRow>, PackmatchError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| PackmatchError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range(&settings.sheet_name)
        .map_err(|e| PackmatchError::SheetNotFound {
            sheet: settings.sheet_name.clone(),
            reason: e.to_string(),
        })?;

    rows_from_range(&range, settings)
}

/// Turn a sheet range into order rows. Fully blank rows are dropped.
pub fn rows_from_range(
    range: &Range<Data>,
    settings: &SheetSettings,
) -> Result<Vec<OrderRow>, PackmatchError> {
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(cell_text).collect())
        .unwrap_or_default();
    let columns = resolve_columns(&headers, settings)?;
    debug!(?columns, "resolved order sheet columns");

    let mut out = Vec::new();
    for (offset, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let get = |idx: usize| row.get(idx).map(cell_text).unwrap_or_default();
        let raw_lookup = get(columns.lookup);
        out.push(OrderRow {
            // +1 for the header row, +1 to make it 1-based
            row_number: first_row + offset + 2,
            sku_code: get(columns.sku),
            lookup_code: normalize_code(&raw_lookup),
            description: get(columns.description),
        });
    }

    info!(
        sheet = %settings.sheet_name,
        rows = out.len(),
        "read order sheet"
    );
    Ok(out)
}

/// Locate the SKU, lookup and description columns by header text.
///
/// Each role takes the first header containing its hint. The SKU column
/// additionally skips headers containing the exclude text, since the lookup
/// header usually also contains "product code".
pub fn resolve_columns(
    headers: &[String],
    settings: &SheetSettings,
) -> Result<ColumnMap, PackmatchError> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let find = |hint: &str, exclude: Option<&str>| {
        let hint = normalize_header(hint);
        let exclude = exclude
            .map(normalize_header)
            .filter(|e| !e.is_empty());
        normalized.iter().position(|h| {
            h.contains(&hint) && exclude.as_ref().map_or(true, |e| !h.contains(e.as_str()))
        })
    };

    let sku = find(
        settings.sku_column_hint.as_str(),
        Some(settings.sku_column_exclude.as_str()),
    );
    let lookup = find(settings.lookup_column_hint.as_str(), None);
    let description = find(settings.description_column_hint.as_str(), None);

    match (sku, lookup, description) {
        (Some(sku), Some(lookup), Some(description)) => Ok(ColumnMap {
            sku,
            lookup,
            description,
        }),
        _ => {
            let mut missing = Vec::new();
            if sku.is_none() {
                missing.push(format!("SKU ('{}')", settings.sku_column_hint));
            }
            if lookup.is_none() {
                missing.push(format!("lookup code ('{}')", settings.lookup_column_hint));
            }
            if description.is_none() {
                missing.push(format!(
                    "description ('{}')",
                    settings.description_column_hint
                ));
            }
            Err(PackmatchError::MissingColumns(missing))
        }
    }
}

/// Text of a cell as it should appear in the export.
///
/// Whole-number floats lose their fractional part, so a numeric code cell
/// `12345.0` reads as "12345".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        _ => format!("{cell}").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[Data]]) -> Range<Data> {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_resolve_columns_skips_lookup_for_sku() {
        let cols = resolve_columns(
            &headers(&["AAH Product Code", "Description", "Product Code"]),
            &SheetSettings::default(),
        )
        .unwrap();
        assert_eq!(
            cols,
            ColumnMap {
                sku: 2,
                lookup: 0,
                description: 1
            }
        );
    }

    #[test]
    fn test_resolve_columns_case_and_spacing_insensitive() {
        let cols = resolve_columns(
            &headers(&["PRODUCT  CODE", "aah product  code", "Item desc"]),
            &SheetSettings::default(),
        )
        .unwrap();
        assert_eq!(cols.sku, 0);
        assert_eq!(cols.lookup, 1);
        assert_eq!(cols.description, 2);
    }

    #[test]
    fn test_missing_columns_listed() {
        let err = resolve_columns(&headers(&["Product Code"]), &SheetSettings::default())
            .unwrap_err();
        match err {
            PackmatchError::MissingColumns(missing) => {
                assert_eq!(missing.len(), 2);
                assert!(missing[0].starts_with("lookup code"));
                assert!(missing[1].starts_with("description"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rows_from_range_normalizes_lookup() {
        let range = sheet(&[
            &[s("Product Code"), s("AAH Product Code"), s("Description")],
            &[s("SKU-1"), s(" ab12cd "), s("Paracetamol 500mg")],
            &[Data::Empty, Data::Empty, Data::Empty],
            &[Data::Float(1001.0), Data::Int(4321), s("Ibuprofen")],
        ]);
        let rows = rows_from_range(&range, &SheetSettings::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].sku_code, "SKU-1");
        assert_eq!(rows[0].lookup_code, "AB12CD");
        assert_eq!(rows[1].row_number, 4);
        assert_eq!(rows[1].sku_code, "1001");
        assert_eq!(rows[1].lookup_code, "4321");
    }

    #[test]
    fn test_short_row_reads_missing_cells_as_empty() {
        let range = sheet(&[
            &[s("Product Code"), s("AAH Product Code"), s("Description")],
            &[s("SKU-9")],
        ]);
        let rows = rows_from_range(&range, &SheetSettings::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lookup_code, "");
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn test_empty_sheet_reports_missing_columns() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(
            rows_from_range(&range, &SheetSettings::default()),
            Err(PackmatchError::MissingColumns(_))
        ));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Float(12345.0)), "12345");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&s("  x ")), "x");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_unreadable_workbook_is_an_error() {
        assert!(matches!(
            read_order_sheet(b"not a workbook", &SheetSettings::default()),
            Err(PackmatchError::Workbook(_))
        ));
    }
}
