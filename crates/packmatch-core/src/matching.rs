use tracing::{debug, info};

use crate::model::{MatchReport, MatchedRow, OrderRow, ProductTable, UnmatchedRow};

/// Join order rows against extracted products by lookup code.
///
/// Matched rows keep sheet order. A row whose lookup code appears twice in
/// the sheet is exported twice.
pub fn match_rows(rows: &[OrderRow], products: &ProductTable) -> MatchReport {
    let mut report = MatchReport::default();

    for row in rows {
        match products.get(&row.lookup_code) {
            Some(record) => report.rows.push(MatchedRow {
                sku_code: row.sku_code.clone(),
                quantity: record.pack_size,
                price: record.price,
            }),
            None => {
                debug!(row = row.row_number, code = %row.lookup_code, "no price list entry");
                report.unmatched.push(UnmatchedRow {
                    row_number: row.row_number,
                    lookup_code: row.lookup_code.clone(),
                });
            }
        }
    }

    info!(
        matched = report.rows.len(),
        unmatched = report.unmatched.len(),
        "matched order rows"
    );
    report
}
