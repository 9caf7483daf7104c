use packmatch_core::model::{ExtractionReport, MatchReport};

pub fn format_products(report: &ExtractionReport) -> String {
    let mut out = String::new();

    if report.products.is_empty() {
        out.push_str("No products found.\n");
    } else {
        out.push_str(&format!(
            "  {:<12}{:>12}{:>12}\n",
            "Code", "Pack size", "Price"
        ));
        out.push_str(&format!("  {}\n", "-".repeat(36)));
        for (code, record) in &report.products {
            out.push_str(&format!(
                "  {:<12}{:>12}{:>12}\n",
                code.as_str(),
                record.pack_size.to_string(),
                record.price.to_string()
            ));
        }
    }

    out.push_str(&format!(
        "\n  {} product(s) from {} line(s)",
        report.products.len(),
        report.lines_scanned + report.unscanned_tail
    ));
    if !report.matcher_hits.is_empty() {
        let hits: Vec<String> = report
            .matcher_hits
            .iter()
            .map(|(name, n)| format!("{name}: {n}"))
            .collect();
        out.push_str(&format!(" ({})", hits.join(", ")));
    }
    out.push('\n');

    if !report.skipped_windows.is_empty() {
        out.push_str("\n  Code lines without pack size and price:\n");
        for w in &report.skipped_windows {
            out.push_str(&format!(
                "    line {:<6} {:<12} {}\n",
                w.line_index + 1,
                w.code.as_str(),
                w.reason
            ));
        }
    }

    if !report.overwrites.is_empty() {
        out.push_str("\n  Codes listed more than once (last entry kept):\n");
        for o in &report.overwrites {
            out.push_str(&format!(
                "    line {:<6} {:<12} {} @ {} -> {} @ {}\n",
                o.line_index + 1,
                o.code.as_str(),
                o.previous.pack_size,
                o.previous.price,
                o.current.pack_size,
                o.current.price
            ));
        }
    }

    out
}

pub fn print_matches(report: &MatchReport, show_unmatched: bool) {
    if report.rows.is_empty() {
        println!("No order rows matched the price list.");
    } else {
        let max_sku = report
            .rows
            .iter()
            .map(|r| r.sku_code.len())
            .max()
            .unwrap_or(8)
            .max("SKU Code".len());

        println!(
            "  {:<width$}  {:>10}  {:>10}",
            "SKU Code",
            "Quantity",
            "Price",
            width = max_sku
        );
        println!("  {}", "-".repeat(max_sku + 24));
        for row in &report.rows {
            println!(
                "  {:<width$}  {:>10}  {:>10}",
                row.sku_code,
                row.quantity.to_string(),
                row.price.to_string(),
                width = max_sku
            );
        }
    }

    println!(
        "\n  {} matched, {} not in price list",
        report.rows.len(),
        report.unmatched.len()
    );

    if show_unmatched && !report.unmatched.is_empty() {
        println!("\n  Unmatched order rows:");
        for u in &report.unmatched {
            let code = if u.lookup_code.is_empty() {
                "(empty)"
            } else {
                u.lookup_code.as_str()
            };
            println!("    row {:<6} {}", u.row_number, code);
        }
    }
}
