use std::path::PathBuf;

use crate::output;
use crate::LayoutArgs;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    layout_args: &LayoutArgs,
) -> Result<(), packmatch_core::error::PackmatchError> {
    let layout = super::resolve_layout(layout_args)?;
    let report = super::extract_price_list(&input_file, &layout)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} product(s), written to {}",
                report.products.len(),
                path.display()
            );
            if !report.skipped_windows.is_empty() {
                eprintln!(
                    "  {} code line(s) without pack size and price",
                    report.skipped_windows.len()
                );
            }
        }
        None => match output_format {
            "json" => output::json::print(&report)?,
            _ => println!("{}", output::table::format_products(&report)),
        },
    }

    Ok(())
}
