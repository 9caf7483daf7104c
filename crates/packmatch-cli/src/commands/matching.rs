use packmatch_core::error::PackmatchError;
use packmatch_core::export;
use std::path::PathBuf;

use crate::output;
use crate::LayoutArgs;

pub struct MatchArgs {
    pub price_list: PathBuf,
    pub order_sheet: PathBuf,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
    pub sheet: Option<String>,
    pub show_unmatched: bool,
    pub layout: LayoutArgs,
}

pub fn run(args: MatchArgs) -> Result<(), PackmatchError> {
    let mut layout = super::resolve_layout(&args.layout)?;
    if let Some(sheet) = args.sheet {
        layout.sheet.sheet_name = sheet;
    }

    let extraction = super::extract_price_list(&args.price_list, &layout)?;
    let sheet_bytes = std::fs::read(&args.order_sheet)?;
    let matches = packmatch_core::match_orders(&sheet_bytes, &extraction.products, &layout.sheet)?;

    match args.output_file {
        Some(path) => {
            let ext = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_default();
            match ext.as_str() {
                "xlsx" => export::write_xlsx(&matches.rows, &path)?,
                "csv" => {
                    let file = std::fs::File::create(&path)?;
                    export::write_csv(&matches.rows, file)?;
                }
                _ => std::fs::write(&path, serde_json::to_string_pretty(&matches)?)?,
            }
            eprintln!(
                "Matched {} row(s) against {} product(s), written to {}",
                matches.rows.len(),
                extraction.products.len(),
                path.display()
            );
            if !matches.unmatched.is_empty() {
                eprintln!("  {} order row(s) not in price list", matches.unmatched.len());
            }
        }
        None => match args.output_format.as_str() {
            "json" => output::json::print(&matches)?,
            "csv" => export::write_csv(&matches.rows, std::io::stdout().lock())?,
            _ => output::table::print_matches(&matches, args.show_unmatched),
        },
    }

    Ok(())
}
