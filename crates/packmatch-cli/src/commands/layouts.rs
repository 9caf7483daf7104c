use packmatch_core::error::PackmatchError;
use packmatch_core::layout::builtin;
use std::path::Path;

pub fn list() -> Result<(), PackmatchError> {
    println!("Available predefined layouts:\n");
    for name in builtin::PRESETS {
        let layout = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<12} {} (v{}){}",
            name, layout.name, layout.version, default_marker
        );
        if let Some(ref desc) = layout.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), PackmatchError> {
    let layout = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

pub fn schema() -> Result<(), PackmatchError> {
    print!(
        r#"JSON Layout Schema
==================

A layout file describes how a price list PDF is turned into product
records and which columns of the order workbook are joined against it.

Top-level fields:
  name             (string, required)  Human-readable name of the layout
  description      (string, optional)  What this layout is for
  version          (string, required)  Version identifier (e.g., "1.0")
  preserve_layout  (bool, optional)    Run pdftotext with -layout so each
                                       printed row stays on one line.
                                       Default: false
  extractor        (object, optional)  Line-stream extractor settings
  sheet            (object, optional)  Order workbook settings

"extractor" fields:
  lookahead_window (integer, default 6)
                   Lines inspected after a line holding only a product code.
                   The code line and the whole window are consumed.
  pack_index       (integer, default 0)
                   Which purely numeric line of the window is the pack size
                   (0 = first).
  price_index      (integer, default 1)
                   Which purely numeric line of the window is the price.
                   Must differ from pack_index; both must be smaller than
                   lookahead_window.

"sheet" fields (header hints match case-insensitively as substrings,
first matching column wins):
  sheet_name              (string, default "AAH DATA")
  sku_column_hint         (string, default "product cod")
                          Column exported as "SKU Code".
  sku_column_exclude      (string, default "aah")
                          Headers containing this are never the SKU column.
  lookup_column_hint      (string, default "aah product co")
                          Column holding the price list product code.
  description_column_hint (string, default "desc")

Example:
{{
  "name": "Wholesaler B",
  "version": "1.0",
  "extractor": {{ "lookahead_window": 8, "pack_index": 1, "price_index": 2 }},
  "sheet": {{
    "sheet_name": "Orders",
    "sku_column_hint": "our code",
    "sku_column_exclude": "supplier",
    "lookup_column_hint": "supplier code",
    "description_column_hint": "item"
  }}
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), PackmatchError> {
    let layout = packmatch_core::layout::load_layout(file)?;
    println!(
        "OK: '{}' (v{}) window {}, pack #{}, price #{}, sheet '{}'",
        layout.name,
        layout.version,
        layout.extractor.lookahead_window,
        layout.extractor.pack_index,
        layout.extractor.price_index,
        layout.sheet.sheet_name
    );
    Ok(())
}
