pub mod builtin;
pub mod schema;

use crate::error::PackmatchError;
use schema::Layout;
use std::path::Path;

/// Load a layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<Layout, PackmatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| PackmatchError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_layout(&content, path)
}

/// Parse a layout from a JSON string.
pub fn parse_layout(json: &str, source: &Path) -> Result<Layout, PackmatchError> {
    let layout: Layout = serde_json::from_str(json).map_err(|e| PackmatchError::LayoutLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<Layout, PackmatchError> {
    let layout: Layout = serde_json::from_str(json).map_err(PackmatchError::Json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout is usable.
pub fn validate_layout(layout: &Layout) -> Result<(), PackmatchError> {
    if layout.name.trim().is_empty() {
        return Err(PackmatchError::LayoutInvalid(
            "name must not be empty".into(),
        ));
    }

    let ex = &layout.extractor;
    if ex.lookahead_window == 0 {
        return Err(PackmatchError::LayoutInvalid(
            "lookahead_window must be at least 1".into(),
        ));
    }

    if ex.pack_index == ex.price_index {
        return Err(PackmatchError::LayoutInvalid(format!(
            "pack_index and price_index must differ (both are {})",
            ex.pack_index
        )));
    }

    for (field, index) in [("pack_index", ex.pack_index), ("price_index", ex.price_index)] {
        if index >= ex.lookahead_window {
            return Err(PackmatchError::LayoutInvalid(format!(
                "{} {} does not fit in a lookahead window of {} line(s)",
                field, index, ex.lookahead_window
            )));
        }
    }

    let sheet = &layout.sheet;
    if sheet.sheet_name.trim().is_empty() {
        return Err(PackmatchError::LayoutInvalid(
            "sheet_name must not be empty".into(),
        ));
    }

    for (field, hint) in [
        ("sku_column_hint", &sheet.sku_column_hint),
        ("lookup_column_hint", &sheet.lookup_column_hint),
        ("description_column_hint", &sheet.description_column_hint),
    ] {
        if hint.trim().is_empty() {
            return Err(PackmatchError::LayoutInvalid(format!(
                "{field} must not be empty"
            )));
        }
    }

    Ok(())
}
