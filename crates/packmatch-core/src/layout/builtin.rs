use crate::error::PackmatchError;
use crate::layout::schema::Layout;
use crate::layout::validate_layout;

const AAH_JSON: &str = include_str!("../../../../layouts/aah.json");
const AAH_LAYOUT_JSON: &str = include_str!("../../../../layouts/aah-layout.json");

/// Available predefined layouts. The first one is the default.
pub const PRESETS: &[&str] = &["aah", "aah-layout"];

pub const DEFAULT_PRESET: &str = "aah";

/// Load a predefined layout by name.
pub fn load_preset(name: &str) -> Result<Layout, PackmatchError> {
    let json = match name {
        "aah" => AAH_JSON,
        "aah-layout" => AAH_LAYOUT_JSON,
        _ => {
            return Err(PackmatchError::LayoutInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let layout: Layout = serde_json::from_str(json)?;
    validate_layout(&layout)?;
    Ok(layout)
}
