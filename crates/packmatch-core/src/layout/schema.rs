use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 6;
pub const DEFAULT_PACK_INDEX: usize = 0;
pub const DEFAULT_PRICE_INDEX: usize = 1;
pub const DEFAULT_SHEET_NAME: &str = "AAH DATA";

/// A price list layout: how its text is extracted and which order sheet
/// columns it is joined against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Run pdftotext with `-layout`, keeping each printed row on one line.
    #[serde(default)]
    pub preserve_layout: bool,
    #[serde(default)]
    pub extractor: ExtractorSettings,
    #[serde(default)]
    pub sheet: SheetSettings,
}

/// Parameters of the line-stream extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Lines inspected after a bare code line. Also the minimum number of
    /// lines that must follow the cursor for the scan to continue.
    pub lookahead_window: usize,
    /// Position of the pack size among the numeric lines of the window.
    pub pack_index: usize,
    /// Position of the price among the numeric lines of the window.
    pub price_index: usize,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            pack_index: DEFAULT_PACK_INDEX,
            price_index: DEFAULT_PRICE_INDEX,
        }
    }
}

/// Where the order data lives in the workbook.
///
/// Column hints are matched case-insensitively as substrings of the header
/// cells; the first matching column wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub sheet_name: String,
    /// Header of the column copied to the export as `SKU Code`.
    pub sku_column_hint: String,
    /// Headers containing this text are never taken as the SKU column.
    pub sku_column_exclude: String,
    /// Header of the column holding the price list code.
    pub lookup_column_hint: String,
    pub description_column_hint: String,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            sku_column_hint: "product cod".to_string(),
            sku_column_exclude: "aah".to_string(),
            lookup_column_hint: "aah product co".to_string(),
            description_column_hint: "desc".to_string(),
        }
    }
}
