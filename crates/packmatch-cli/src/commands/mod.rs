pub mod extract;
pub mod layouts;
pub mod matching;

use packmatch_core::error::PackmatchError;
use packmatch_core::extraction::pdftotext::PdftotextExtractor;
use packmatch_core::layout::builtin::{self, DEFAULT_PRESET};
use packmatch_core::layout::schema::Layout;
use packmatch_core::model::ExtractionReport;
use std::path::Path;

use crate::LayoutArgs;

/// Resolve the layout from --layout-file, --layout or the default preset.
pub fn resolve_layout(args: &LayoutArgs) -> Result<Layout, PackmatchError> {
    let mut layout = match (&args.layout_file, &args.layout) {
        (Some(path), _) => packmatch_core::layout::load_layout(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset(DEFAULT_PRESET)?,
    };
    if args.preserve_layout {
        layout.preserve_layout = true;
    }
    Ok(layout)
}

/// Extract products from a PDF, or from a text dump when the file ends in `.txt`.
pub fn extract_price_list(
    input_file: &Path,
    layout: &Layout,
) -> Result<ExtractionReport, PackmatchError> {
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        let text = std::fs::read_to_string(input_file)?;
        Ok(packmatch_core::extract_text(&text, &layout.extractor))
    } else {
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::with_layout(layout.preserve_layout);
        packmatch_core::extract_pdf(&pdf_bytes, &extractor, &layout.extractor)
    }
}
