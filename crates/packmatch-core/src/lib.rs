pub mod error;
pub mod export;
pub mod extraction;
pub mod layout;
pub mod matching;
pub mod model;
pub mod order_sheet;
pub mod parsing;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use error::PackmatchError;
use extraction::{flatten_lines, pages_from_text, PdfExtractor};
use layout::schema::{ExtractorSettings, Layout, SheetSettings};
use model::{ExtractionReport, MatchReport, ProductTable};

pub use parsing::extract;

/// Extraction and join results for one price list / order sheet pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub extraction: ExtractionReport,
    pub matches: MatchReport,
}

/// Main extraction entry point: read product records from a price list PDF.
///
/// Fails only if the document cannot be read. A document without a text
/// layer (a scan, say) gives an empty report; unrecognized lines are
/// skipped.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    settings: &ExtractorSettings,
) -> Result<ExtractionReport, PackmatchError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let lines = flatten_lines(&pages);

    if lines.iter().all(|l| l.trim().is_empty()) {
        warn!(
            backend = extractor.backend_name(),
            pages = pages.len(),
            "no text found in price list, is it a scanned document?"
        );
    }

    info!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        lines = lines.len(),
        "extracted price list text"
    );

    Ok(parsing::extract_products(&lines, settings))
}

/// Read product records from an already extracted text dump.
pub fn extract_text(text: &str, settings: &ExtractorSettings) -> ExtractionReport {
    let pages = pages_from_text(text);
    parsing::extract_products(&flatten_lines(&pages), settings)
}

/// Join an order workbook against extracted products.
pub fn match_orders(
    sheet_bytes: &[u8],
    products: &ProductTable,
    settings: &SheetSettings,
) -> Result<MatchReport, PackmatchError> {
    let rows = order_sheet::read_order_sheet(sheet_bytes, settings)?;
    Ok(matching::match_rows(&rows, products))
}

/// Extract a price list PDF and join an order workbook against it.
pub fn process_files(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    sheet_bytes: &[u8],
    layout: &Layout,
) -> Result<ProcessOutcome, PackmatchError> {
    let extraction = extract_pdf(pdf_bytes, extractor, &layout.extractor)?;
    let matches = match_orders(sheet_bytes, &extraction.products, &layout.sheet)?;
    Ok(ProcessOutcome {
        extraction,
        matches,
    })
}
