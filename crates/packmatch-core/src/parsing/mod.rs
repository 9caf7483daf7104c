pub mod matchers;
pub mod normalize;
pub mod patterns;
pub mod values;

use tracing::{debug, info, trace};

use crate::layout::schema::ExtractorSettings;
use crate::model::{ExtractionReport, Overwrite, ProductTable, SkippedWindow};
use matchers::{default_matchers, LineMatcher, MatchOutcome};

/// Extract product records from a line stream with the default layout.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> ProductTable {
    extract_products(lines, &ExtractorSettings::default()).products
}

/// Extract product records from a line stream.
///
/// Never fails: lines no matcher recognizes are skipped, and code windows
/// that yield no record are listed in the report's diagnostics.
pub fn extract_products<S: AsRef<str>>(
    lines: &[S],
    settings: &ExtractorSettings,
) -> ExtractionReport {
    let matchers = default_matchers(settings);
    scan_lines(lines, &matchers, settings.lookahead_window)
}

/// Run `matchers` over `lines` left to right.
///
/// At each position the first matcher that recognizes the line decides how
/// many lines to consume. The scan stops once fewer than `lookahead + 1`
/// lines remain; those tail lines are not examined.
pub fn scan_lines<S: AsRef<str>>(
    lines: &[S],
    matchers: &[Box<dyn LineMatcher>],
    lookahead: usize,
) -> ExtractionReport {
    let lines: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
    let mut report = ExtractionReport::default();

    let mut i = 0;
    while i + lookahead < lines.len() {
        let hit = matchers
            .iter()
            .find_map(|m| m.try_match(&lines, i).map(|outcome| (m.name(), outcome)));

        let Some((matcher, outcome)) = hit else {
            i += 1;
            continue;
        };

        let consumed = outcome.consumed().max(1);
        match outcome {
            MatchOutcome::Record { code, record, .. } => {
                trace!(line = i, matcher, %code, "matched product row");
                *report.matcher_hits.entry(matcher.to_string()).or_default() += 1;
                if let Some(previous) = report.products.insert(code.clone(), record) {
                    debug!(line = i, %code, "product code seen again, keeping later record");
                    report.overwrites.push(Overwrite {
                        line_index: i,
                        code,
                        previous,
                        current: record,
                    });
                }
            }
            MatchOutcome::Abandoned { code, reason, .. } => {
                debug!(line = i, matcher, %code, %reason, "no record for product code");
                report.skipped_windows.push(SkippedWindow {
                    line_index: i,
                    code,
                    reason,
                    lines_consumed: consumed,
                });
            }
        }
        i += consumed;
    }

    report.lines_scanned = i.min(lines.len());
    report.unscanned_tail = lines.len() - report.lines_scanned;

    info!(
        lines = lines.len(),
        products = report.products.len(),
        skipped = report.skipped_windows.len(),
        "extracted product records"
    );

    report
}
