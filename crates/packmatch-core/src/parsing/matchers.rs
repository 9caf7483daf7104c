//! Line matchers: each recognizes one way a price list row can appear in
//! flattened PDF text.

use rust_decimal::Decimal;

use super::patterns::COMPACT_ROW;
use super::values::{numeric_cell, parse_amount};
use crate::layout::schema::ExtractorSettings;
use crate::model::{ProductCode, ProductRecord};

/// What a matcher decided at a cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A record was recovered.
    Record {
        code: ProductCode,
        record: ProductRecord,
        consumed: usize,
    },
    /// The matcher claimed the lines but could not recover a record.
    Abandoned {
        code: ProductCode,
        reason: String,
        consumed: usize,
    },
}

impl MatchOutcome {
    pub fn consumed(&self) -> usize {
        match self {
            MatchOutcome::Record { consumed, .. } | MatchOutcome::Abandoned { consumed, .. } => {
                *consumed
            }
        }
    }
}

/// A recognition strategy tried at each cursor position.
pub trait LineMatcher: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns `None` when the line at `index` is not this matcher's shape.
    fn try_match(&self, lines: &[&str], index: usize) -> Option<MatchOutcome>;
}

/// The matchers in priority order: compact rows first, then bare code windows.
pub fn default_matchers(settings: &ExtractorSettings) -> Vec<Box<dyn LineMatcher>> {
    vec![
        Box::new(CompactLineMatcher),
        Box::new(CodeWindowMatcher::new(settings)),
    ]
}

/// A whole row on one line: `CODE <text> <pack> <price> 1 <n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactLineMatcher;

impl LineMatcher for CompactLineMatcher {
    fn name(&self) -> &str {
        "compact"
    }

    fn try_match(&self, lines: &[&str], index: usize) -> Option<MatchOutcome> {
        let line = lines.get(index)?.trim();
        let caps = COMPACT_ROW.captures(line)?;

        let code = ProductCode::parse(&caps[1])?;
        let record = to_decimal(&caps[2]).and_then(|pack_size| {
            let price = to_decimal(&caps[3])?;
            Ok(ProductRecord { pack_size, price })
        });

        Some(match record {
            Ok(record) => MatchOutcome::Record {
                code,
                record,
                consumed: 1,
            },
            Err(reason) => MatchOutcome::Abandoned {
                code,
                reason,
                consumed: 1,
            },
        })
    }
}

/// A code alone on its line, with the row's cells on the following lines.
///
/// Looks at a fixed window of lines after the code and keeps the purely
/// numeric ones in order. The numeric lines at `pack_index` and
/// `price_index` become the record. The code line and the whole window are
/// consumed whether or not a record comes out.
#[derive(Debug, Clone)]
pub struct CodeWindowMatcher {
    window: usize,
    pack_index: usize,
    price_index: usize,
}

impl CodeWindowMatcher {
    pub fn new(settings: &ExtractorSettings) -> Self {
        Self {
            window: settings.lookahead_window,
            pack_index: settings.pack_index,
            price_index: settings.price_index,
        }
    }

    fn read_window(&self, window: &[&str]) -> Result<ProductRecord, String> {
        let numeric: Vec<&str> = window.iter().filter_map(|l| numeric_cell(l)).collect();

        let needed = self.pack_index.max(self.price_index) + 1;
        if numeric.len() < needed {
            return Err(format!(
                "found {} numeric line(s) in the next {}, need {}",
                numeric.len(),
                self.window,
                needed
            ));
        }

        let pack_size = to_decimal(numeric[self.pack_index])?;
        let price = to_decimal(numeric[self.price_index])?;
        Ok(ProductRecord { pack_size, price })
    }
}

fn to_decimal(s: &str) -> Result<Decimal, String> {
    parse_amount(s).map_err(|e| format!("invalid number '{s}': {e}"))
}

impl LineMatcher for CodeWindowMatcher {
    fn name(&self) -> &str {
        "code_window"
    }

    fn try_match(&self, lines: &[&str], index: usize) -> Option<MatchOutcome> {
        let code = ProductCode::parse(lines.get(index)?.trim())?;
        // Never match against a partial window.
        let window = lines.get(index + 1..=index + self.window)?;
        let consumed = self.window + 1;

        Some(match self.read_window(window) {
            Ok(record) => MatchOutcome::Record {
                code,
                record,
                consumed,
            },
            Err(reason) => MatchOutcome::Abandoned {
                code,
                reason,
                consumed,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn settings(window: usize, pack_index: usize, price_index: usize) -> ExtractorSettings {
        ExtractorSettings {
            lookahead_window: window,
            pack_index,
            price_index,
        }
    }

    #[test]
    fn compact_matches_single_line_row() {
        let lines = ["  AB12CD filler text 3.0 9.99 1 42  "];
        let outcome = CompactLineMatcher.try_match(&lines, 0).unwrap();
        assert_eq!(
            outcome,
            MatchOutcome::Record {
                code: ProductCode::parse("AB12CD").unwrap(),
                record: ProductRecord {
                    pack_size: dec!(3.0),
                    price: dec!(9.99),
                },
                consumed: 1,
            }
        );
    }

    #[test]
    fn compact_reads_non_ascii_digits() {
        let lines = ["AB12CD filler \u{0663} \u{0665} 1 42"];
        match CompactLineMatcher.try_match(&lines, 0).unwrap() {
            MatchOutcome::Record { record, .. } => {
                assert_eq!(record.pack_size, dec!(3));
                assert_eq!(record.price, dec!(5));
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn compact_overflowing_number_is_abandoned() {
        let lines = ["AB12CD filler 99999999999999999999999999999999999 9.99 1 42"];
        let outcome = CompactLineMatcher.try_match(&lines, 0).unwrap();
        assert!(matches!(outcome, MatchOutcome::Abandoned { consumed: 1, .. }));
    }

    #[test]
    fn compact_ignores_bare_code() {
        assert!(CompactLineMatcher.try_match(&["AB12CD"], 0).is_none());
    }

    #[test]
    fn window_takes_first_two_numeric_lines() {
        let lines = ["XY9988", "", "5", "Each", "12.50", "7", ""];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        match m.try_match(&lines, 0).unwrap() {
            MatchOutcome::Record {
                record, consumed, ..
            } => {
                assert_eq!(record.pack_size, dec!(5));
                assert_eq!(record.price, dec!(12.50));
                assert_eq!(consumed, 7);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn window_with_one_numeric_is_abandoned() {
        let lines = ["ZZ4321", "", "3", "", "", "", ""];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        match m.try_match(&lines, 0).unwrap() {
            MatchOutcome::Abandoned { consumed, .. } => assert_eq!(consumed, 7),
            other => panic!("expected abandoned, got {other:?}"),
        }
    }

    #[test]
    fn window_overflowing_number_is_abandoned() {
        let lines = [
            "ZZ4321",
            "99999999999999999999999999999999999",
            "2",
            "",
            "",
            "",
            "",
        ];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        let outcome = m.try_match(&lines, 0).unwrap();
        assert!(matches!(outcome, MatchOutcome::Abandoned { consumed: 7, .. }));
    }

    #[test]
    fn window_reads_non_ascii_digits() {
        let lines = ["XY9988", "\u{0663}", "\u{0665}", "", "", "", ""];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        match m.try_match(&lines, 0).unwrap() {
            MatchOutcome::Record { record, .. } => {
                assert_eq!(record.pack_size, dec!(3));
                assert_eq!(record.price, dec!(5));
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn window_needs_full_lookahead() {
        let lines = ["XY9988", "5", "12.50"];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        assert!(m.try_match(&lines, 0).is_none());
    }

    #[test]
    fn window_respects_custom_index_mapping() {
        let lines = ["XY9988", "1", "6", "4.25"];
        let m = CodeWindowMatcher::new(&settings(3, 1, 2));
        match m.try_match(&lines, 0).unwrap() {
            MatchOutcome::Record {
                record, consumed, ..
            } => {
                assert_eq!(record.pack_size, dec!(6));
                assert_eq!(record.price, dec!(4.25));
                assert_eq!(consumed, 4);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn window_matcher_requires_whole_line_code() {
        let lines = ["XY9988 extra", "5", "12.50", "", "", "", ""];
        let m = CodeWindowMatcher::new(&settings(6, 0, 1));
        assert!(m.try_match(&lines, 0).is_none());
    }
}
