//! Regex patterns for price list line recognition.

use regex::Regex;
use std::sync::LazyLock;

/// A whole string that is a product code.
pub static PRODUCT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{4,10}$").expect("valid product code pattern"));

/// One price list row flattened onto a single line:
/// `CODE <description...> <pack> <price> 1 <integer>`.
///
/// The literal `1` is the fixed quantity column of the printed list.
pub static COMPACT_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9]{4,10})\s+.*?\s+(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)\s+1\s+\d+$")
        .expect("valid compact row pattern")
});

/// A whole string that is an unsigned integer or decimal number.
pub static NUMERIC_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("valid numeric cell pattern"));

/// A single decimal digit in any script, matching what `\d` accepts above.
pub static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("valid decimal digit pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_row_captures_pack_and_price() {
        let caps = COMPACT_ROW
            .captures("AB12CD filler text 3.0 9.99 1 42")
            .unwrap();
        assert_eq!(&caps[1], "AB12CD");
        assert_eq!(&caps[2], "3.0");
        assert_eq!(&caps[3], "9.99");
    }

    #[test]
    fn compact_row_requires_quantity_one() {
        assert!(!COMPACT_ROW.is_match("AB12CD filler 3.0 9.99 2 42"));
    }

    #[test]
    fn compact_row_requires_trailing_integer() {
        assert!(!COMPACT_ROW.is_match("AB12CD filler 3.0 9.99 1"));
        assert!(!COMPACT_ROW.is_match("AB12CD filler 3.0 9.99 1 4.2"));
    }

    #[test]
    fn numeric_cell_shapes() {
        assert!(NUMERIC_CELL.is_match("5"));
        assert!(NUMERIC_CELL.is_match("12.50"));
        assert!(!NUMERIC_CELL.is_match("12."));
        assert!(!NUMERIC_CELL.is_match(".5"));
        assert!(!NUMERIC_CELL.is_match("-1"));
        assert!(!NUMERIC_CELL.is_match("1,5"));
        assert!(!NUMERIC_CELL.is_match(""));
    }

    #[test]
    fn decimal_digit_accepts_other_scripts() {
        assert!(DECIMAL_DIGIT.is_match("7"));
        assert!(DECIMAL_DIGIT.is_match("\u{0663}"));
        assert!(!DECIMAL_DIGIT.is_match("x"));
        assert!(!DECIMAL_DIGIT.is_match("12"));
    }
}
