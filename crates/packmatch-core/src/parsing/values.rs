use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;

use super::patterns::{DECIMAL_DIGIT, NUMERIC_CELL};

/// Returns the trimmed cell if it is a plain unsigned integer or decimal.
///
/// Handles formats like:
/// - "68" -> Some("68")
/// - "  12.50 " -> Some("12.50")
/// - "1,5", "-3", "12." -> None
pub fn numeric_cell(s: &str) -> Option<&str> {
    let s = s.trim();
    if NUMERIC_CELL.is_match(s) {
        Some(s)
    } else {
        None
    }
}

/// Parse a numeric token already accepted by the line patterns.
///
/// Digits from any script are read by value ("\u{0663}" is 3). Only fails
/// when the value does not fit a `Decimal` (more than 28 significant
/// digits).
pub fn parse_amount(s: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(&ascii_digits(s.trim()))
}

fn ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect())
}

// Decimal digits are encoded in contiguous runs of ten starting at zero, so
// a digit's value is its offset from the start of its run, modulo ten.
fn ascii_digit(c: char) -> Option<char> {
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    char::from_digit((c as u32 - start) % 10, 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
