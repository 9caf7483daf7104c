/// Normalize a spreadsheet code cell to the form used as a join key.
///
/// Steps:
/// 1. Trim surrounding whitespace
/// 2. Uppercase
///
/// Interior characters are left alone: a cell like "ab 12" becomes "AB 12",
/// which can never equal a product code and so never matches.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Lowercased header text with runs of whitespace collapsed to one space.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_uppercase() {
        assert_eq!(normalize_code("  ab12cd "), "AB12CD");
    }

    #[test]
    fn test_already_normal() {
        assert_eq!(normalize_code("XY9988"), "XY9988");
    }

    #[test]
    fn test_interior_space_kept() {
        assert_eq!(normalize_code("ab 12"), "AB 12");
    }

    #[test]
    fn test_header_collapses_whitespace() {
        assert_eq!(normalize_header("  AAH   Product\nCode "), "aah product code");
    }
}
