use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::parsing::patterns::PRODUCT_CODE;

/// A catalog product code: 4 to 10 characters from `A-Z` and `0-9`.
///
/// Case-sensitive. Only constructed through [`ProductCode::parse`], so every
/// value held by the rest of the crate satisfies the pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Accepts `s` only if the whole string is code-shaped. No trimming.
    pub fn parse(s: &str) -> Option<ProductCode> {
        if PRODUCT_CODE.is_match(s) {
            Some(ProductCode(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductCode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ProductCode::parse(&s).ok_or_else(|| format!("'{s}' is not a valid product code"))
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> String {
        code.0
    }
}

/// Pack size and unit price recovered for one product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub pack_size: Decimal,
    pub price: Decimal,
}

/// Product code -> record mapping produced by one extraction run.
///
/// Inserting a code that is already present replaces its record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTable {
    records: BTreeMap<ProductCode, ProductRecord>,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the record that was replaced, if any.
    pub fn insert(&mut self, code: ProductCode, record: ProductRecord) -> Option<ProductRecord> {
        self.records.insert(code, record)
    }

    pub fn get(&self, code: &str) -> Option<&ProductRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ProductCode, ProductRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ProductTable {
    type Item = (&'a ProductCode, &'a ProductRecord);
    type IntoIter = btree_map::Iter<'a, ProductCode, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A recognized code line that produced no record: a lookahead window
/// without enough numbers, or a value too large to hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedWindow {
    /// Index of the code line in the line stream.
    pub line_index: usize,
    pub code: ProductCode,
    pub reason: String,
    /// Number of lines consumed, code line included.
    pub lines_consumed: usize,
}

/// A code seen more than once; the later record won.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overwrite {
    pub line_index: usize,
    pub code: ProductCode,
    pub previous: ProductRecord,
    pub current: ProductRecord,
}

/// Result of scanning one line stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub products: ProductTable,
    pub lines_scanned: usize,
    /// Lines at the end of the stream that were too close to the end to be scanned.
    pub unscanned_tail: usize,
    /// Matcher name -> number of records it produced.
    pub matcher_hits: BTreeMap<String, usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_windows: Vec<SkippedWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overwrites: Vec<Overwrite>,
}

/// One data row of the order sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// 1-based row number in the sheet, header row included.
    pub row_number: usize,
    /// The sheet's own product code, copied to the export unchanged.
    pub sku_code: String,
    /// Code joined against the price list, trimmed and uppercased.
    pub lookup_code: String,
    pub description: String,
}

/// One line of the export: `SKU Code`, `Quantity`, `Price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRow {
    #[serde(rename = "SKU Code")]
    pub sku_code: String,
    #[serde(rename = "Quantity")]
    pub quantity: Decimal,
    #[serde(rename = "Price")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedRow {
    pub row_number: usize,
    pub lookup_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub rows: Vec<MatchedRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<UnmatchedRow>,
}
