//! Typing of raw text cells shared by the CSV and spreadsheet readers.

use crate::types::Value;

/// Cell contents read as a missing value. Matching is exact: no trimming, no case folding.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// An empty cell or an exact NA token. Whitespace-only text is not missing.
pub(crate) fn is_missing(raw: &str, na_values: &[String]) -> bool {
    raw.is_empty() || na_values.iter().any(|na| na == raw)
}

/// Type a raw text cell: missing, integer, float, or text.
///
/// Surrounding whitespace is ignored when detecting numbers; text is stored unchanged.
pub(crate) fn parse_text_cell(raw: &str, na_values: &[String]) -> Value {
    if is_missing(raw, na_values) {
        return Value::Null;
    }
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Value::Int64(v);
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        return Value::Float64(v);
    }
    Value::Utf8(raw.to_owned())
}
