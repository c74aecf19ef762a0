//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::types::{DataSet, Value};

use super::cell::parse_text_cell;

/// Ingest CSV bytes into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header; names are kept verbatim (duplicates and blanks included).
/// - Blank lines are skipped.
/// - Records shorter than the header are padded with [`Value::Null`]; longer records fail.
/// - A quoted field left open at end of input fails with [`ParseError::UnterminatedQuote`].
/// - Cells are typed as missing/integer/float/text; see [`super::DEFAULT_NA_VALUES`].
pub fn ingest_csv_from_bytes(
    bytes: &[u8],
    delimiter: u8,
    na_values: &[String],
) -> ParseResult<DataSet> {
    check_quotes_terminated(bytes, delimiter)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(bytes);
    read_records(&mut rdr, na_values)
}

/// Ingest a CSV file from disk.
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    na_values: &[String],
) -> ParseResult<DataSet> {
    let bytes = std::fs::read(path)?;
    ingest_csv_from_bytes(&bytes, delimiter, na_values)
}

// Quotes must already be checked: the reader closes an open field silently at end of input.
fn read_records(
    rdr: &mut csv::Reader<&[u8]>,
    na_values: &[String],
) -> ParseResult<DataSet> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if columns.is_empty() {
        return Err(ParseError::NoColumns);
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(ParseError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }

        let mut row: Vec<Value> = Vec::with_capacity(columns.len());
        row.extend(record.iter().map(|raw| parse_text_cell(raw, na_values)));
        row.resize(columns.len(), Value::Null);
        rows.push(row);
    }

    Ok(DataSet::new(columns, rows))
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

// Mirrors the reader's quoting rules closely enough to tell whether input ends inside a quoted
// field. The line reported is where that field opened.
fn check_quotes_terminated(bytes: &[u8], delimiter: u8) -> ParseResult<()> {
    let mut state = QuoteState::FieldStart;
    let mut line: u64 = 1;
    let mut opened_at: u64 = 1;

    for &b in bytes {
        state = match (state, b) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart, b'"') => {
                opened_at = line;
                QuoteState::Quoted
            }
            (_, b'\n' | b'\r') => QuoteState::FieldStart,
            (_, d) if d == delimiter => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };
        if b == b'\n' {
            line += 1;
        }
    }

    match state {
        QuoteState::Quoted => Err(ParseError::UnterminatedQuote { line: opened_at }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::check_quotes_terminated;
    use crate::error::ParseError;

    #[test]
    fn balanced_quotes_pass() {
        assert!(check_quotes_terminated(b"a,b\n\"x,y\",2\n", b',').is_ok());
        assert!(check_quotes_terminated(b"a\n\"say \"\"hi\"\"\"\n", b',').is_ok());
        assert!(check_quotes_terminated(b"a\n\"multi\nline\"\n", b',').is_ok());
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        assert!(check_quotes_terminated(b"a,b\n5\" pipe,2\n", b',').is_ok());
    }

    #[test]
    fn open_quote_reports_opening_line() {
        let err = check_quotes_terminated(b"a,b\n1,2\n3,\"oops\n4,5\n", b',').unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedQuote { line: 3 }));
    }

    #[test]
    fn respects_custom_delimiter() {
        assert!(check_quotes_terminated(b"a;b\n1;\"x;y\"\n", b';').is_ok());
        assert!(check_quotes_terminated(b"a;b\n1;\"x\n", b';').is_err());
    }
}
