#![cfg(feature = "excel")]

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveDateTime;

use crate::error::{ParseError, ParseResult};
use crate::types::{DataSet, Value};

use super::cell::is_missing;

/// Zero-based sheet row holding the column names. Row 0 is a title row and is always skipped.
pub const SPREADSHEET_HEADER_ROW: usize = 1;

/// Ingest an in-memory workbook (`.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`) into a `DataSet`.
///
/// Behavior:
/// - The container format is detected from the bytes, not the file name
/// - Only the first sheet is read
/// - Sheet row [`SPREADSHEET_HEADER_ROW`] is the header; rows above it are discarded
/// - Every row below the header is a data row, with no filtering
pub fn ingest_excel_from_bytes(bytes: &[u8], na_values: &[String]) -> ParseResult<DataSet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(ParseError::NoSheets)??;
    Ok(ingest_sheet_range(&range, na_values))
}

/// Ingest a workbook from disk. Same rules as [`ingest_excel_from_bytes`].
pub fn ingest_excel_from_path(path: impl AsRef<Path>, na_values: &[String]) -> ParseResult<DataSet> {
    let bytes = std::fs::read(path)?;
    ingest_excel_from_bytes(&bytes, na_values)
}

fn ingest_sheet_range(range: &Range<Data>, na_values: &[String]) -> DataSet {
    // `start` is the first used cell; an empty sheet has none.
    let Some((start_row, _)) = range.start() else {
        return DataSet::default();
    };
    let start_row = start_row as usize;

    // Used range starts below the header row: the header is blank.
    let mut columns: Vec<String> = if start_row > SPREADSHEET_HEADER_ROW {
        vec![String::new(); range.width()]
    } else {
        Vec::new()
    };

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (offset, row) in range.rows().enumerate() {
        let sheet_row = start_row + offset;
        if sheet_row < SPREADSHEET_HEADER_ROW {
            continue;
        }
        if sheet_row == SPREADSHEET_HEADER_ROW {
            columns = row.iter().map(cell_to_header_string).collect();
            continue;
        }
        rows.push(row.iter().map(|c| convert_cell(c, na_values)).collect());
    }

    DataSet::new(columns, rows)
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Integral floats print without a trailing `.0`, within the exact `i64` range.
            if f.fract() == 0.0 && f.abs() < 9.2e18 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => datetime_text(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => "".to_string(),
    }
}

fn convert_cell(c: &Data, na_values: &[String]) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => text_cell(s, na_values),
        // `#DIV/0!` and friends stay as text; `#N/A` is missing through the NA list.
        Data::Error(e) => text_cell(&e.to_string(), na_values),
        Data::DateTime(dt) => Value::Utf8(datetime_text(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Utf8(s.clone()),
    }
}

fn text_cell(s: &str, na_values: &[String]) -> Value {
    if is_missing(s, na_values) {
        Value::Null
    } else {
        Value::Utf8(s.to_owned())
    }
}

fn datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.to_string();
    }
    dt.as_datetime()
        .map(|d: NaiveDateTime| d.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|| dt.to_string())
}
