//! Shared plumbing for the delimited-text readers.
//!
//! Records are read as raw bytes. Text fields are decoded lossily, so a stray
//! non-UTF-8 byte in a name never aborts a run.

use crate::error::{ReconcileError, Result};
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::borrow::Cow;
use std::io::Read;
use std::str::FromStr;

/// Builds the CSV reader used for every input file.
///
/// The header record is consumed by the reader. Records may have any number
/// of fields; callers decide what is too short.
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// Physical line number of a record, 1-based, header included.
pub(crate) fn line_of(record: &ByteRecord, fallback: u64) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(fallback)
}

fn decode(record: &ByteRecord, index: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(record.get(index).unwrap_or_default())
}

/// Parses field `index` of `record` as `T`, reporting the line and field
/// name on failure.
pub(crate) fn parse_field<T>(
    record: &ByteRecord,
    index: usize,
    field: &'static str,
    line: u64,
) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = decode(record, index);
    value.parse::<T>().map_err(|e| ReconcileError::InvalidField {
        line,
        field,
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Owned copy of a text field.
pub(crate) fn text_field(record: &ByteRecord, index: usize) -> String {
    decode(record, index).into_owned()
}
