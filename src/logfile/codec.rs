//! CSV row codec: comma delimited, quotes doubled, a variable number of
//! trailing title fields per record.

use crate::errors::RowDecodeError;
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use std::io::{self, Read};

/// Encode one record as a single CSV line (with trailing `\n`).
/// Fields containing a comma, a quote or a line break are quoted.
pub fn encode_row<S: AsRef<str>>(fields: &[S]) -> csv::Result<String> {
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    wtr.write_record(fields.iter().map(|f| f.as_ref().as_bytes()))?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Decode a single CSV line. The number of fields is not checked here.
pub fn decode_row(line: &str) -> Result<Vec<String>, RowDecodeError> {
    let mut rows = RowReader::new(line.as_bytes());
    match rows.next() {
        Some(Ok(row)) => Ok(row.fields),
        Some(Err(e)) => Err(e),
        None => Err(RowDecodeError {
            line: 1,
            raw: line.to_string(),
            reason: "empty row".to_string(),
        }),
    }
}

/// A decoded record plus the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRow {
    pub line: u64,
    pub fields: Vec<String>,
}

/// Tolerant record iterator over a whole log.
///
/// - variable field count (`flexible`)
/// - leading whitespace of each field is dropped
/// - quoted fields may span lines
///
/// A record that cannot be decoded yields `Err` and iteration continues
/// with the next record.
pub struct RowReader<R: Read> {
    inner: csv::Reader<R>,
    record: ByteRecord,
    done: bool,
}

/// Raw CSV reader with the log's dialect: no header handling, any field count.
pub fn byte_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .double_quote(true)
        .from_reader(rdr)
}

impl<R: Read> RowReader<R> {
    pub fn new(rdr: R) -> Self {
        Self {
            inner: byte_reader(rdr),
            record: ByteRecord::new(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<DecodedRow, RowDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.inner.read_byte_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = self.record.position().map(|p| p.line()).unwrap_or(0);
                Some(to_fields(&self.record, line))
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                // I/O errors leave the reader in an unknown state.
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    self.done = true;
                }
                Some(Err(RowDecodeError {
                    line,
                    raw: lossy_line(&self.record),
                    reason: e.to_string(),
                }))
            }
        }
    }
}

fn to_fields(record: &ByteRecord, line: u64) -> Result<DecodedRow, RowDecodeError> {
    let mut fields = Vec::with_capacity(record.len());
    for (i, raw) in record.iter().enumerate() {
        match std::str::from_utf8(raw) {
            Ok(s) => fields.push(s.trim_start().to_string()),
            Err(_) => {
                return Err(RowDecodeError {
                    line,
                    raw: lossy_line(record),
                    reason: format!("field {} is not valid UTF-8", i + 1),
                });
            }
        }
    }
    Ok(DecodedRow { line, fields })
}

fn lossy_line(record: &ByteRecord) -> String {
    let fields: Vec<String> = record
        .iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();
    match encode_row(&fields) {
        Ok(line) => line.trim_end().to_string(),
        Err(_) => fields.join(","),
    }
}

/// Running maximum of title columns seen in one file. Never shrinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleWidth(usize);

impl TitleWidth {
    pub fn new(initial: usize) -> Self {
        Self(initial)
    }

    pub fn observe(&mut self, titles: usize) {
        self.0 = self.0.max(titles);
    }

    pub fn get(&self) -> usize {
        self.0
    }
}
