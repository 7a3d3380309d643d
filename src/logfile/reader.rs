use super::codec::{RowReader, TitleWidth};
use crate::errors::ReadError;
use crate::models::row::{END_COLUMN, FIXED_COLUMNS, START_COLUMN, parse_timestamp};
use crate::models::session::Session;
use chrono::TimeDelta;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Column arrangement declared by a log's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `start_time,end_time,title1..titleN`
    Hierarchical { titles: usize },
    /// `title,start_time,end_time,duration_seconds` (first single-title release)
    Legacy,
}

const LEGACY_HEADER: [&str; 4] = ["title", "start_time", "end_time", "duration_seconds"];
const LEGACY_COLUMNS: usize = 4;

pub fn classify_header(fields: &[String]) -> Option<Layout> {
    let names: Vec<&str> = fields.iter().map(|f| f.trim()).collect();

    if names.len() >= FIXED_COLUMNS && names[0] == START_COLUMN && names[1] == END_COLUMN {
        return Some(Layout::Hierarchical {
            titles: names.len() - FIXED_COLUMNS,
        });
    }
    if names.len() >= LEGACY_COLUMNS && names[..LEGACY_COLUMNS] == LEGACY_HEADER {
        return Some(Layout::Legacy);
    }
    None
}

/// A skipped row and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub line: u64,
    pub reason: String,
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Skipping record on line {}: {}", self.line, self.reason)
    }
}

/// Everything recovered from one log file.
#[derive(Debug, Clone, Default)]
pub struct LogContents {
    pub layout: Option<Layout>,
    pub sessions: Vec<Session>,
    pub diagnostics: Vec<RowDiagnostic>,
    /// Widest title chain seen in header or rows.
    pub title_width: usize,
}

/// Read every valid session of the log at `path`.
///
/// Bad rows are skipped and reported in `diagnostics`; only a missing file,
/// an unreadable file or an invalid header fail the whole read.
pub fn read_all(path: &Path) -> Result<LogContents, ReadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReadError::FileNotFound(path.to_path_buf()),
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut records = RowReader::new(BufReader::new(file));

    let header = match records.next() {
        None => return Ok(LogContents::default()),
        Some(Ok(row)) => row.fields,
        Some(Err(e)) => {
            return Err(ReadError::Header {
                path: path.to_path_buf(),
                reason: e.reason,
            });
        }
    };

    let layout = classify_header(&header).ok_or_else(|| ReadError::Header {
        path: path.to_path_buf(),
        reason: format!("unrecognized columns '{}'", header.join(",")),
    })?;

    let mut width = TitleWidth::new(match layout {
        Layout::Hierarchical { titles } => titles,
        Layout::Legacy => 1,
    });
    let mut out = LogContents {
        layout: Some(layout),
        ..Default::default()
    };

    for rec in records {
        let row = match rec {
            Ok(row) => row,
            Err(e) => {
                out.diagnostics.push(RowDiagnostic {
                    line: e.line,
                    reason: e.reason,
                });
                continue;
            }
        };

        let parsed = match layout {
            Layout::Hierarchical { .. } => parse_hierarchical(&row.fields),
            Layout::Legacy => parse_legacy(&row.fields),
        };

        match parsed {
            Ok(session) => {
                width.observe(session.depth());
                out.sessions.push(session);
            }
            Err(reason) => out.diagnostics.push(RowDiagnostic {
                line: row.line,
                reason,
            }),
        }
    }

    out.title_width = width.get();
    Ok(out)
}

fn parse_hierarchical(fields: &[String]) -> Result<Session, String> {
    if fields.len() < FIXED_COLUMNS {
        return Err(format!("too few fields ({})", fields.len()));
    }

    let start = parse_timestamp(&fields[0])
        .ok_or_else(|| format!("invalid start time ({})", fields[0]))?;
    let end =
        parse_timestamp(&fields[1]).ok_or_else(|| format!("invalid end time ({})", fields[1]))?;

    build(resolve_chain(&fields[FIXED_COLUMNS..]), start, end)
}

fn parse_legacy(fields: &[String]) -> Result<Session, String> {
    if fields.len() < LEGACY_COLUMNS {
        return Err(format!("too few fields ({})", fields.len()));
    }

    let start = parse_timestamp(&fields[1])
        .ok_or_else(|| format!("invalid start time ({})", fields[1]))?;
    let seconds: i64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration ({})", fields[3]))?;
    if seconds < 0 {
        return Err(format!("negative duration ({seconds})"));
    }
    let end = start + TimeDelta::seconds(seconds);

    build(resolve_chain(&fields[..1]), start, end)
}

fn build(
    titles: Vec<String>,
    start: chrono::DateTime<chrono::FixedOffset>,
    end: chrono::DateTime<chrono::FixedOffset>,
) -> Result<Session, String> {
    if titles.is_empty() {
        return Err("no task title".to_string());
    }
    if end < start {
        return Err(format!("end time before start time ({end} < {start})"));
    }
    Ok(Session { titles, start, end })
}

/// Titles up to the first empty field; anything after it is padding.
pub fn resolve_chain(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| f.trim())
        .take_while(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}
