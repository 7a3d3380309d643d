use super::session::Session;
use chrono::{DateTime, FixedOffset, SecondsFormat};

pub const START_COLUMN: &str = "start_time";
pub const END_COLUMN: &str = "end_time";
pub const TITLE_COLUMN_PREFIX: &str = "title";

/// Number of fixed (non-title) columns in front of every row.
pub const FIXED_COLUMNS: usize = 2;

/// On-disk unit: one line of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub start: String,
    pub end: String,
    pub titles: Vec<String>,
}

impl Row {
    pub fn from_session(session: &Session) -> Self {
        Self {
            start: format_timestamp(&session.start),
            end: format_timestamp(&session.end),
            titles: session.titles.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    pub fn depth(&self) -> usize {
        self.titles.len()
    }

    /// Fields of this row padded with empty titles up to `width` title columns.
    /// Returns `None` if the chain does not fit: rows are never truncated.
    pub fn to_fields(&self, width: usize) -> Option<Vec<String>> {
        if self.titles.len() > width {
            return None;
        }

        let mut fields = Vec::with_capacity(FIXED_COLUMNS + width);
        fields.push(self.start.clone());
        fields.push(self.end.clone());
        fields.extend(self.titles.iter().cloned());
        fields.resize(FIXED_COLUMNS + width, String::new());
        Some(fields)
    }
}

/// `start_time,end_time,title1..titleN`
pub fn header(width: usize) -> Vec<String> {
    let mut h = vec![START_COLUMN.to_string(), END_COLUMN.to_string()];
    h.extend((1..=width).map(|i| format!("{TITLE_COLUMN_PREFIX}{i}")));
    h
}

/// RFC 3339 with whole seconds; UTC is written as `Z`.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).ok()
}
