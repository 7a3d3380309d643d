use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, SubsecRound, TimeDelta};

/// One recorded work interval with its root-to-leaf title chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub titles: Vec<String>,          // ⇔ title1..titleN (root first)
    pub start: DateTime<FixedOffset>, // ⇔ start_time
    pub end: DateTime<FixedOffset>,   // ⇔ end_time
}

impl Session {
    /// Validated constructor used by the recording commands.
    /// - the chain must have at least one title
    /// - no title may be empty (an empty field terminates the chain on disk)
    /// - `end` must not precede `start`
    ///
    /// Titles are stored trimmed: the log reader drops edge whitespace.
    pub fn new(
        titles: Vec<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<Self> {
        if titles.is_empty() {
            return Err(AppError::InvalidTitles(
                "at least one title is required".to_string(),
            ));
        }
        if let Some(pos) = titles.iter().position(|t| t.trim().is_empty()) {
            return Err(AppError::InvalidTitles(format!(
                "title {} is empty",
                pos + 1
            )));
        }
        let titles: Vec<String> = titles.into_iter().map(|t| t.trim().to_string()).collect();
        if end < start {
            return Err(AppError::InvalidTimestamp(format!(
                "end {} is before start {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        Ok(Self { titles, start, end })
    }

    /// Session running from `start` until now, in the local offset.
    /// Both instants are truncated to whole seconds so they survive the log round-trip.
    pub fn ending_now(titles: Vec<String>, start: DateTime<Local>) -> AppResult<Self> {
        let start = start.trunc_subsecs(0).fixed_offset();
        let end = Local::now().trunc_subsecs(0).fixed_offset().max(start);
        Self::new(titles, start, end)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn depth(&self) -> usize {
        self.titles.len()
    }

    pub fn date_str(&self) -> String {
        self.start.date_naive().format("%Y-%m-%d").to_string()
    }

    pub fn chain(&self) -> String {
        self.titles.join(" > ")
    }
}
