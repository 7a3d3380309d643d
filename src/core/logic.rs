use crate::core::calculator::hierarchy;
use crate::errors::{AppError, AppResult};
use crate::logfile::{RowDiagnostic, read_all};
use crate::models::task_node::DailyForest;
use crate::utils::date;
use std::path::Path;

/// Result of reading and aggregating one log file.
#[derive(Debug, Default)]
pub struct Summary {
    pub forest: DailyForest,
    pub diagnostics: Vec<RowDiagnostic>,
    pub sessions: usize,
}

pub struct Core;

impl Core {
    /// Read the log at `path`, aggregate it per day and optionally keep
    /// only the days in `period` (see `utils::date::parse_period`).
    pub fn build_summary(path: &Path, period: Option<&str>) -> AppResult<Summary> {
        let dates = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(date::parse_period(p).map_err(AppError::InvalidDate)?),
        };

        let contents = read_all(path)?;
        let mut forest = hierarchy::aggregate(&contents.sessions);

        if let Some(dates) = dates {
            forest.retain_dates(&dates);
        }

        Ok(Summary {
            forest,
            diagnostics: contents.diagnostics,
            sessions: contents.sessions.len(),
        })
    }
}
