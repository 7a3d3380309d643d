use crate::core::calculator::day_split::split_by_day;
use crate::errors::AppResult;
use crate::logfile::{HeaderPolicy, LogWriter};
use crate::models::row::Row;
use crate::models::session::Session;
use std::path::Path;

pub struct RecordLogic;

impl RecordLogic {
    /// Split `session` at local midnights and append one row per day.
    /// Returns the rows written.
    pub fn record(path: &Path, session: &Session, policy: HeaderPolicy) -> AppResult<Vec<Row>> {
        let rows: Vec<Row> = split_by_day(session).iter().map(Row::from_session).collect();

        LogWriter::new(path, policy).append(&rows)?;

        Ok(rows)
    }
}
