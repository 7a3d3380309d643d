use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::{AppError, AppResult};
use crate::models::row::parse_timestamp;
use crate::models::session::Session;
use crate::ui::messages::success;
use std::path::Path;

/// Record a finished session given explicit start/end instants.
pub fn handle(cmd: &Commands, cfg: &Config, file: &Path) -> AppResult<()> {
    if let Commands::Add { titles, start, end } = cmd {
        let start_ts =
            parse_timestamp(start).ok_or_else(|| AppError::InvalidTimestamp(start.clone()))?;
        let end_ts = parse_timestamp(end).ok_or_else(|| AppError::InvalidTimestamp(end.clone()))?;

        let session = Session::new(titles.clone(), start_ts, end_ts)?;
        let rows = RecordLogic::record(file, &session, cfg.header_policy)?;

        success(format!(
            "Logged {} ({} row{}) to {}",
            session.chain(),
            rows.len(),
            if rows.len() == 1 { "" } else { "s" },
            file.display()
        ));
    }

    Ok(())
}
