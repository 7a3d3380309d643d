use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{error, success};
use crate::ui::timer;
use std::path::Path;

/// Run the live timer and append the session once it is stopped.
pub fn handle(cmd: &Commands, cfg: &Config, file: &Path) -> AppResult<()> {
    if let Commands::Log { titles } = cmd {
        // Reject bad titles before the timer starts.
        let probe = chrono::Local::now().fixed_offset();
        Session::new(titles.clone(), probe, probe)?;

        let started = timer::run_until_interrupt(titles)?;
        let session = Session::ending_now(titles.clone(), started)?;

        match RecordLogic::record(file, &session, cfg.header_policy) {
            Ok(_) => success(format!("Timer stopped. Data saved to {}", file.display())),
            Err(e) => {
                error(format!(
                    "Session {} ({} - {}) was NOT saved",
                    session.chain(),
                    session.start.to_rfc3339(),
                    session.end.to_rfc3339()
                ));
                return Err(e);
            }
        }
    }

    Ok(())
}
