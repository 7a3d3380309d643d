use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::summary::render;
use crate::errors::AppResult;
use crate::ui::messages::{diagnostic, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, file: &Path) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let summary = Core::build_summary(file, period.as_deref())?;

        if cfg.show_diagnostics {
            for d in &summary.diagnostics {
                diagnostic(d);
            }
        }

        if summary.forest.is_empty() {
            if summary.sessions == 0 {
                warning(format!("No data in {} (only header or empty)", file.display()));
            } else {
                warning("No sessions in the selected period.");
            }
            return Ok(());
        }

        print!("{}", render(&summary.forest));
    }

    Ok(())
}
