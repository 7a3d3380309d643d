use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: persist the effective settings (including a
/// `--file` override) as the new configuration file.
pub fn handle(cfg: &Config, file: &Path) -> AppResult<()> {
    let cfg = Config {
        log_file: file.to_string_lossy().to_string(),
        ..cfg.clone()
    };

    let path = cfg.save()?;
    info(format!("Log file    : {}", cfg.log_file));
    success(format!("Config file : {}", path.display()));

    Ok(())
}
