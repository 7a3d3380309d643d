//! talogo library root.
//! Exposes the CLI parser, the high-level run() function, and the log/aggregation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logfile;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let file = utils::path::expand_tilde(&cfg.log_file);

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg, &file),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, &file),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &file),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg, &file),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(file) = &cli.file {
        cfg.log_file = file.clone();
    }
    if let Some(policy) = cli.header_policy {
        cfg.header_policy = policy;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
