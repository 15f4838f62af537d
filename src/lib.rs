//! wtimeline library root.
//! Exposes the CLI parser, the high-level run() function and the schedule
//! core (time conversions, chain recalculation, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path, colors: bool) -> AppResult<()> {
    match &cli.command {
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg, colors),
        Commands::Blocks { .. } => cli::commands::blocks::handle(&cli.command, colors),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());

    // A broken file must not prevent `config --init` from replacing it
    let cfg = match Config::load(&config_path) {
        Ok(cfg) => cfg,
        Err(_) if matches!(cli.command, Commands::Config { init: true, .. }) => Config::default(),
        Err(e) => return Err(e),
    };

    let colors = cfg.use_colors && !cli.no_color;
    ui::messages::set_colors(colors);

    dispatch(&cli, &cfg, &config_path, colors)
}
