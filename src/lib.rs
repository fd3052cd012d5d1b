//! rprettytable library root.
//! Exposes the table model, the text/HTML renderers, the CSV/JSON loaders,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod import;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

pub use crate::core::PrettyTable;
pub use errors::{AppError, AppResult};
pub use models::Cell;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the platform default location
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
