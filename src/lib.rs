//! bakdag library root.
//! Exposes the CLI parser, the high-level run() function, the session
//! engine and the record store.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Drinks { .. } => commands::drinks::handle(&cli.command, cfg),
        Commands::Start => commands::session::start(cfg),
        Commands::End { .. } => commands::session::end(&cli.command, cfg),
        Commands::Checkin { .. } => commands::checkin::handle(&cli.command, cfg),
        Commands::Feed { .. } => commands::feed::handle(&cli.command, cfg),
        Commands::Progress => commands::session::progress(cfg),
        Commands::Stats => commands::session::stats(cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
