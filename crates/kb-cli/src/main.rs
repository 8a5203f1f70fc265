//! kb - Kanban board CLI
//!
//! A command-line interface over the board database, driving the same
//! store the desktop shell uses.
//!
//! # Examples
//!
//! ```bash
//! # Create a board
//! kb board create "Platform" --column Todo --column Doing --column Done
//!
//! # Add a task with a checklist
//! kb task create "Ship release" --status Todo --subtask "Tag" --subtask "Announce"
//!
//! # Drag a task to another column
//! kb task move <uuid> --to Doing
//! ```

mod board_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod subtask_commands;
mod task_commands;

use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, CliResult},
};

use kb_store::{BoardStore, LogNotifier};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = kb_config::Config::load()?;

    let log_file = if cli.verbose {
        None
    } else {
        Some(log_file_path(&config)?)
    };
    logger::initialize(config.logging.level, log_file, cli.verbose)?;

    let db_path = config.database_path()?;
    let pool = kb_db::connect(&db_path).await?;
    let gateway = Arc::new(kb_db::SqliteGateway::new(pool));

    let mut store = BoardStore::new(gateway, Arc::new(LogNotifier));
    store.refresh_boards().await;
    if let Some(err) = store.last_error() {
        return Err(CliError::Load {
            message: err.to_string(),
        });
    }

    if let Some(name) = &cli.board {
        let board = store
            .boards()
            .iter()
            .find(|b| b.name == *name)
            .cloned()
            .ok_or_else(|| CliError::BoardNotFound { name: name.clone() })?;
        store.set_current_board(board);
    }

    match cli.command {
        Commands::Board { action } => board_commands::run(&mut store, action).await,
        Commands::Task { action } => task_commands::run(&mut store, action).await,
        Commands::Subtask { action } => subtask_commands::run(&mut store, action).await,
    }
}

/// Log file under the configured log directory, resolved against the
/// config directory when relative. The directory is created on first
/// use.
fn log_file_path(config: &kb_config::Config) -> CliResult<PathBuf> {
    let dir = PathBuf::from(&config.logging.dir);
    let dir = if dir.is_absolute() {
        dir
    } else {
        kb_config::Config::config_dir()?.join(dir)
    };
    std::fs::create_dir_all(&dir).map_err(|e| CliError::LogFile {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir.join("kb.log"))
}
