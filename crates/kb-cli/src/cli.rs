use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Kanban board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Board to operate on (defaults to the first board)
    #[arg(long, global = true)]
    pub(crate) board: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    pub(crate) verbose: bool,
}
