use crate::{
    board_commands::BoardCommands, subtask_commands::SubtaskCommands,
    task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Subtask operations
    Subtask {
        #[command(subcommand)]
        action: SubtaskCommands,
    },
}
