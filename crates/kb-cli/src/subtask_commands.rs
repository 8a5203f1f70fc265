use crate::error::{CliError, CliResult};

use kb_store::BoardStore;

use clap::Subcommand;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Subcommand)]
pub(crate) enum SubtaskCommands {
    /// List a task's subtasks with their completion summary
    List { task_id: Uuid },

    /// Flip a subtask's completion flag
    Toggle { task_id: Uuid, subtask_id: Uuid },
}

pub(crate) async fn run(store: &mut BoardStore, action: SubtaskCommands) -> CliResult<Value> {
    match action {
        SubtaskCommands::List { task_id } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let task = board
                .task(task_id)
                .ok_or(CliError::TaskNotFound { id: task_id })?;
            Ok(json!({
                "summary": task.subtask_summary(),
                "subtasks": task.subtasks,
            }))
        }

        SubtaskCommands::Toggle { task_id, subtask_id } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let task = board
                .task(task_id)
                .ok_or(CliError::TaskNotFound { id: task_id })?;
            let subtask = task
                .subtasks
                .iter()
                .find(|s| s.id == subtask_id)
                .ok_or(CliError::SubtaskNotFound { id: subtask_id })?;
            let flipped = !subtask.is_completed;

            store.toggle_subtask(task_id, subtask_id, flipped).await?;

            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let task = board
                .task(task_id)
                .ok_or(CliError::TaskNotFound { id: task_id })?;
            Ok(json!({
                "summary": task.subtask_summary(),
                "subtasks": task.subtasks,
            }))
        }
    }
}
