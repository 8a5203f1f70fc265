use crate::board_commands::current_board_json;
use crate::error::{CliError, CliResult};

use kb_core::SubtaskInput;
use kb_store::{BoardStore, DragItem};

use clap::Subcommand;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Subcommand)]
pub(crate) enum TaskCommands {
    /// Create a task on the selected board
    Create {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Target column; defaults to the board's first column
        #[arg(long)]
        status: Option<String>,

        /// Subtask title; repeat for each subtask, in order
        #[arg(long = "subtask")]
        subtasks: Vec<String>,
    },

    /// Edit a task's fields; omitted flags keep the stored values
    Edit {
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Move a task to another column, as a drag-and-drop would
    Move {
        id: Uuid,

        /// Destination column name
        #[arg(long)]
        to: String,
    },

    /// Change a task's status (and with it the owning column)
    Status { id: Uuid, status: String },

    /// Delete a task
    Delete { id: Uuid },
}

pub(crate) async fn run(store: &mut BoardStore, action: TaskCommands) -> CliResult<Value> {
    match action {
        TaskCommands::Create {
            title,
            description,
            status,
            subtasks,
        } => {
            let status = match status {
                Some(status) => status,
                None => {
                    let board = store.current_board().ok_or(CliError::NoBoard)?;
                    let first = board.columns.first().ok_or(CliError::NoBoard)?;
                    first.name.clone()
                }
            };
            let subtasks: Vec<SubtaskInput> = subtasks
                .into_iter()
                .map(|title| SubtaskInput {
                    title,
                    is_completed: false,
                })
                .collect();
            store
                .create_task(&title, &description, &status, subtasks)
                .await?;
            current_board_json(store)
        }

        TaskCommands::Edit {
            id,
            title,
            description,
            status,
        } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let task = board.task(id).ok_or(CliError::TaskNotFound { id })?;

            let title = title.unwrap_or_else(|| task.title.clone());
            let description = description.unwrap_or_else(|| task.description.clone());
            let status = status.unwrap_or_else(|| task.status.clone());
            let subtasks: Vec<SubtaskInput> = task
                .subtasks
                .iter()
                .map(|s| SubtaskInput {
                    title: s.title.clone(),
                    is_completed: s.is_completed,
                })
                .collect();

            store
                .edit_task(id, &title, &description, &status, subtasks)
                .await?;
            current_board_json(store)
        }

        TaskCommands::Move { id, to } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let task = board.task(id).ok_or(CliError::TaskNotFound { id })?;
            let target = board
                .column_by_name(&to)
                .ok_or(CliError::ColumnNotFound { name: to })?;

            let index = board
                .column(task.column_id)
                .map(|c| c.tasks.iter().position(|t| t.id == id).unwrap_or(0))
                .unwrap_or(0);
            let item = DragItem {
                id,
                index,
                column_id: task.column_id,
            };
            let target_id = target.id;

            store.drop_task(item, target_id).await?;
            current_board_json(store)
        }

        TaskCommands::Status { id, status } => {
            store.change_task_status(id, &status).await?;
            current_board_json(store)
        }

        TaskCommands::Delete { id } => {
            store.delete_task(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}
