use crate::error::{CliError, CliResult};

use kb_core::ColumnSpec;
use kb_store::{BoardStore, ColumnEdit};

use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub(crate) enum BoardCommands {
    /// List all boards
    List,

    /// Show the selected board with its columns and tasks
    Show,

    /// Create a board with its initial columns
    Create {
        name: String,

        /// Column name; repeat for each column, in order
        #[arg(long = "column", required = true)]
        columns: Vec<String>,
    },

    /// Rename the selected board
    Rename { name: String },

    /// Append a column to the selected board
    AddColumn { name: String },

    /// Remove a column (and its tasks) from the selected board
    RemoveColumn { name: String },

    /// Delete the selected board
    Delete,
}

pub(crate) async fn run(store: &mut BoardStore, action: BoardCommands) -> CliResult<Value> {
    match action {
        BoardCommands::List => {
            let boards: Vec<Value> = store
                .boards()
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id,
                        "name": b.name,
                        "columns": b.columns.len(),
                    })
                })
                .collect();
            Ok(Value::Array(boards))
        }

        BoardCommands::Show => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            Ok(serde_json::to_value(board)?)
        }

        BoardCommands::Create { name, columns } => {
            let specs: Vec<ColumnSpec> = columns.into_iter().map(ColumnSpec::new).collect();
            store.create_board(&name, &specs).await?;
            current_board_json(store)
        }

        BoardCommands::Rename { name } => {
            let edits = kept_columns(store)?;
            store.edit_board(&name, &edits).await?;
            current_board_json(store)
        }

        BoardCommands::AddColumn { name } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let board_name = board.name.clone();
            let mut edits = kept_columns(store)?;
            edits.push(ColumnEdit { id: None, name });
            store.edit_board(&board_name, &edits).await?;
            current_board_json(store)
        }

        BoardCommands::RemoveColumn { name } => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let board_name = board.name.clone();
            if board.column_by_name(&name).is_none() {
                return Err(CliError::ColumnNotFound { name });
            }
            let mut edits = kept_columns(store)?;
            edits.retain(|c| c.name != name);
            store.edit_board(&board_name, &edits).await?;
            current_board_json(store)
        }

        BoardCommands::Delete => {
            let board = store.current_board().ok_or(CliError::NoBoard)?;
            let id = board.id;
            store.delete_board().await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

/// The selected board's columns as unchanged edit rows.
fn kept_columns(store: &BoardStore) -> CliResult<Vec<ColumnEdit>> {
    let board = store.current_board().ok_or(CliError::NoBoard)?;
    Ok(board
        .columns
        .iter()
        .map(|c| ColumnEdit {
            id: Some(c.id),
            name: c.name.clone(),
        })
        .collect())
}

pub(crate) fn current_board_json(store: &BoardStore) -> CliResult<Value> {
    let board = store.current_board().ok_or(CliError::NoBoard)?;
    Ok(serde_json::to_value(board)?)
}
