use crate::error::ActionResult;
use crate::patch;
use crate::store::BoardStore;

use kb_core::{
    BoardUpdate, Column, ColumnSpec, ColumnUpdate, ValidationError, validation,
};

use std::sync::Arc;

use log::warn;
use uuid::Uuid;

/// One row of the board edit form: an existing column keeps its id, an
/// added one has none yet.
#[derive(Debug, Clone)]
pub struct ColumnEdit {
    pub id: Option<Uuid>,
    pub name: String,
}

impl BoardStore {
    /// Creates a board with its initial columns and selects it via the
    /// reconciling refresh.
    pub async fn create_board(&mut self, name: &str, columns: &[ColumnSpec]) -> ActionResult {
        validation::require_non_blank("board name", name)?;
        if columns.is_empty() {
            return Err(ValidationError::NoColumns.into());
        }
        for column in columns {
            validation::require_non_blank("column name", &column.name)?;
        }
        validation::validate_column_count(columns.len())?;

        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.create_board(name, columns).await {
            warn!("Failed to create board: {err}");
            self.notifier().error("Failed to create board");
            return Err(err.into());
        }

        self.refresh_boards().await;
        self.notifier().success("Board created successfully");
        Ok(())
    }

    /// Applies the board edit form: rename, delete removed columns,
    /// update kept ones with their new position, create added ones.
    /// Each step is its own gateway call; a failure partway leaves the
    /// earlier writes committed and falls back to the refresh.
    pub async fn edit_board(&mut self, name: &str, columns: &[ColumnEdit]) -> ActionResult {
        validation::require_non_blank("board name", name)?;
        for column in columns {
            validation::require_non_blank("column name", &column.name)?;
        }
        validation::validate_column_count(columns.len())?;

        let Some(current) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let current = current.clone();

        let result = self.edit_board_inner(&current, name, columns).await;
        match result {
            Ok(patched_columns) => {
                let patched = patch::apply_board_edit(current, name, patched_columns);
                self.commit_current(patched);
                self.refresh_boards().await;
                self.notifier().success("Board updated successfully");
                Ok(())
            }
            Err(err) => {
                warn!("Failed to update board {}: {err}", current.id);
                self.notifier().error("Failed to update board");
                Err(err)
            }
        }
    }

    async fn edit_board_inner(
        &self,
        current: &kb_core::Board,
        name: &str,
        columns: &[ColumnEdit],
    ) -> ActionResult<Vec<Column>> {
        let gateway = Arc::clone(self.gateway());

        gateway
            .update_board(
                current.id,
                BoardUpdate {
                    name: Some(name.to_string()),
                },
            )
            .await?;

        // Columns missing from the form have been removed.
        for existing in &current.columns {
            let kept = columns.iter().any(|c| c.id == Some(existing.id));
            if !kept {
                gateway.delete_column(existing.id).await?;
            }
        }

        let mut patched_columns = Vec::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            match column.id {
                Some(id) => {
                    gateway
                        .update_column(
                            id,
                            ColumnUpdate {
                                name: Some(column.name.clone()),
                                position: Some(index as i32),
                            },
                        )
                        .await?;
                    // Kept columns hold on to their task lists.
                    let mut kept = current
                        .column(id)
                        .cloned()
                        .unwrap_or_else(|| Column::new(current.id, column.name.clone(), 0));
                    kept.name = column.name.clone();
                    kept.position = index as i32;
                    patched_columns.push(kept);
                }
                None => {
                    let created = gateway
                        .create_column(current.id, &column.name, index as i32)
                        .await?;
                    patched_columns.push(created);
                }
            }
        }

        Ok(patched_columns)
    }

    /// Deletes the selected board; selection falls to the first
    /// remaining board, or to none.
    pub async fn delete_board(&mut self) -> ActionResult {
        let Some(current) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let id = current.id;

        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.delete_board(id).await {
            warn!("Failed to delete board {id}: {err}");
            self.notifier().error("Failed to delete board");
            return Err(err.into());
        }

        self.forget_board(id);
        self.refresh_boards().await;
        self.notifier().success("Board deleted successfully");
        Ok(())
    }
}
