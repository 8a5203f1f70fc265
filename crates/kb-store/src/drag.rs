//! Column reassignment by drag-and-drop. The gesture library owns pixel
//! tracking; this is the state the core keeps for a single drag and the
//! drop handler the UI calls back into.

use crate::error::ActionResult;
use crate::patch;
use crate::store::BoardStore;

use kb_core::{TaskUpdate, ValidationError};

use log::{debug, warn};
use uuid::Uuid;

/// Payload carried by a dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragItem {
    pub id: Uuid,
    pub index: usize,
    pub column_id: Uuid,
}

/// One gesture: idle, then dragging, then back to idle on drop or on a
/// release outside any column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragItem),
}

impl DragState {
    pub fn begin(&mut self, item: DragItem) {
        *self = DragState::Dragging(item);
    }

    /// Release over a column: yields the payload and resets.
    pub fn drop_payload(&mut self) -> Option<DragItem> {
        match std::mem::take(self) {
            DragState::Dragging(item) => Some(item),
            DragState::Idle => None,
        }
    }

    /// Release outside any column: the gesture simply ends.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

impl BoardStore {
    /// Drop handler. Dropping a task onto its own column is a no-op with
    /// no gateway call. Otherwise the task's `column_id` and `status`
    /// move together to the target column; the local splice happens only
    /// after the gateway call resolves, and a failure falls back to a
    /// full refresh instead.
    pub async fn drop_task(&mut self, item: DragItem, target_column_id: Uuid) -> ActionResult {
        if item.column_id == target_column_id {
            debug!("Task {} dropped on its own column, ignoring", item.id);
            return Ok(());
        }

        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();
        let target = board
            .column(target_column_id)
            .ok_or(ValidationError::UnknownColumn {
                id: target_column_id,
            })?;
        let status = target.name.clone();

        let updates = TaskUpdate {
            column_id: Some(target_column_id),
            status: Some(status.clone()),
            ..TaskUpdate::default()
        };
        let gateway = std::sync::Arc::clone(self.gateway());
        if let Err(err) = gateway.update_task(item.id, updates).await {
            warn!("Failed to move task {}: {err}", item.id);
            self.notifier().error("Failed to move task");
            self.refresh_boards().await;
            return Err(err.into());
        }

        let patched = patch::move_task(board, item.id, target_column_id, &status);
        self.commit_current(patched);
        self.notifier().success("Task moved successfully");
        Ok(())
    }
}
