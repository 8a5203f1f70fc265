use crate::error::ActionResult;
use crate::patch;
use crate::store::BoardStore;

use kb_core::ValidationError;

use std::sync::Arc;

use log::warn;
use uuid::Uuid;

impl BoardStore {
    /// Checklist checkbox toggle; the one standalone subtask mutation.
    pub async fn toggle_subtask(
        &mut self,
        task_id: Uuid,
        subtask_id: Uuid,
        is_completed: bool,
    ) -> ActionResult {
        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();

        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.update_subtask(subtask_id, is_completed).await {
            warn!("Failed to update subtask {subtask_id}: {err}");
            self.notifier().error("Failed to update subtask");
            return Err(err.into());
        }

        let patched = patch::set_subtask_completed(board, task_id, subtask_id, is_completed);
        self.commit_current(patched);
        self.refresh_boards().await;
        self.notifier().success("Subtask updated successfully");
        Ok(())
    }
}
