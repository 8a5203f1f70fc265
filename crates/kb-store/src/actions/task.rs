use crate::error::ActionResult;
use crate::patch;
use crate::store::BoardStore;

use kb_core::{CreateTaskInput, SubtaskInput, TaskUpdate, ValidationError, validation};

use std::sync::Arc;

use log::warn;
use uuid::Uuid;

impl BoardStore {
    /// Adds a task to the column whose name matches `status`, with its
    /// checklist. The subtask inserts follow the task row; a failure
    /// there leaves the committed task for the next refresh to surface.
    pub async fn create_task(
        &mut self,
        title: &str,
        description: &str,
        status: &str,
        subtasks: Vec<SubtaskInput>,
    ) -> ActionResult {
        validation::require_non_blank("title", title)?;
        for subtask in &subtasks {
            validation::require_non_blank("subtask title", &subtask.title)?;
        }

        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();
        let target = board
            .column_by_name(status)
            .ok_or_else(|| ValidationError::UnknownStatus {
                status: status.to_string(),
            })?;
        let target_id = target.id;

        let gateway = Arc::clone(self.gateway());
        let input = CreateTaskInput {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        };

        let mut task = match gateway.create_task(target_id, &input).await {
            Ok(task) => task,
            Err(err) => {
                warn!("Failed to create task: {err}");
                self.notifier().error("Failed to create task");
                return Err(err.into());
            }
        };

        if !subtasks.is_empty() {
            match gateway.create_subtasks(task.id, &subtasks).await {
                Ok(created) => task.subtasks = created,
                Err(err) => {
                    warn!("Failed to create subtasks for task {}: {err}", task.id);
                    self.notifier().error("Failed to create task");
                    return Err(err.into());
                }
            }
        }

        let patched = patch::append_task(board, target_id, task);
        self.commit_current(patched);
        self.refresh_boards().await;
        self.notifier().success("Task created successfully");
        Ok(())
    }

    /// Applies the edit form: new title, description, status (and with
    /// it the owning column) and a wholesale subtask replacement.
    pub async fn edit_task(
        &mut self,
        task_id: Uuid,
        title: &str,
        description: &str,
        status: &str,
        subtasks: Vec<SubtaskInput>,
    ) -> ActionResult {
        validation::require_non_blank("title", title)?;
        for subtask in &subtasks {
            validation::require_non_blank("subtask title", &subtask.title)?;
        }

        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();
        let target = board
            .column_by_name(status)
            .ok_or_else(|| ValidationError::UnknownStatus {
                status: status.to_string(),
            })?;
        let target_id = target.id;

        let updates = TaskUpdate {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            status: Some(status.to_string()),
            column_id: Some(target_id),
            subtasks: Some(subtasks.clone()),
        };
        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.update_task(task_id, updates).await {
            warn!("Failed to update task {task_id}: {err}");
            self.notifier().error("Failed to update task");
            return Err(err.into());
        }

        let patched =
            patch::apply_task_edit(board, task_id, target_id, title, description, status, &subtasks);
        self.commit_current(patched);
        self.refresh_boards().await;
        self.notifier().success("Task updated successfully");
        Ok(())
    }

    /// Status dropdown change: the task moves to the column named by the
    /// new status, `status` and `column_id` rewritten as a pair.
    pub async fn change_task_status(&mut self, task_id: Uuid, new_status: &str) -> ActionResult {
        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();
        let target =
            board
                .column_by_name(new_status)
                .ok_or_else(|| ValidationError::UnknownStatus {
                    status: new_status.to_string(),
                })?;
        let target_id = target.id;

        let updates = TaskUpdate {
            column_id: Some(target_id),
            status: Some(new_status.to_string()),
            ..TaskUpdate::default()
        };
        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.update_task(task_id, updates).await {
            warn!("Failed to update status of task {task_id}: {err}");
            self.notifier().error("Failed to update task status");
            return Err(err.into());
        }

        let patched = patch::move_task(board, task_id, target_id, new_status);
        self.commit_current(patched);
        self.refresh_boards().await;
        self.notifier().success("Task status updated successfully");
        Ok(())
    }

    pub async fn delete_task(&mut self, task_id: Uuid) -> ActionResult {
        let Some(board) = self.current_board() else {
            return Err(ValidationError::NoCurrentBoard.into());
        };
        let board = board.clone();

        let gateway = Arc::clone(self.gateway());
        if let Err(err) = gateway.delete_task(task_id).await {
            warn!("Failed to delete task {task_id}: {err}");
            self.notifier().error("Failed to delete task");
            return Err(err.into());
        }

        let patched = patch::remove_task(board, task_id);
        self.commit_current(patched);
        self.refresh_boards().await;
        self.notifier().success("Task deleted successfully");
        Ok(())
    }
}
