use crate::models::task::Task;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named, ordered bucket of tasks within a board. A column's name doubles
/// as the `status` value of every task it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,

    pub name: String,
    pub position: i32,
    pub tasks: Vec<Task>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: Uuid, name: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            position,
            tasks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Highest task position in this column, None when empty.
    pub fn max_task_position(&self) -> Option<i32> {
        self.tasks.iter().map(|t| t.position).max()
    }
}
