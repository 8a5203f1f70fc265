use crate::models::subtask::Subtask;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work. `status` and `column_id` are a denormalized pair that
/// must refer to the same column; every mutation keeps them in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub column_id: Uuid,

    pub title: String,
    pub description: String,
    pub status: String,
    pub position: i32,
    pub subtasks: Vec<Subtask>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: Uuid, title: String, description: String, status: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            column_id,
            title,
            description,
            status,
            position: 0,
            subtasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.is_completed).count()
    }

    /// Card caption, e.g. "1 of 2 subtasks".
    pub fn subtask_summary(&self) -> String {
        format!(
            "{} of {} subtasks",
            self.completed_subtasks(),
            self.subtasks.len()
        )
    }
}
