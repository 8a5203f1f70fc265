use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Checklist item belonging to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: Uuid,
    pub task_id: Uuid,

    pub title: String,
    pub is_completed: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Subtask {
    pub fn new(task_id: Uuid, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            title,
            is_completed: false,
            created_at: Utc::now(),
        }
    }
}
