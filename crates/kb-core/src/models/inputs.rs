use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column requested as part of board creation; position is the index in
/// the supplied slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
}

impl ColumnSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskInput {
    pub title: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnUpdate {
    pub name: Option<String>,
    pub position: Option<i32>,
}

/// Partial task update. `column_id` triggers the separate
/// column-reassignment phase; `subtasks` triggers wholesale subtask
/// replacement. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub column_id: Option<Uuid>,
    pub subtasks: Option<Vec<SubtaskInput>>,
}
