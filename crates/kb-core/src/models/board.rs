use crate::models::column::Column;
use crate::models::task::Task;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level container of an ordered set of columns. Column order is
/// positional within `columns`; each column also carries its own
/// `position` sort key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub columns: Vec<Column>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            columns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn column(&self, id: Uuid) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_mut(&mut self, id: Uuid) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    /// Columns double as status values; lookup by name resolves a task's
    /// `status` string to its owning column.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id == id)
    }

    /// Number of columns currently holding a task with this id. The board
    /// invariant keeps this at exactly one for every known task.
    pub fn columns_holding(&self, task_id: Uuid) -> usize {
        self.columns
            .iter()
            .filter(|c| c.tasks.iter().any(|t| t.id == task_id))
            .count()
    }
}
