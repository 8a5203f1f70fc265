use crate::Result;
use crate::error::DbError;

use kb_core::Subtask;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct SubtaskRow {
    id: String,
    task_id: String,
    title: String,
    is_completed: bool,
    created_at: i64,
}

impl SubtaskRow {
    fn into_model(self) -> Result<Subtask> {
        Ok(Subtask {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("invalid UUID in subtask.id: {e}")))?,
            task_id: Uuid::parse_str(&self.task_id)
                .map_err(|e| DbError::decode(format!("invalid UUID in subtask.task_id: {e}")))?,
            title: self.title,
            is_completed: self.is_completed,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in subtask.created_at"))?,
        })
    }
}

pub struct SubtaskRepository {
    pool: SqlitePool,
}

impl SubtaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, subtask: &Subtask) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO kb_subtasks (id, task_id, title, is_completed, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(subtask.id.to_string())
        .bind(subtask.task_id.to_string())
        .bind(&subtask.title)
        .bind(subtask.is_completed)
        .bind(subtask.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<Subtask>> {
        let rows: Vec<SubtaskRow> = sqlx::query_as(
            r#"
              SELECT id, task_id, title, is_completed, created_at
              FROM kb_subtasks
              WHERE task_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(task_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SubtaskRow::into_model).collect()
    }

    pub async fn update_completed(&self, id: Uuid, is_completed: bool) -> Result<()> {
        sqlx::query("UPDATE kb_subtasks SET is_completed = ? WHERE id = ?")
            .bind(is_completed)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Wholesale removal ahead of a replacement insert.
    pub async fn delete_by_task(&self, task_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM kb_subtasks WHERE task_id = ?")
            .bind(task_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
