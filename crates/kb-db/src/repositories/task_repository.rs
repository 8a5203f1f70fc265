use crate::Result;
use crate::error::DbError;

use kb_core::Task;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    column_id: String,
    title: String,
    description: String,
    status: String,
    position: i64,
    created_at: i64,
    updated_at: i64,
}

impl TaskRow {
    fn into_model(self) -> Result<Task> {
        Ok(Task {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("invalid UUID in task.id: {e}")))?,
            column_id: Uuid::parse_str(&self.column_id)
                .map_err(|e| DbError::decode(format!("invalid UUID in task.column_id: {e}")))?,
            title: self.title,
            description: self.description,
            status: self.status,
            position: self.position as i32,
            subtasks: Vec::new(),
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in task.created_at"))?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in task.updated_at"))?,
        })
    }
}

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO kb_tasks (
                  id, column_id, title, description, status, position,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(task.id.to_string())
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(task.position)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_column(&self, column_id: Uuid) -> Result<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
              SELECT id, column_id, title, description, status, position,
                     created_at, updated_at
              FROM kb_tasks
              WHERE column_id = ?
              ORDER BY position ASC
              "#,
        )
        .bind(column_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TaskRow::into_model).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
              SELECT id, column_id, title, description, status, position,
                     created_at, updated_at
              FROM kb_tasks
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_model).transpose()
    }

    /// Highest position in the column. `MAX` over zero rows yields NULL,
    /// which comes back as None rather than an error; the caller treats
    /// that as "positions start at 0".
    pub async fn max_position(&self, column_id: Uuid) -> Result<Option<i32>> {
        let max: Option<i64> = sqlx::query_scalar(
            r#"
              SELECT MAX(position)
              FROM kb_tasks
              WHERE column_id = ?
              "#,
        )
        .bind(column_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(max.map(|m| m as i32))
    }

    /// Column-reassignment phase of a task update: a single statement
    /// writing the new owning column and position together.
    pub async fn set_column(&self, id: Uuid, column_id: Uuid, position: i32) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE kb_tasks
              SET column_id = ?, position = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(column_id.to_string())
        .bind(position)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Field-update phase: always runs, absent fields keep their stored
    /// values.
    pub async fn update_fields(
        &self,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE kb_tasks
              SET title = COALESCE(?, title),
                  description = COALESCE(?, description),
                  status = COALESCE(?, status),
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_position(&self, id: Uuid, position: i32) -> Result<()> {
        sqlx::query("UPDATE kb_tasks SET position = ? WHERE id = ?")
            .bind(position)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Physical delete; FK cascade removes the task's subtasks.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM kb_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
