use crate::Result;
use crate::error::DbError;

use kb_core::{Column, ColumnUpdate};

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ColumnRow {
    id: String,
    board_id: String,
    name: String,
    position: i64,
    created_at: i64,
}

impl ColumnRow {
    fn into_model(self) -> Result<Column> {
        Ok(Column {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("invalid UUID in column.id: {e}")))?,
            board_id: Uuid::parse_str(&self.board_id)
                .map_err(|e| DbError::decode(format!("invalid UUID in column.board_id: {e}")))?,
            name: self.name,
            position: self.position as i32,
            tasks: Vec::new(),
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in column.created_at"))?,
        })
    }
}

pub struct ColumnRepository {
    pool: SqlitePool,
}

impl ColumnRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, column: &Column) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO kb_columns (id, board_id, name, position, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.name)
        .bind(column.position)
        .bind(column.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_board(&self, board_id: Uuid) -> Result<Vec<Column>> {
        let rows: Vec<ColumnRow> = sqlx::query_as(
            r#"
              SELECT id, board_id, name, position, created_at
              FROM kb_columns
              WHERE board_id = ?
              ORDER BY position ASC
              "#,
        )
        .bind(board_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ColumnRow::into_model).collect()
    }

    pub async fn update(&self, id: Uuid, updates: &ColumnUpdate) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE kb_columns
              SET name = COALESCE(?, name), position = COALESCE(?, position)
              WHERE id = ?
              "#,
        )
        .bind(updates.name.as_deref())
        .bind(updates.position)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_position(&self, id: Uuid, position: i32) -> Result<()> {
        sqlx::query("UPDATE kb_columns SET position = ? WHERE id = ?")
            .bind(position)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Physical delete; FK cascade removes the column's tasks.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM kb_columns WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
