use crate::Result;
use crate::error::DbError;

use kb_core::{Board, BoardUpdate};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct BoardRow {
    id: String,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl BoardRow {
    fn into_model(self) -> Result<Board> {
        Ok(Board {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("invalid UUID in board.id: {e}")))?,
            name: self.name,
            columns: Vec::new(),
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in board.created_at"))?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in board.updated_at"))?,
        })
    }
}

pub struct BoardRepository {
    pool: SqlitePool,
}

impl BoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, board: &Board) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO kb_boards (id, name, created_at, updated_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(board.id.to_string())
        .bind(&board.name)
        .bind(board.created_at.timestamp())
        .bind(board.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All board rows, columns left empty for the gateway to attach.
    pub async fn find_all(&self) -> Result<Vec<Board>> {
        let rows: Vec<BoardRow> = sqlx::query_as(
            r#"
              SELECT id, name, created_at, updated_at
              FROM kb_boards
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BoardRow::into_model).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Board>> {
        let row: Option<BoardRow> = sqlx::query_as(
            r#"
              SELECT id, name, created_at, updated_at
              FROM kb_boards
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BoardRow::into_model).transpose()
    }

    pub async fn update(&self, id: Uuid, updates: &BoardUpdate) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE kb_boards
              SET name = COALESCE(?, name), updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(updates.name.as_deref())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Physical delete; FK cascade removes the board's columns, tasks and
    /// subtasks.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM kb_boards WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
