use crate::repositories::board_repository::BoardRepository;
use crate::repositories::column_repository::ColumnRepository;
use crate::repositories::subtask_repository::SubtaskRepository;
use crate::repositories::task_repository::TaskRepository;

use kb_core::{
    Board, BoardGateway, BoardUpdate, Column, ColumnSpec, ColumnUpdate, CreateTaskInput,
    StoreError, StoreResult, Subtask, SubtaskInput, Task, TaskUpdate,
};

use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// SQLite-backed persistence gateway. Stateless: every call goes straight
/// to the database; the in-memory board tree lives in the store, not here.
pub struct SqliteGateway {
    boards: BoardRepository,
    columns: ColumnRepository,
    tasks: TaskRepository,
    subtasks: SubtaskRepository,
}

impl SqliteGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            boards: BoardRepository::new(pool.clone()),
            columns: ColumnRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            subtasks: SubtaskRepository::new(pool),
        }
    }

    /// Attaches columns, tasks and subtasks to a bare board row, columns
    /// and tasks in position order.
    async fn assemble(&self, mut board: Board) -> StoreResult<Board> {
        let mut columns = self.columns.find_by_board(board.id).await?;
        for column in &mut columns {
            let mut tasks = self.tasks.find_by_column(column.id).await?;
            for task in &mut tasks {
                task.subtasks = self.subtasks.find_by_task(task.id).await?;
            }
            column.tasks = tasks;
        }
        board.columns = columns;
        Ok(board)
    }

    async fn next_task_position(&self, column_id: Uuid) -> StoreResult<i32> {
        Ok(self.tasks.max_position(column_id).await?.map_or(0, |m| m + 1))
    }
}

#[async_trait]
impl BoardGateway for SqliteGateway {
    async fn get_boards(&self) -> StoreResult<Vec<Board>> {
        let rows = self.boards.find_all().await?;
        let mut boards = Vec::with_capacity(rows.len());
        for row in rows {
            boards.push(self.assemble(row).await?);
        }
        Ok(boards)
    }

    async fn get_board(&self, id: Uuid) -> StoreResult<Board> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("board", id))?;
        self.assemble(board).await
    }

    async fn create_board(&self, name: &str, columns: &[ColumnSpec]) -> StoreResult<Board> {
        let board = Board::new(name.to_string());
        self.boards.create(&board).await?;

        // Column inserts follow the board row; a failure partway leaves
        // the earlier rows committed (no rollback).
        for (index, spec) in columns.iter().enumerate() {
            let column = Column::new(board.id, spec.name.clone(), index as i32);
            self.columns.create(&column).await?;
        }

        debug!("Created board {} with {} columns", board.id, columns.len());
        self.assemble(board).await
    }

    async fn update_board(&self, id: Uuid, updates: BoardUpdate) -> StoreResult<()> {
        self.boards.update(id, &updates).await?;
        Ok(())
    }

    async fn delete_board(&self, id: Uuid) -> StoreResult<()> {
        self.boards.delete(id).await?;
        Ok(())
    }

    async fn create_column(
        &self,
        board_id: Uuid,
        name: &str,
        position: i32,
    ) -> StoreResult<Column> {
        let column = Column::new(board_id, name.to_string(), position);
        self.columns.create(&column).await?;
        Ok(column)
    }

    async fn update_column(&self, id: Uuid, updates: ColumnUpdate) -> StoreResult<()> {
        self.columns.update(id, &updates).await?;
        Ok(())
    }

    async fn delete_column(&self, id: Uuid) -> StoreResult<()> {
        self.columns.delete(id).await?;
        Ok(())
    }

    async fn create_task(&self, column_id: Uuid, input: &CreateTaskInput) -> StoreResult<Task> {
        let mut task = Task::new(
            column_id,
            input.title.clone(),
            input.description.clone(),
            input.status.clone(),
        );
        task.position = self.next_task_position(column_id).await?;
        self.tasks.create(&task).await?;
        Ok(task)
    }

    async fn update_task(&self, task_id: Uuid, updates: TaskUpdate) -> StoreResult<()> {
        // Phase 1: column reassignment, its own write with a freshly
        // computed destination position. A failure here aborts before the
        // field update runs.
        if let Some(column_id) = updates.column_id {
            let position = self.next_task_position(column_id).await?;
            self.tasks.set_column(task_id, column_id, position).await?;
        }

        // Phase 2: the field update always runs.
        self.tasks
            .update_fields(
                task_id,
                updates.title.as_deref(),
                updates.description.as_deref(),
                updates.status.as_deref(),
            )
            .await?;

        // Phase 3: wholesale subtask replacement. The task row is already
        // committed; a failure here leaves a partial mutation for the next
        // refresh to surface.
        if let Some(inputs) = updates.subtasks {
            self.subtasks.delete_by_task(task_id).await?;
            for input in &inputs {
                let mut subtask = Subtask::new(task_id, input.title.clone());
                subtask.is_completed = input.is_completed;
                self.subtasks.create(&subtask).await?;
            }
        }

        Ok(())
    }

    async fn delete_task(&self, task_id: Uuid) -> StoreResult<()> {
        self.tasks.delete(task_id).await?;
        Ok(())
    }

    async fn create_subtasks(
        &self,
        task_id: Uuid,
        inputs: &[SubtaskInput],
    ) -> StoreResult<Vec<Subtask>> {
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let mut subtask = Subtask::new(task_id, input.title.clone());
            subtask.is_completed = input.is_completed;
            self.subtasks.create(&subtask).await?;
            created.push(subtask);
        }
        Ok(created)
    }

    async fn update_subtask(&self, id: Uuid, is_completed: bool) -> StoreResult<()> {
        self.subtasks.update_completed(id, is_completed).await?;
        Ok(())
    }

    async fn move_task(&self, task_id: Uuid, column_id: Uuid, position: i32) -> StoreResult<()> {
        self.tasks.set_column(task_id, column_id, position).await?;
        Ok(())
    }

    async fn reorder_tasks(&self, ordered_ids: &[Uuid]) -> StoreResult<()> {
        for (index, id) in ordered_ids.iter().enumerate() {
            self.tasks.set_position(*id, index as i32).await?;
        }
        Ok(())
    }

    async fn reorder_columns(&self, ordered_ids: &[Uuid]) -> StoreResult<()> {
        for (index, id) in ordered_ids.iter().enumerate() {
            self.columns.set_position(*id, index as i32).await?;
        }
        Ok(())
    }
}
