use crate::error::StoreResult;
use crate::models::board::Board;
use crate::models::column::Column;
use crate::models::inputs::{
    BoardUpdate, ColumnSpec, ColumnUpdate, CreateTaskInput, SubtaskInput, TaskUpdate,
};
use crate::models::subtask::Subtask;
use crate::models::task::Task;

use async_trait::async_trait;
use uuid::Uuid;

/// Typed CRUD boundary to the backing store. The gateway is stateless; it
/// owns no in-memory tree. Constructed explicitly and injected so tests
/// can substitute an in-memory implementation.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// All boards with nested columns, tasks and subtasks, columns and
    /// tasks sorted by position.
    async fn get_boards(&self) -> StoreResult<Vec<Board>>;

    /// Single board in the same nested shape.
    async fn get_board(&self, id: Uuid) -> StoreResult<Board>;

    /// Inserts the board row, then one column row per spec with
    /// `position` = slice index. No rollback of partially inserted
    /// columns when a later insert fails.
    async fn create_board(&self, name: &str, columns: &[ColumnSpec]) -> StoreResult<Board>;

    async fn update_board(&self, id: Uuid, updates: BoardUpdate) -> StoreResult<()>;

    /// Physical delete; child rows go with it via FK cascade.
    async fn delete_board(&self, id: Uuid) -> StoreResult<()>;

    async fn create_column(&self, board_id: Uuid, name: &str, position: i32)
    -> StoreResult<Column>;

    async fn update_column(&self, id: Uuid, updates: ColumnUpdate) -> StoreResult<()>;

    async fn delete_column(&self, id: Uuid) -> StoreResult<()>;

    /// Inserts with position = (max existing position in the column) + 1,
    /// starting at 0 for an empty column.
    async fn create_task(&self, column_id: Uuid, input: &CreateTaskInput) -> StoreResult<Task>;

    /// Two-phase update. A `column_id` in `updates` first recomputes the
    /// destination's next position and writes `column_id` + `position` as
    /// a separate statement; the field update then runs unconditionally;
    /// a `subtasks` value replaces the task's subtask rows wholesale.
    /// Phases fail independently with no transactional guarantee.
    async fn update_task(&self, task_id: Uuid, updates: TaskUpdate) -> StoreResult<()>;

    async fn delete_task(&self, task_id: Uuid) -> StoreResult<()>;

    async fn create_subtasks(
        &self,
        task_id: Uuid,
        inputs: &[SubtaskInput],
    ) -> StoreResult<Vec<Subtask>>;

    async fn update_subtask(&self, id: Uuid, is_completed: bool) -> StoreResult<()>;

    /// Direct positional move; in the contract but not wired to any
    /// store action.
    async fn move_task(&self, task_id: Uuid, column_id: Uuid, position: i32) -> StoreResult<()>;

    /// Rewrites positions to match the given id order.
    async fn reorder_tasks(&self, ordered_ids: &[Uuid]) -> StoreResult<()>;

    /// Rewrites positions to match the given id order.
    async fn reorder_columns(&self, ordered_ids: &[Uuid]) -> StoreResult<()>;
}
