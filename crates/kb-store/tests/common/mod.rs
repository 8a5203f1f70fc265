#![allow(dead_code)]

use kb_store::Notifier;

use kb_core::{
    Board, BoardGateway, BoardUpdate, Column, ColumnSpec, ColumnUpdate, CreateTaskInput,
    StoreError, StoreResult, Subtask, SubtaskInput, Task, TaskUpdate,
};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

/// In-memory stand-in for the SQLite gateway. Keeps the nested board
/// tree behind a mutex, records every operation name so tests can assert
/// that no call was made, and fails a named operation on demand.
#[derive(Default)]
pub struct MemoryGateway {
    boards: Mutex<Vec<Board>>,
    calls: Mutex<Vec<String>>,
    fail_op: Mutex<Option<&'static str>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every future call to the named operation fails with a backend
    /// error.
    pub fn fail_on(&self, op: &'static str) {
        *self.fail_op.lock().unwrap() = Some(op);
    }

    pub fn heal(&self) {
        *self.fail_op.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == op).count()
    }

    pub fn snapshot(&self) -> Vec<Board> {
        self.boards.lock().unwrap().clone()
    }

    fn enter(&self, op: &'static str) -> StoreResult<()> {
        self.calls.lock().unwrap().push(op.to_string());
        if *self.fail_op.lock().unwrap() == Some(op) {
            return Err(StoreError::backend("injected failure"));
        }
        Ok(())
    }

    fn with_column<R>(
        boards: &mut [Board],
        column_id: Uuid,
        f: impl FnOnce(&mut Column) -> R,
    ) -> StoreResult<R> {
        boards
            .iter_mut()
            .find_map(|b| b.column_mut(column_id))
            .map(f)
            .ok_or_else(|| StoreError::backend(format!("no such column {column_id}")))
    }

    fn take_task(boards: &mut [Board], task_id: Uuid) -> Option<Task> {
        for board in boards.iter_mut() {
            for column in &mut board.columns {
                if let Some(index) = column.tasks.iter().position(|t| t.id == task_id) {
                    return Some(column.tasks.remove(index));
                }
            }
        }
        None
    }

    fn next_position(boards: &mut [Board], column_id: Uuid) -> StoreResult<i32> {
        Self::with_column(boards, column_id, |c| {
            c.max_task_position().map_or(0, |m| m + 1)
        })
    }
}

#[async_trait]
impl BoardGateway for MemoryGateway {
    async fn get_boards(&self) -> StoreResult<Vec<Board>> {
        self.enter("get_boards")?;
        Ok(self.boards.lock().unwrap().clone())
    }

    async fn get_board(&self, id: Uuid) -> StoreResult<Board> {
        self.enter("get_board")?;
        self.boards
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("board", id))
    }

    async fn create_board(&self, name: &str, columns: &[ColumnSpec]) -> StoreResult<Board> {
        self.enter("create_board")?;
        let mut board = Board::new(name.to_string());
        for (index, spec) in columns.iter().enumerate() {
            board
                .columns
                .push(Column::new(board.id, spec.name.clone(), index as i32));
        }
        self.boards.lock().unwrap().push(board.clone());
        Ok(board)
    }

    async fn update_board(&self, id: Uuid, updates: BoardUpdate) -> StoreResult<()> {
        self.enter("update_board")?;
        let mut boards = self.boards.lock().unwrap();
        let board = boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found("board", id))?;
        if let Some(name) = updates.name {
            board.name = name;
        }
        Ok(())
    }

    async fn delete_board(&self, id: Uuid) -> StoreResult<()> {
        self.enter("delete_board")?;
        self.boards.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn create_column(
        &self,
        board_id: Uuid,
        name: &str,
        position: i32,
    ) -> StoreResult<Column> {
        self.enter("create_column")?;
        let column = Column::new(board_id, name.to_string(), position);
        let mut boards = self.boards.lock().unwrap();
        let board = boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| StoreError::not_found("board", board_id))?;
        board.columns.push(column.clone());
        board.columns.sort_by_key(|c| c.position);
        Ok(column)
    }

    async fn update_column(&self, id: Uuid, updates: ColumnUpdate) -> StoreResult<()> {
        self.enter("update_column")?;
        let mut boards = self.boards.lock().unwrap();
        Self::with_column(&mut boards, id, |column| {
            if let Some(name) = updates.name {
                column.name = name;
            }
            if let Some(position) = updates.position {
                column.position = position;
            }
        })?;
        for board in boards.iter_mut() {
            board.columns.sort_by_key(|c| c.position);
        }
        Ok(())
    }

    async fn delete_column(&self, id: Uuid) -> StoreResult<()> {
        self.enter("delete_column")?;
        for board in self.boards.lock().unwrap().iter_mut() {
            board.columns.retain(|c| c.id != id);
        }
        Ok(())
    }

    async fn create_task(&self, column_id: Uuid, input: &CreateTaskInput) -> StoreResult<Task> {
        self.enter("create_task")?;
        let mut boards = self.boards.lock().unwrap();
        let position = Self::next_position(&mut boards, column_id)?;
        let mut task = Task::new(
            column_id,
            input.title.clone(),
            input.description.clone(),
            input.status.clone(),
        );
        task.position = position;
        let created = task.clone();
        Self::with_column(&mut boards, column_id, |c| c.tasks.push(task))?;
        Ok(created)
    }

    async fn update_task(&self, task_id: Uuid, updates: TaskUpdate) -> StoreResult<()> {
        self.enter("update_task")?;
        let mut boards = self.boards.lock().unwrap();

        if let Some(column_id) = updates.column_id {
            let position = Self::next_position(&mut boards, column_id)?;
            let mut task = Self::take_task(&mut boards, task_id)
                .ok_or_else(|| StoreError::not_found("task", task_id))?;
            task.column_id = column_id;
            task.position = position;
            Self::with_column(&mut boards, column_id, |c| c.tasks.push(task))?;
        }

        for board in boards.iter_mut() {
            for column in &mut board.columns {
                for task in &mut column.tasks {
                    if task.id != task_id {
                        continue;
                    }
                    if let Some(title) = &updates.title {
                        task.title = title.clone();
                    }
                    if let Some(description) = &updates.description {
                        task.description = description.clone();
                    }
                    if let Some(status) = &updates.status {
                        task.status = status.clone();
                    }
                    if let Some(inputs) = &updates.subtasks {
                        task.subtasks = inputs
                            .iter()
                            .map(|input| {
                                let mut subtask = Subtask::new(task_id, input.title.clone());
                                subtask.is_completed = input.is_completed;
                                subtask
                            })
                            .collect();
                    }
                }
            }
        }
        Ok(())
    }

    async fn delete_task(&self, task_id: Uuid) -> StoreResult<()> {
        self.enter("delete_task")?;
        let mut boards = self.boards.lock().unwrap();
        Self::take_task(&mut boards, task_id);
        Ok(())
    }

    async fn create_subtasks(
        &self,
        task_id: Uuid,
        inputs: &[SubtaskInput],
    ) -> StoreResult<Vec<Subtask>> {
        self.enter("create_subtasks")?;
        let created: Vec<Subtask> = inputs
            .iter()
            .map(|input| {
                let mut subtask = Subtask::new(task_id, input.title.clone());
                subtask.is_completed = input.is_completed;
                subtask
            })
            .collect();
        let mut boards = self.boards.lock().unwrap();
        for board in boards.iter_mut() {
            for column in &mut board.columns {
                for task in &mut column.tasks {
                    if task.id == task_id {
                        task.subtasks.extend(created.iter().cloned());
                    }
                }
            }
        }
        Ok(created)
    }

    async fn update_subtask(&self, id: Uuid, is_completed: bool) -> StoreResult<()> {
        self.enter("update_subtask")?;
        let mut boards = self.boards.lock().unwrap();
        for board in boards.iter_mut() {
            for column in &mut board.columns {
                for task in &mut column.tasks {
                    for subtask in &mut task.subtasks {
                        if subtask.id == id {
                            subtask.is_completed = is_completed;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    async fn move_task(&self, task_id: Uuid, column_id: Uuid, position: i32) -> StoreResult<()> {
        self.enter("move_task")?;
        let mut boards = self.boards.lock().unwrap();
        let mut task = Self::take_task(&mut boards, task_id)
            .ok_or_else(|| StoreError::not_found("task", task_id))?;
        task.column_id = column_id;
        task.position = position;
        Self::with_column(&mut boards, column_id, |c| c.tasks.push(task))?;
        Ok(())
    }

    async fn reorder_tasks(&self, ordered_ids: &[Uuid]) -> StoreResult<()> {
        self.enter("reorder_tasks")?;
        let mut boards = self.boards.lock().unwrap();
        for (index, id) in ordered_ids.iter().enumerate() {
            for board in boards.iter_mut() {
                for column in &mut board.columns {
                    for task in &mut column.tasks {
                        if task.id == *id {
                            task.position = index as i32;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    async fn reorder_columns(&self, ordered_ids: &[Uuid]) -> StoreResult<()> {
        self.enter("reorder_columns")?;
        let mut boards = self.boards.lock().unwrap();
        for (index, id) in ordered_ids.iter().enumerate() {
            for board in boards.iter_mut() {
                for column in &mut board.columns {
                    if column.id == *id {
                        column.position = index as i32;
                    }
                }
            }
        }
        for board in boards.iter_mut() {
            board.columns.sort_by_key(|c| c.position);
        }
        Ok(())
    }
}

/// Notifier that records what the user would have been shown.
#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub gateway: Arc<MemoryGateway>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: kb_store::BoardStore,
}

/// Store wired to a fresh in-memory gateway, not yet loaded.
pub fn harness() -> Harness {
    let gateway = Arc::new(MemoryGateway::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let store = kb_store::BoardStore::new(gateway.clone(), notifier.clone());
    Harness {
        gateway,
        notifier,
        store,
    }
}

/// Store loaded with one "Platform" board holding Todo/Doing/Done.
pub async fn loaded_harness() -> Harness {
    let mut h = harness();
    h.gateway
        .create_board(
            "Platform",
            &[
                ColumnSpec::new("Todo"),
                ColumnSpec::new("Doing"),
                ColumnSpec::new("Done"),
            ],
        )
        .await
        .unwrap();
    h.store.refresh_boards().await;
    h
}
