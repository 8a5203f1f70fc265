//! Speculative apply phase of every mutation: pure functions from one
//! board tree to the next. Each is idempotent, so a patch that races a
//! reconciling refresh self-corrects instead of compounding.

use kb_core::{Board, Subtask, SubtaskInput, Task};

use uuid::Uuid;

/// Appends a freshly created task to its column's list. A task id the
/// tree already knows is left where it is.
pub fn append_task(mut board: Board, column_id: Uuid, task: Task) -> Board {
    if board.task(task.id).is_some() {
        return board;
    }
    if let Some(column) = board.column_mut(column_id) {
        column.tasks.push(task);
    }
    board
}

/// Filters a deleted task out of every column.
pub fn remove_task(mut board: Board, task_id: Uuid) -> Board {
    for column in &mut board.columns {
        column.tasks.retain(|t| t.id != task_id);
    }
    board
}

/// Moves a task to another column: removed from its previous list,
/// appended to the destination with `status` and `column_id` rewritten
/// as a pair.
pub fn move_task(mut board: Board, task_id: Uuid, to_column: Uuid, status: &str) -> Board {
    let mut moved = None;
    for column in &mut board.columns {
        if let Some(index) = column.tasks.iter().position(|t| t.id == task_id) {
            moved = Some(column.tasks.remove(index));
            break;
        }
    }
    let Some(mut task) = moved else {
        return board;
    };
    if let Some(column) = board.column_mut(to_column) {
        task.column_id = to_column;
        task.status = status.to_string();
        column.tasks.push(task);
    }
    board
}

/// Edit-submission result: field rewrite plus (when the status changed)
/// a move into the status's column. Replacement subtasks get fresh local
/// ids; the following refresh swaps in the server's.
pub fn apply_task_edit(
    board: Board,
    task_id: Uuid,
    to_column: Uuid,
    title: &str,
    description: &str,
    status: &str,
    subtasks: &[SubtaskInput],
) -> Board {
    let mut board = move_task(board, task_id, to_column, status);
    if let Some(column) = board.column_mut(to_column) {
        if let Some(task) = column.tasks.iter_mut().find(|t| t.id == task_id) {
            task.title = title.to_string();
            task.description = description.to_string();
            task.subtasks = subtasks
                .iter()
                .map(|input| {
                    let mut subtask = Subtask::new(task_id, input.title.clone());
                    subtask.is_completed = input.is_completed;
                    subtask
                })
                .collect();
        }
    }
    board
}

/// Rewrites one subtask's completion flag in place.
pub fn set_subtask_completed(
    mut board: Board,
    task_id: Uuid,
    subtask_id: Uuid,
    is_completed: bool,
) -> Board {
    for column in &mut board.columns {
        for task in &mut column.tasks {
            if task.id != task_id {
                continue;
            }
            for subtask in &mut task.subtasks {
                if subtask.id == subtask_id {
                    subtask.is_completed = is_completed;
                }
            }
        }
    }
    board
}

/// Board-edit result: new name, new column arrangement. Kept columns
/// retain their task lists; the refresh restores anything this guess
/// gets wrong.
pub fn apply_board_edit(mut board: Board, name: &str, columns: Vec<kb_core::Column>) -> Board {
    board.name = name.to_string();
    board.columns = columns;
    board
}
