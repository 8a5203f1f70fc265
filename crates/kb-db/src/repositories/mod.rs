pub mod board_repository;
pub mod column_repository;
pub mod subtask_repository;
pub mod task_repository;
