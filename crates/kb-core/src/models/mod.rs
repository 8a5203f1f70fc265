pub mod board;
pub mod column;
pub mod inputs;
pub mod subtask;
pub mod task;
