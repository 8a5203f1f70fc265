pub mod error;
pub mod gateway;
pub mod models;
pub mod validation;

pub use error::{StoreError, StoreResult, ValidationError};
pub use gateway::BoardGateway;
pub use models::board::Board;
pub use models::column::Column;
pub use models::inputs::{
    BoardUpdate, ColumnSpec, ColumnUpdate, CreateTaskInput, SubtaskInput, TaskUpdate,
};
pub use models::subtask::Subtask;
pub use models::task::Task;
pub use validation::MAX_BOARD_COLUMNS;
