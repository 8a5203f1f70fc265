pub mod connection;
pub mod error;
pub mod gateway;
pub mod repositories;

pub use connection::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use gateway::SqliteGateway;
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::subtask_repository::SubtaskRepository;
pub use repositories::task_repository::TaskRepository;
