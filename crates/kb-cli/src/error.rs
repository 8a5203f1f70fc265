use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] kb_config::ConfigError),

    #[error(transparent)]
    Db(#[from] kb_db::DbError),

    #[error(transparent)]
    Action(#[from] kb_store::ActionError),

    #[error("failed to load boards: {message}")]
    Load { message: String },

    #[error("no board named '{name}'")]
    BoardNotFound { name: String },

    #[error("no board selected; create one with `kb board create`")]
    NoBoard,

    #[error("no column named '{name}'")]
    ColumnNotFound { name: String },

    #[error("no task with id {id}")]
    TaskNotFound { id: uuid::Uuid },

    #[error("no subtask with id {id}")]
    SubtaskNotFound { id: uuid::Uuid },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
