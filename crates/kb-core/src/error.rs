use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Local, field-level validation failure. Blocks an action before any
/// gateway call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} can't be empty")]
    Required { field: &'static str },

    #[error("a board holds at most {max} columns")]
    TooManyColumns { max: usize },

    #[error("add at least one column")]
    NoColumns,

    #[error("no column named {status:?} on the current board")]
    UnknownStatus { status: String },

    #[error("no column {id} on the current board")]
    UnknownColumn { id: Uuid },

    #[error("no board is currently selected")]
    NoCurrentBoard,
}

/// Failure of a persistence gateway operation. Surfaced to the caller
/// unchanged: no retry, no backoff.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: Uuid,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        StoreError::NotFound {
            entity,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
