use kb_core::{StoreError, ValidationError};

use thiserror::Error;

/// Failure of a user-initiated action. Validation failures never reach
/// the gateway; store failures have already been notified and logged by
/// the time they surface here.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }
}

pub type ActionResult<T = ()> = std::result::Result<T, ActionError>;
