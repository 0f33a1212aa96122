//! Error types for the User actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The user actor refused the record.
    #[error("User rejected: {0}")]
    Rejected(String),

    /// The user actor is gone or dropped the reply.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => UserError::Rejected(inner.to_string()),
            other => UserError::StoreUnavailable(other.to_string()),
        }
    }
}
