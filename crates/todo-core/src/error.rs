//! Error Types
//!
//! Remote failures, local validation failures and configuration problems.

use thiserror::Error;

/// Any failure of a remote operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Rejected locally, before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title should not be empty")]
    EmptyTitle,
    #[error("a todo is already being added")]
    CreateInFlight,
}

/// Error returned by orchestrator operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TodoError {
    pub fn is_network(&self) -> bool {
        matches!(self, TodoError::Network(_))
    }
}

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("user id is not configured")]
    MissingUserId,
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
