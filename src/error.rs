//! Board error types
//!
//! Every way a board operation can fail. None of these are fatal: the
//! controller turns each one into a message on the surface and carries on.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while talking to the activities API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The request never produced a response (DNS, connection refused, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        /// Server-supplied `detail`, when the body carried one
        detail: Option<String>,
    },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(String),

    /// The form never made it to the network
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BoardError {
    /// Server-supplied detail text, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Decode(err.to_string())
    }
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
