//! Error types for LCD operations.

use cosm_client::{BroadcastFailure, ClientError};

/// Errors that can occur when talking to a node's REST API.
#[derive(Debug, thiserror::Error)]
pub enum LcdError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The node answered with a non-success status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The node refused the transaction.
    #[error("transaction rejected ({code}): {description}")]
    Rejected {
        code: u32,
        description: String,
    },
}

impl From<LcdError> for ClientError {
    fn from(e: LcdError) -> Self {
        match e {
            LcdError::Rejected { code, description } => {
                ClientError::Broadcast(BroadcastFailure { code, description })
            }
            other => ClientError::Transport(Box::new(other)),
        }
    }
}
