//! Client Errors
//!
//! Failures surfaced by the inventory service client.

use thiserror::Error;

/// Errors returned by every repository operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response reached us
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered `ok: false`. Displays the service message unmodified.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Item {id} not found")]
    NotFound { id: String },

    /// The response body was not a well-formed envelope
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Text shown to the user in the alert region or status banner
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
