//! Error types and handling
//!
//! Only argument validation raises. Platform failures are reported as a
//! `false` return, never as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the host-facing entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Wrong number of arguments: expected {expected}, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Wrong arguments: argument {index} must be a {expected}, got {actual}")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Platform error: {0}")]
    Platform(String),
}

/// Error response for frontend
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<BridgeError> for ErrorResponse {
    fn from(error: BridgeError) -> Self {
        let code = match &error {
            BridgeError::ArgumentCount { .. } => "ARGUMENT_COUNT_ERROR",
            BridgeError::ArgumentType { .. } => "ARGUMENT_TYPE_ERROR",
            BridgeError::Platform(_) => "PLATFORM_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<tauri::Error> for BridgeError {
    fn from(error: tauri::Error) -> Self {
        BridgeError::Platform(error.to_string())
    }
}

/// Result type alias using BridgeError
pub type BridgeResult<T> = Result<T, BridgeError>;
