//! Error types for taskdeck
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (invalid input, unknown task, nothing to export)
//! - 4: Operation failed (IO error, malformed data)

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Exit codes for the taskdeck CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskdeck operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No tasks to export")]
    NothingToExport,

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(PathBuf),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::EmptyTitle
            | Error::TaskNotFound(_)
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_)
            | Error::NothingToExport => exit_codes::USER_ERROR,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::DataDirUnavailable(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error envelopes
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::TaskNotFound(id) => {
                Some(serde_json::json!({ "task_id": id.to_string() }))
            }
            _ => None,
        }
    }
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, Error>;
