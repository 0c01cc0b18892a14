//! Error types for trainlog.
//!
//! This module defines all error types used throughout the trainlog crate,
//! with enough path context for the user to see which file was at fault.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for trainlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Data File Errors ===
    /// The train list file is not valid JSON.
    #[error("failed to parse JSON in {path}: {source}")]
    Parse {
        /// Path to the train list file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The train list passed the schema but could not be read as trains.
    ///
    /// Happens when a loosened schema admits a shape the record type cannot
    /// hold, such as a string destination given as a number.
    #[error("train list at {path} matches the schema but is not a list of trains: {source}")]
    Decode {
        /// Path to the train list file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The train list failed schema validation and holds no usable data.
    #[error("train list at {path} failed schema validation; refusing to continue")]
    InvalidData {
        /// Path to the train list file.
        path: PathBuf,
    },

    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Schema Errors ===
    /// The schema resource does not exist.
    #[error("schema file not found at {path}")]
    SchemaResourceMissing {
        /// Where the schema was expected.
        path: PathBuf,
    },

    /// The schema resource is not valid JSON.
    #[error("failed to parse schema {path}: {source}")]
    SchemaParse {
        /// Path to the schema file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The schema resource is JSON but not a usable JSON Schema.
    #[error("invalid schema {path}: {message}")]
    SchemaCompile {
        /// Path to the schema file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Prompt Errors ===
    /// Input ended before a required value was entered.
    #[error("no value entered for {field}")]
    PromptAborted {
        /// The value being prompted for.
        field: String,
    },

    // === Generic Errors ===
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for trainlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a prompt-aborted error for the given field.
    #[must_use]
    pub fn prompt_aborted(field: impl Into<String>) -> Self {
        Self::PromptAborted {
            field: field.into(),
        }
    }

    /// Check if this error means the data file was present but invalid.
    #[must_use]
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData { .. })
    }

    /// Check if this error originates from the schema resource itself.
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaResourceMissing { .. }
                | Self::SchemaParse { .. }
                | Self::SchemaCompile { .. }
        )
    }
}
