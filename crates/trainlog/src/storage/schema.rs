//! JSON Schema validation for train list documents.
//!
//! The schema is an external resource read from disk on every load, so the
//! user can tighten or relax it without rebuilding the tool.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Contents of the `scheme.json` shipped alongside the tool.
pub const DEFAULT_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "title": "Train list",
    "type": "array",
    "items": {
        "type": "object",
        "properties": {
            "num": {"type": "integer"},
            "destination": {"type": "string"},
            "start_time": {"type": "string"}
        }
    }
}"#;

/// Validation failures for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// One message per failed keyword.
    pub messages: Vec<String>,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

/// A compiled schema together with the path it came from.
pub struct SchemaValidator {
    path: PathBuf,
    validator: jsonschema::Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Read and compile the schema at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaResourceMissing`] if the file does not exist,
    /// [`Error::SchemaParse`] if it is not JSON, and [`Error::SchemaCompile`]
    /// if it is not a valid JSON Schema.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Loading schema from {}", path.display());

        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::SchemaResourceMissing { path: path.clone() }
            } else {
                Error::FileRead {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let schema: Value = serde_json::from_str(&raw).map_err(|source| Error::SchemaParse {
            path: path.clone(),
            source,
        })?;

        Self::compile(path, &schema)
    }

    /// Compile an already parsed schema. `path` is only used for messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaCompile`] if the schema is invalid.
    pub fn compile(path: impl Into<PathBuf>, schema: &Value) -> Result<Self> {
        let path = path.into();
        let validator = jsonschema::validator_for(schema).map_err(|e| Error::SchemaCompile {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { path, validator })
    }

    /// Path the schema was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate `document`, collecting every failure.
    ///
    /// # Errors
    ///
    /// Returns the collected [`SchemaViolation`] when the document does not
    /// match the schema.
    pub fn validate(&self, document: &Value) -> std::result::Result<(), SchemaViolation> {
        let messages: Vec<String> = self
            .validator
            .iter_errors(document)
            .map(|e| e.to_string())
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolation { messages })
        }
    }
}
