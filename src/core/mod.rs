use std::{path::PathBuf, result};

use thiserror::Error;

use crate::{config::ConfigError, docgen::DocGenError, import::ImportError};

/// Error types for schemadoc.
///
/// Wraps the errors of each stage so callers running the whole pipeline
/// (configuration, import, generation, output) can use one `Result`.
#[derive(Error, Debug)]
pub enum SchemaDocError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Schema document could not be imported
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Documentation generation failed
    #[error(transparent)]
    DocGen(#[from] DocGenError),

    /// I/O operation error with file context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

/// A specialized `Result` type for schemadoc operations.
pub type Result<T> = result::Result<T, SchemaDocError>;

impl SchemaDocError {
    /// Creates an I/O error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path of the file being read or written
    pub fn io(error: impl std::fmt::Display, path: impl Into<PathBuf>) -> Self {
        SchemaDocError::IoError {
            path: path.into(),
            details: error.to_string(),
        }
    }
}
