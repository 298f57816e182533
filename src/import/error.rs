use thiserror::Error;

/// Errors that can occur while importing a JSON Schema document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Document is not valid JSON
    #[error("failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `$ref` points at nothing the document defines
    #[error("unresolved reference '{reference}' at '{pointer}'")]
    UnresolvedRef {
        /// The reference as written
        reference: String,
        /// Location of the `$ref`
        pointer: String,
    },

    /// Valid JSON Schema that has no metadata equivalent
    #[error("unsupported schema at '{pointer}': {details}")]
    Unsupported {
        /// Location of the offending subschema
        pointer: String,
        /// What is not supported
        details: String,
    },

    /// Not a JSON Schema
    #[error("invalid schema at '{pointer}': {details}")]
    InvalidSchema {
        /// Location of the offending value
        pointer: String,
        /// What is wrong with it
        details: String,
    },
}
