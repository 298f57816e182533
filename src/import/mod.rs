//! Metadata from JSON Schema documents.
//!
//! Lets anything that can describe itself as JSON Schema, such as Rust types
//! deriving [`schemars::JsonSchema`], be documented by the generator.
//! Definitions under `$defs` or `definitions` become named schemas and
//! `$ref`s become forward placeholders, so recursive types work.

mod error;
mod json_schema;

#[cfg(test)]
mod tests;

pub use error::ImportError;
pub use json_schema::{ImportedSchema, import, import_str, import_type};
