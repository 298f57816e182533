//! schemadoc - Documentation generation from schema metadata.
//!
//! Schemas carry a structural description of the data they accept. schemadoc
//! walks that description and produces a cross-linked documentation tree:
//!
//! - Metadata model with annotation chains and forward placeholders
//! - Generator with a single-flight cache of named schemas
//! - Plain-text and Markdown renderers
//! - JSON Schema importer for `schemars` types
//!
//! # Quick Start
//!
//! ```rust
//! use schemadoc::{
//!     DocGenerator,
//!     doc::render,
//!     docgen::DocGenError,
//!     meta::factories::{doc, number, partial, string, structure},
//! };
//!
//! # async fn example() -> Result<(), DocGenError> {
//! let user = doc(structure([("id", number())]), "A registered user.");
//! let schema = structure([("owner", user), ("nickname", partial([("value", string())]))]);
//!
//! let generated = DocGenerator::new().generate(schema).await?;
//! if let Some(content) = generated.content() {
//!     println!("{}", render::plain(content));
//! }
//! # Ok(())
//! # }
//! ```

/// Crate-level error types and result aliases.
pub mod core;

/// Configuration schema definitions and loading.
pub mod config;

/// In-memory documentation tree and renderers.
pub mod doc;

/// Documentation generation engine.
pub mod docgen;

/// JSON Schema importer.
pub mod import;

/// Structural metadata model.
pub mod meta;

/// Markdown reference pages for JSON Schema documents.
pub mod pages;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SchemaDocError};
pub use docgen::{DocGenOptions, DocGenerator, Generated};
pub use meta::{Described, Meta, MetaNode};
