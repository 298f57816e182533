//! Documentation generation from schema metadata.
//!
//! A [`DocGenerator`] walks a schema's metadata and produces a documentation
//! tree. Named schemas are generated once per generator and referenced by
//! link everywhere else, unless the inlining policy says to embed them.

mod engine;
mod error;
mod options;
mod output;
mod registry;


pub use engine::primitive_docs;
pub use error::DocGenError;
pub use options::DocGenOptions;
pub use output::Generated;
pub use registry::{InlinePolicy, Registry, Slot};

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    doc::{DocNode, Entry},
    meta::Described,
};

use engine::Session;

/// Generates documentation for schemas.
///
/// Each generator owns its own alias cache; clones share it. Start a new
/// generator for an independent session.
#[derive(Clone)]
pub struct DocGenerator {
    session: Arc<Session>,
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocGenerator {
    /// Generator with default options.
    pub fn new() -> Self {
        Self::with_options(DocGenOptions::default())
    }

    /// Generator with custom inlining and limits.
    pub fn with_options(options: DocGenOptions) -> Self {
        let registry = Registry::new(InlinePolicy::new(&options));

        Self {
            session: Arc::new(Session::new(registry, options.max_depth)),
        }
    }

    /// Generates documentation for `schema`.
    ///
    /// Returns once every named entry reached from `schema` has its content,
    /// so every link in the result can be followed. Entries reached only by
    /// other calls are not waited on, and their failures are not reported
    /// here. A forward that never resolves on the way keeps this from
    /// returning; wrap the call in a timeout if that matters.
    ///
    /// # Errors
    ///
    /// Returns `DocGenError::ForwardAbandoned` if a forward's resolver was
    /// dropped, or `DocGenError::DepthExceeded` if the configured depth limit
    /// was reached.
    pub async fn generate(&self, schema: impl Described) -> Result<Generated, DocGenError> {
        let meta = schema.meta();
        debug!(kind = meta.shape().kind(), "generating documentation");

        let generated = self.session.generate(meta, 0).await?;
        let roots = match generated.as_entry() {
            Some(entry) => vec![entry.clone()],
            None => generated.content().map(DocNode::links).unwrap_or_default(),
        };
        self.session.registry.settle(roots).await?;

        info!(
            entries = self.entries().len(),
            computations = self.computations(),
            "documentation generated"
        );

        Ok(generated)
    }

    /// Named entries produced so far, in first-request order.
    pub fn entries(&self) -> Vec<Arc<Entry>> {
        self.session.registry.entries()
    }

    /// Number of named-schema computations started so far.
    pub fn computations(&self) -> usize {
        self.session.registry.computations()
    }

    /// The generator's alias cache.
    pub fn registry(&self) -> &Registry {
        &self.session.registry
    }
}
