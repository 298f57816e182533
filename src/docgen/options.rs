use std::collections::HashMap;

use crate::{
    config::DocgenConfig,
    meta::{Described, Identity},
};

/// Options for a [`DocGenerator`](super::DocGenerator).
#[derive(Debug, Clone, Default)]
pub struct DocGenOptions {
    /// Per-identity inlining decisions, layered over the defaults.
    ///
    /// `true` embeds a named schema's documentation wherever it is used;
    /// `false` gives even a built-in primitive its own entry.
    pub inline_overrides: Vec<(Identity, bool)>,

    /// Inlining decisions by name, for tokens without an identity override.
    pub inline_by_name: HashMap<String, bool>,

    /// Maximum nesting depth before generation fails; unbounded when `None`.
    pub max_depth: Option<usize>,
}

impl DocGenOptions {
    /// Default options: built-in primitives inline, everything else named.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides inlining for `identity`.
    pub fn inline(mut self, identity: Identity, inline: bool) -> Self {
        self.inline_overrides.push((identity, inline));
        self
    }

    /// Overrides inlining for the identity carried by `schema`.
    ///
    /// Anonymous schemas are never cached, so they are skipped.
    pub fn inline_schema(self, schema: impl Described, inline: bool) -> Self {
        match schema.meta().identity() {
            Some(identity) => self.inline(identity.clone(), inline),
            None => self,
        }
    }

    /// Overrides inlining for every token named `name`.
    pub fn inline_name(mut self, name: impl Into<String>, inline: bool) -> Self {
        self.inline_by_name.insert(name.into(), inline);
        self
    }

    /// Sets the nesting limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl From<&DocgenConfig> for DocGenOptions {
    fn from(config: &DocgenConfig) -> Self {
        Self {
            inline_overrides: Vec::new(),
            inline_by_name: config.inline.clone(),
            max_depth: config.max_depth,
        }
    }
}
