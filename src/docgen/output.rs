use std::sync::Arc;

use crate::doc::{DocNode, Entry};

/// Result of generating documentation for one schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// Anonymous content, embedded verbatim by whoever uses it.
    Fragment(DocNode),
    /// A named entry, referenced by link.
    Entry(Arc<Entry>),
}

impl Generated {
    /// The named entry, if this result is one.
    pub fn as_entry(&self) -> Option<&Arc<Entry>> {
        match self {
            Generated::Entry(entry) => Some(entry),
            Generated::Fragment(_) => None,
        }
    }

    /// The documentation itself: the fragment, or the entry's content.
    pub fn content(&self) -> Option<&DocNode> {
        match self {
            Generated::Fragment(node) => Some(node),
            Generated::Entry(entry) => entry.content(),
        }
    }

    /// Node to embed in a parent: the fragment itself, or a link to the entry.
    pub fn into_node(self) -> DocNode {
        match self {
            Generated::Fragment(node) => node,
            Generated::Entry(entry) => DocNode::Link(entry),
        }
    }
}
