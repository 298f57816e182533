//! Structural metadata attached to schemas.
//!
//! A [`MetaNode`] describes the shape of a schema, the documentation layered
//! onto it and, for named schemas, the [`Identity`] used to deduplicate its
//! documentation. Nodes are immutable and shared through [`Meta`].

mod annotation;
pub mod factories;
mod forward;
mod identity;
mod shape;

#[cfg(test)]
mod tests;

pub use annotation::Annotations;
pub use forward::{Forward, ForwardResolver};
pub use identity::{Builtin, Identity, identity_for};
pub use shape::{Field, LiteralValue, Shape};

use std::sync::Arc;

use crate::doc::DocNode;

/// Shared handle to a metadata node.
pub type Meta = Arc<MetaNode>;

/// Anything that exposes structural metadata.
pub trait Described {
    /// Metadata describing the schema's shape.
    fn meta(&self) -> Meta;
}

impl Described for Meta {
    fn meta(&self) -> Meta {
        self.clone()
    }
}

impl<T: Described + ?Sized> Described for &T {
    fn meta(&self) -> Meta {
        (**self).meta()
    }
}

/// Description of one schema: its shape, documentation and optional name.
#[derive(Debug, Clone)]
pub struct MetaNode {
    identity: Option<Identity>,
    shape: Shape,
    annotations: Annotations,
}

impl MetaNode {
    /// Anonymous, undocumented node.
    pub fn new(shape: Shape) -> Meta {
        Arc::new(Self {
            identity: None,
            shape,
            annotations: Annotations::none(),
        })
    }

    /// Named, undocumented node.
    pub fn with_identity(shape: Shape, identity: Identity) -> Meta {
        Arc::new(Self {
            identity: Some(identity),
            shape,
            annotations: Annotations::none(),
        })
    }

    /// Node for a built-in primitive kind.
    pub fn builtin(builtin: Builtin) -> Meta {
        let identity = builtin.identity();
        Self::with_identity(Shape::Primitive(identity.clone()), identity)
    }

    /// Token naming this schema, if it has one.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Structural variant.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Attached documentation, most recent first.
    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Attaches documentation, keeping a primitive's identity.
    ///
    /// Composite nodes lose their identity; the result is a new anonymous
    /// schema built on the same shape.
    pub fn annotate(&self, content: impl Into<DocNode>) -> Meta {
        self.annotate_as(content, None)
    }

    /// Attaches documentation and optionally names the result.
    ///
    /// On a primitive, `identity` also replaces the primitive kind. The
    /// original node is left untouched.
    pub fn annotate_as(&self, content: impl Into<DocNode>, identity: Option<Identity>) -> Meta {
        let annotations = self.annotations.wrap(content);

        let node = match &self.shape {
            Shape::Primitive(kind) => Self {
                shape: Shape::Primitive(identity.clone().unwrap_or_else(|| kind.clone())),
                identity: identity.or_else(|| self.identity.clone()),
                annotations,
            },
            shape => Self {
                shape: shape.clone(),
                identity,
                annotations,
            },
        };

        Arc::new(node)
    }

    /// Same shape and documentation under a new name.
    pub fn renamed(&self, identity: Identity) -> Meta {
        Arc::new(Self {
            identity: Some(identity),
            shape: self.shape.clone(),
            annotations: self.annotations.clone(),
        })
    }
}
