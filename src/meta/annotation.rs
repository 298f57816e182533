use std::sync::Arc;

use crate::doc::DocNode;

#[derive(Debug)]
struct Layer {
    content: DocNode,
    details: Annotations,
}

/// Immutable chain of documentation layers attached to a schema.
///
/// Attaching documentation wraps the existing chain, so the most recently
/// attached layer comes first and older layers are its `details`. Chains are
/// shared: wrapping never changes the chain being wrapped.
#[derive(Debug, Clone, Default)]
pub struct Annotations(Option<Arc<Layer>>);

impl Annotations {
    /// The empty chain.
    pub fn none() -> Self {
        Self(None)
    }

    /// Single layer with no details.
    pub fn single(content: impl Into<DocNode>) -> Self {
        Self::none().wrap(content)
    }

    /// New chain with `content` in front of this one.
    pub fn wrap(&self, content: impl Into<DocNode>) -> Self {
        Self(Some(Arc::new(Layer {
            content: content.into(),
            details: self.clone(),
        })))
    }

    /// Whether the chain has no layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Content of the most recent layer.
    pub fn content(&self) -> Option<&DocNode> {
        self.0.as_deref().map(|layer| &layer.content)
    }

    /// The chain below the most recent layer.
    pub fn details(&self) -> Option<&Annotations> {
        self.0.as_deref().map(|layer| &layer.details)
    }

    /// Layer contents, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &DocNode> {
        let mut current = self.0.as_deref();
        std::iter::from_fn(move || {
            let layer = current?;
            current = layer.details.0.as_deref();
            Some(&layer.content)
        })
    }

    /// Renders the chain: each layer as its own paragraph, followed by the
    /// layers it wraps.
    pub fn collapse(&self) -> DocNode {
        match self.0.as_deref() {
            None => DocNode::Empty,
            Some(layer) => DocNode::seq([
                DocNode::block(layer.content.clone()),
                layer.details.collapse(),
            ]),
        }
    }
}

impl PartialEq for Annotations {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
