//! In-memory documentation tree.
//!
//! The generation engine produces [`DocNode`] trees. Named schemas become
//! [`Entry`] values that other nodes point to with [`DocNode::Link`] instead
//! of repeating their content.

mod entry;
pub mod render;

pub use entry::Entry;

use std::sync::Arc;

/// A node of generated documentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocNode {
    /// Renders nothing.
    #[default]
    Empty,
    /// Plain prose.
    Text(String),
    /// Inline code, such as a field name or a literal value.
    Code(String),
    /// Children rendered one after another on the same line.
    Seq(Vec<DocNode>),
    /// A paragraph starting on its own line.
    Block(Box<DocNode>),
    /// A bulleted list, one item per child.
    List(Vec<DocNode>),
    /// Cross-reference to a named entry.
    Link(Arc<Entry>),
}

impl DocNode {
    /// Prose node.
    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text(text.into())
    }

    /// Inline code node.
    pub fn code(code: impl Into<String>) -> Self {
        DocNode::Code(code.into())
    }

    /// Sequence of nodes.
    ///
    /// Empty children are dropped and nested sequences are flattened, so a
    /// sequence of one node is that node.
    pub fn seq(nodes: impl IntoIterator<Item = DocNode>) -> Self {
        let mut flat = Vec::new();
        for node in nodes {
            match node {
                DocNode::Seq(children) => flat.extend(children),
                node if node.is_empty() => {}
                node => flat.push(node),
            }
        }

        match flat.len() {
            0 => DocNode::Empty,
            1 => flat.pop().unwrap_or_default(),
            _ => DocNode::Seq(flat),
        }
    }

    /// Paragraph wrapping `node`.
    pub fn block(node: DocNode) -> Self {
        if node.is_empty() {
            DocNode::Empty
        } else {
            DocNode::Block(Box::new(node))
        }
    }

    /// Bulleted list.
    pub fn list(items: impl IntoIterator<Item = DocNode>) -> Self {
        DocNode::List(items.into_iter().collect())
    }

    /// Whether the node renders nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            DocNode::Empty => true,
            DocNode::Text(text) | DocNode::Code(text) => text.is_empty(),
            DocNode::Seq(nodes) => nodes.iter().all(DocNode::is_empty),
            DocNode::Block(node) => node.is_empty(),
            DocNode::List(_) | DocNode::Link(_) => false,
        }
    }

    /// Entries this node links to, in document order, including repeats.
    pub fn links(&self) -> Vec<Arc<Entry>> {
        let mut links = Vec::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links(&self, links: &mut Vec<Arc<Entry>>) {
        match self {
            DocNode::Empty | DocNode::Text(_) | DocNode::Code(_) => {}
            DocNode::Seq(nodes) | DocNode::List(nodes) => {
                nodes.iter().for_each(|node| node.collect_links(links));
            }
            DocNode::Block(node) => node.collect_links(links),
            DocNode::Link(entry) => links.push(entry.clone()),
        }
    }
}

impl From<&str> for DocNode {
    fn from(text: &str) -> Self {
        DocNode::text(text)
    }
}

impl From<String> for DocNode {
    fn from(text: String) -> Self {
        DocNode::Text(text)
    }
}
