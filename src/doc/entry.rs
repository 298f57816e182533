use std::{fmt, sync::OnceLock};

use crate::meta::Identity;

use super::DocNode;

/// A standalone, linkable unit of documentation for a named schema.
///
/// The entry exists as soon as generation for its identity starts, so links
/// to it can be handed out while its content is still being produced. The
/// content is written once, when that generation settles.
pub struct Entry {
    identity: Identity,
    content: OnceLock<DocNode>,
}

impl Entry {
    pub(crate) fn new(identity: Identity) -> Self {
        Self {
            identity,
            content: OnceLock::new(),
        }
    }

    pub(crate) fn fill(&self, content: DocNode) {
        // The registry runs one computation per entry, so this is the only write.
        let _ = self.content.set(content);
    }

    /// Token the entry was generated for.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Title of the entry.
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Generated content, once generation has settled.
    pub fn content(&self) -> Option<&DocNode> {
        self.content.get()
    }

    /// Anchor used for cross-references, unique even when names collide.
    pub fn anchor(&self) -> String {
        let slug: String = self
            .name()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();

        format!("{}-{}", slug.trim_matches('-'), self.identity.id())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("identity", &self.identity)
            .field("filled", &self.content.get().is_some())
            .finish()
    }
}
