use std::sync::Arc;

use futures::{
    FutureExt,
    future::{BoxFuture, try_join, try_join_all},
};
use tracing::trace;

use crate::{
    doc::DocNode,
    meta::{Builtin, Field, Identity, Meta, Shape},
};

use super::{DocGenError, Generated, Registry, registry::Slot};

type Built = BoxFuture<'static, Result<DocNode, DocGenError>>;

/// State of one generation session: the alias cache and the limits.
pub(crate) struct Session {
    pub(crate) registry: Registry,
    max_depth: Option<usize>,
}

impl Session {
    pub(crate) fn new(registry: Registry, max_depth: Option<usize>) -> Self {
        Self {
            registry,
            max_depth,
        }
    }

    /// Documentation for `meta`: cached under its identity when it has one,
    /// built from scratch otherwise.
    pub(crate) fn generate(
        self: &Arc<Self>,
        meta: Meta,
        depth: usize,
    ) -> BoxFuture<'static, Result<Generated, DocGenError>> {
        let session = Arc::clone(self);

        async move {
            match meta.identity().cloned() {
                Some(identity) => session.request(&identity, &meta, depth).wait().await,
                None => session.build(meta, depth).await.map(Generated::Fragment),
            }
        }
        .boxed()
    }

    /// Node for embedding `meta` in a parent.
    ///
    /// Named, non-inline children become links without waiting for their
    /// content, which lets a schema refer to itself through a forward.
    fn embed(self: &Arc<Self>, meta: Meta, depth: usize) -> Built {
        let session = Arc::clone(self);

        async move {
            let Some(identity) = meta.identity().cloned() else {
                return session.build(meta, depth).await;
            };

            let slot = session.request(&identity, &meta, depth);
            match slot.entry() {
                Some(entry) => Ok(DocNode::Link(entry.clone())),
                None => slot.wait().await.map(Generated::into_node),
            }
        }
        .boxed()
    }

    /// Cached generation for `identity`. Entries are embedded only as links,
    /// so their content starts over at depth zero; inline content counts
    /// towards the depth of the node that embeds it.
    fn request(self: &Arc<Self>, identity: &Identity, meta: &Meta, depth: usize) -> Slot {
        let session = Arc::clone(self);
        let meta = meta.clone();

        self.registry.request(identity, move |inline| {
            session.build(meta, if inline { depth } else { 0 })
        })
    }

    fn embed_all<'a>(
        self: &Arc<Self>,
        members: impl IntoIterator<Item = &'a Meta>,
        depth: usize,
    ) -> BoxFuture<'static, Result<Vec<DocNode>, DocGenError>> {
        let children: Vec<Built> = members
            .into_iter()
            .map(|member| self.embed(member.clone(), depth))
            .collect();

        try_join_all(children).boxed()
    }

    fn build(self: &Arc<Self>, meta: Meta, depth: usize) -> Built {
        let session = Arc::clone(self);

        async move {
            session.check_depth(depth)?;
            trace!(kind = meta.shape().kind(), depth, "building documentation");

            let annotations = meta.annotations().collapse();
            let child = depth + 1;

            let node = match meta.shape() {
                Shape::Literal(value) => DocNode::seq([
                    DocNode::block(DocNode::seq([
                        DocNode::text("The literal "),
                        DocNode::code(value.to_string()),
                    ])),
                    annotations,
                ]),

                Shape::Primitive(kind) => DocNode::seq([primitive_docs(kind), annotations]),

                Shape::Sequence(item) => {
                    let item = session.embed(item.clone(), child).await?;
                    described(
                        "An array.",
                        vec![DocNode::seq([DocNode::text("Element: "), item])],
                        annotations,
                    )
                }

                Shape::Mapping { key, value } => {
                    let (key, value) = try_join(
                        session.embed(key.clone(), child),
                        session.embed(value.clone(), child),
                    )
                    .await?;
                    described(
                        "A dictionary.",
                        vec![
                            DocNode::seq([DocNode::text("Key: "), key]),
                            DocNode::seq([DocNode::text("Value: "), value]),
                        ],
                        annotations,
                    )
                }

                Shape::Record(fields) => {
                    let docs = session
                        .embed_all(fields.iter().map(|field| &field.meta), child)
                        .await?;
                    let items = fields.iter().zip(docs).map(field_docs).collect();
                    described("A key-value structure.", items, annotations)
                }

                Shape::OneOf(members) => {
                    let items = session.embed_all(members, child).await?;
                    described("One of the following.", items, annotations)
                }

                Shape::AllOf(members) => {
                    let items = session.embed_all(members, child).await?;
                    described("All of the following.", items, annotations)
                }

                Shape::Derived {
                    upstream,
                    annotation,
                } => {
                    let upstream = session.embed(upstream.clone(), child).await?;
                    DocNode::seq([upstream, annotations, annotation.collapse()])
                }

                Shape::Forward(forward) => {
                    let target = forward
                        .resolved()
                        .await
                        .ok_or(DocGenError::ForwardAbandoned { depth })?;
                    let target = session.embed(target, child).await?;
                    DocNode::seq([target, annotations])
                }

                Shape::AliasOf(target) => {
                    let target = session.embed(target.clone(), child).await?;
                    DocNode::seq([target, annotations])
                }
            };

            Ok(node)
        }
        .boxed()
    }

    fn check_depth(&self, depth: usize) -> Result<(), DocGenError> {
        match self.max_depth {
            Some(max) if depth > max => Err(DocGenError::DepthExceeded { depth, max }),
            _ => Ok(()),
        }
    }
}

fn described(summary: &str, items: Vec<DocNode>, annotations: DocNode) -> DocNode {
    DocNode::seq([
        DocNode::block(DocNode::seq([DocNode::text(summary), DocNode::List(items)])),
        annotations,
    ])
}

fn field_docs((field, doc): (&Field, DocNode)) -> DocNode {
    let requiredness = if field.required {
        "(required) "
    } else {
        "(optional) "
    };

    DocNode::seq([
        DocNode::text(requiredness),
        DocNode::code(field.name.as_str()),
        DocNode::text(": "),
        doc,
    ])
}

/// Fixed description of a built-in kind; custom kinds have none.
pub fn primitive_docs(kind: &Identity) -> DocNode {
    match kind.builtin() {
        Some(Builtin::String) => DocNode::text("A string value."),
        Some(Builtin::Number) => DocNode::text("A numeric value."),
        Some(Builtin::Boolean) => DocNode::text("A boolean value."),
        Some(Builtin::Null) => DocNode::seq([
            DocNode::text("The value "),
            DocNode::code("null"),
            DocNode::text("."),
        ]),
        Some(Builtin::Nullish | Builtin::Undefinedish) => {
            DocNode::text("A nullish (null or undefined) value.")
        }
        Some(Builtin::Object) => DocNode::text("An object value."),
        Some(Builtin::Unknown) => DocNode::text("A value of any type."),
        Some(Builtin::Ignored) => {
            DocNode::text("This value does not need to be provided and is ignored.")
        }
        None => DocNode::Empty,
    }
}
