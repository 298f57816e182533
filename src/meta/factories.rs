//! Constructors for metadata nodes.
//!
//! These mirror the usual schema combinators but only build the structural
//! description; no decoding happens here.

use std::future::Future;

use crate::doc::DocNode;

use super::{
    Annotations, Builtin, Described, Field, Forward, ForwardResolver, Identity, LiteralValue,
    Meta, MetaNode, Shape, identity_for,
};

/// Any string.
pub fn string() -> Meta {
    MetaNode::builtin(Builtin::String)
}

/// Any number.
pub fn number() -> Meta {
    MetaNode::builtin(Builtin::Number)
}

/// `true` or `false`.
pub fn boolean() -> Meta {
    MetaNode::builtin(Builtin::Boolean)
}

/// Exactly `null`.
pub fn null() -> Meta {
    MetaNode::builtin(Builtin::Null)
}

/// `null` or `undefined`.
pub fn nullish() -> Meta {
    MetaNode::builtin(Builtin::Nullish)
}

/// `undefined` or `null`.
pub fn undefinedish() -> Meta {
    MetaNode::builtin(Builtin::Undefinedish)
}

/// Any value.
pub fn unknown() -> Meta {
    MetaNode::builtin(Builtin::Unknown)
}

/// Any value; same kind as [`unknown`].
pub fn any() -> Meta {
    unknown()
}

/// Any non-null object.
pub fn object() -> Meta {
    MetaNode::builtin(Builtin::Object)
}

/// A value that is not read.
pub fn ignored() -> Meta {
    MetaNode::builtin(Builtin::Ignored)
}

/// Custom atomic kind named by `identity`.
pub fn atomic(identity: Identity) -> Meta {
    MetaNode::with_identity(Shape::Primitive(identity.clone()), identity)
}

/// Custom atomic kind for instances of the Rust type `T`.
pub fn atomic_for<T: ?Sized + 'static>() -> Meta {
    atomic(identity_for::<T>())
}

/// Exactly `value`.
pub fn literal(value: impl Into<LiteralValue>) -> Meta {
    MetaNode::new(Shape::Literal(value.into()))
}

/// Array of `item`.
pub fn array(item: impl Described) -> Meta {
    MetaNode::new(Shape::Sequence(item.meta()))
}

/// Dictionary from strings to `value`.
pub fn record(value: impl Described) -> Meta {
    record_keyed(string(), value)
}

/// Dictionary from `key` to `value`.
pub fn record_keyed(key: impl Described, value: impl Described) -> Meta {
    MetaNode::new(Shape::Mapping {
        key: key.meta(),
        value: value.meta(),
    })
}

/// Structure whose fields are all required, in the given order.
pub fn structure<K, M>(fields: impl IntoIterator<Item = (K, M)>) -> Meta
where
    K: Into<String>,
    M: Described,
{
    record_fields(
        fields
            .into_iter()
            .map(|(name, meta)| Field::required(name, meta.meta())),
    )
}

/// Structure whose fields are all optional, in the given order.
pub fn partial<K, M>(fields: impl IntoIterator<Item = (K, M)>) -> Meta
where
    K: Into<String>,
    M: Described,
{
    record_fields(
        fields
            .into_iter()
            .map(|(name, meta)| Field::optional(name, meta.meta())),
    )
}

/// Structure that is either complete or entirely absent.
///
/// Documented like [`partial`]: every field is reported as optional.
pub fn optional_structure<K, M>(fields: impl IntoIterator<Item = (K, M)>) -> Meta
where
    K: Into<String>,
    M: Described,
{
    partial(fields)
}

/// Structure with per-field requiredness.
pub fn record_fields(fields: impl IntoIterator<Item = Field>) -> Meta {
    MetaNode::new(Shape::Record(fields.into_iter().collect()))
}

/// Union of `members`, in the given order.
pub fn union<M: Described>(members: impl IntoIterator<Item = M>) -> Meta {
    MetaNode::new(Shape::OneOf(
        members.into_iter().map(|member| member.meta()).collect(),
    ))
}

/// Intersection of `left` and `right`.
pub fn intersect(left: impl Described, right: impl Described) -> Meta {
    MetaNode::new(Shape::AllOf(vec![left.meta(), right.meta()]))
}

/// Transform of `upstream` documented by `doc`.
pub fn parse(upstream: impl Described, doc: impl Into<DocNode>) -> Meta {
    refine(upstream, Annotations::single(doc))
}

/// Transform of `upstream` documented by a full annotation chain, such as
/// the documentation of the schema the transform was built from.
pub fn refine(upstream: impl Described, annotation: Annotations) -> Meta {
    MetaNode::new(Shape::Derived {
        upstream: upstream.meta(),
        annotation,
    })
}

/// Placeholder for a schema that is built later.
pub fn forward() -> (Meta, ForwardResolver) {
    let (forward, resolver) = Forward::pending();
    (MetaNode::new(Shape::Forward(forward)), resolver)
}

/// Placeholder resolved by `future`.
pub fn defer<F>(future: F) -> Meta
where
    F: Future<Output = Meta> + Send + 'static,
{
    MetaNode::new(Shape::Forward(Forward::from_future(future)))
}

/// Named re-export of `target`.
pub fn alias_of(target: impl Described, identity: Identity) -> Meta {
    MetaNode::with_identity(Shape::AliasOf(target.meta()), identity)
}

/// `schema` under the name `identity`, documentation unchanged.
pub fn named(schema: impl Described, identity: Identity) -> Meta {
    schema.meta().renamed(identity)
}

/// Attaches `content` to `schema`.
pub fn doc(schema: impl Described, content: impl Into<DocNode>) -> Meta {
    schema.meta().annotate(content)
}

/// Attaches `content` to `schema` and names the result.
pub fn doc_as(schema: impl Described, content: impl Into<DocNode>, identity: Identity) -> Meta {
    schema.meta().annotate_as(content, Some(identity))
}
