//! Unit tests for the metadata model.
//! Pure data, no runtime needed except for forwards.

#![allow(clippy::panic)]

use std::sync::Arc;

use crate::{
    doc::DocNode,
    meta::{
        Builtin, Forward, Identity, Shape,
        factories::{
            alias_of, array, defer, doc, doc_as, forward, literal, named, number, parse,
            string, structure, union,
        },
    },
};

#[test]
fn annotating_primitive_keeps_identity() {
    let base = string();
    let documented = doc(&base, "A user name.");

    assert_eq!(documented.identity(), Some(&Builtin::String.identity()));
    assert!(matches!(
        documented.shape(),
        Shape::Primitive(kind) if *kind == Builtin::String.identity()
    ));
    assert_eq!(documented.annotations().content(), Some(&DocNode::text("A user name.")));
}

#[test]
fn annotating_primitive_with_identity_overrides_kind() {
    let email = Identity::named("Email");
    let documented = doc_as(string(), "An e-mail address.", email.clone());

    assert_eq!(documented.identity(), Some(&email));
    assert!(matches!(documented.shape(), Shape::Primitive(kind) if *kind == email));
}

#[test]
fn annotating_composite_clears_identity() {
    let user = named(structure([("id", number())]), Identity::named("User"));
    let documented = doc(&user, "Someone with an account.");

    assert!(user.identity().is_some());
    assert!(documented.identity().is_none());
    assert!(user.annotations().is_empty());

    let (Shape::Record(before), Shape::Record(after)) = (user.shape(), documented.shape()) else {
        panic!("record shape expected");
    };
    assert!(Arc::ptr_eq(&before[0].meta, &after[0].meta));
}

#[test]
fn annotating_composite_with_identity_names_result() {
    let tags = Identity::named("Tags");
    let documented = doc_as(array(string()), "Free-form labels.", tags.clone());

    assert_eq!(documented.identity(), Some(&tags));
    assert!(matches!(documented.shape(), Shape::Sequence(_)));
}

#[test]
fn chained_annotations_store_newest_first() {
    let documented = doc(doc(literal(1), "first"), "second");

    let layers: Vec<_> = documented.annotations().iter().cloned().collect();

    assert_eq!(layers, vec![DocNode::text("second"), DocNode::text("first")]);
}

#[test]
fn factories_build_expected_shapes() {
    assert!(matches!(union([string(), number()]).shape(), Shape::OneOf(members) if members.len() == 2));
    assert!(matches!(parse(string(), "Trimmed.").shape(), Shape::Derived { .. }));

    let alias = Identity::named("Name");
    let aliased = alias_of(string(), alias.clone());
    assert_eq!(aliased.identity(), Some(&alias));
    assert!(matches!(aliased.shape(), Shape::AliasOf(_)));
}

#[tokio::test]
async fn forward_resolves_once_for_every_clone() {
    let (placeholder, resolver) = forward();
    let Shape::Forward(pending) = placeholder.shape() else {
        panic!("forward shape expected");
    };
    let other: Forward = pending.clone();

    assert!(pending.peek().is_none());

    let target = number();
    resolver.resolve(&target);

    let first = pending.resolved().await;
    let second = other.resolved().await;

    assert!(first.is_some_and(|meta| Arc::ptr_eq(&meta, &target)));
    assert!(second.is_some_and(|meta| Arc::ptr_eq(&meta, &target)));
    assert!(pending.peek().is_some());
}

#[tokio::test]
async fn dropped_resolver_reports_none() {
    let (placeholder, resolver) = forward();
    drop(resolver);

    let Shape::Forward(pending) = placeholder.shape() else {
        panic!("forward shape expected");
    };

    assert!(pending.resolved().await.is_none());
}

#[tokio::test]
async fn deferred_future_resolves() {
    let deferred = defer(async { string() });
    let Shape::Forward(pending) = deferred.shape() else {
        panic!("forward shape expected");
    };

    let resolved = pending.resolved().await;

    assert!(resolved.is_some_and(|meta| meta.identity() == Some(&Builtin::String.identity())));
}
