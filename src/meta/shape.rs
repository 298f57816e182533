use std::fmt;

use serde::Deserialize;

use super::{Annotations, Forward, Identity, Meta};

/// Value accepted by a literal schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
}

impl fmt::Display for LiteralValue {
    /// Formats the value the way it would appear in JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Integer(value) => write!(f, "{value}"),
            LiteralValue::Float(value) => write!(f, "{value}"),
            LiteralValue::String(value) => match serde_json::to_string(value) {
                Ok(quoted) => f.write_str(&quoted),
                Err(_) => write!(f, "{value:?}"),
            },
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Integer(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        LiteralValue::Integer(i64::from(value))
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Float(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

/// One field of a [`Shape::Record`].
#[derive(Debug, Clone)]
pub struct Field {
    /// Key of the field.
    pub name: String,
    /// Shape of the field's value.
    pub meta: Meta,
    /// Whether the key must be present.
    pub required: bool,
}

impl Field {
    /// Field that must be present.
    pub fn required(name: impl Into<String>, meta: Meta) -> Self {
        Self {
            name: name.into(),
            meta,
            required: true,
        }
    }

    /// Field that may be absent.
    pub fn optional(name: impl Into<String>, meta: Meta) -> Self {
        Self {
            name: name.into(),
            meta,
            required: false,
        }
    }
}

/// Structural variant of a schema.
///
/// The set is closed; every consumer matches on it exhaustively.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Exactly one value.
    Literal(LiteralValue),
    /// A built-in or custom atomic kind, named by its token.
    Primitive(Identity),
    /// Homogeneous ordered collection.
    Sequence(Meta),
    /// Homogeneous key to value association.
    Mapping {
        /// Shape of the keys.
        key: Meta,
        /// Shape of the values.
        value: Meta,
    },
    /// Fixed keys in declaration order.
    Record(Vec<Field>),
    /// Union of alternatives.
    OneOf(Vec<Meta>),
    /// Intersection of constraints.
    AllOf(Vec<Meta>),
    /// Transform or refinement layered on an upstream shape.
    Derived {
        /// Shape the transform reads.
        upstream: Meta,
        /// Documentation of the transform itself.
        annotation: Annotations,
    },
    /// Placeholder resolved once the referenced schema exists.
    Forward(Forward),
    /// Named re-export of another shape.
    AliasOf(Meta),
}

impl Shape {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Literal(_) => "literal",
            Shape::Primitive(_) => "primitive",
            Shape::Sequence(_) => "sequence",
            Shape::Mapping { .. } => "mapping",
            Shape::Record(_) => "record",
            Shape::OneOf(_) => "one-of",
            Shape::AllOf(_) => "all-of",
            Shape::Derived { .. } => "derived",
            Shape::Forward(_) => "forward",
            Shape::AliasOf(_) => "alias-of",
        }
    }
}
