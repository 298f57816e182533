use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::{
    doc::DocNode,
    meta::{Field, Identity, LiteralValue, Meta, MetaNode, Shape, factories},
};

use super::ImportError;

const DEFINITION_KEYWORDS: [&str; 2] = ["$defs", "definitions"];

const ROOT_POINTER: &str = "#";

/// Metadata imported from one JSON Schema document.
#[derive(Debug, Clone)]
pub struct ImportedSchema {
    /// The document's root schema.
    pub root: Meta,
    /// The root's `title`, if any.
    pub title: Option<String>,
    /// Named definitions, keyed by their name under `$defs`, in document
    /// order.
    pub definitions: Vec<(String, Meta)>,
}

/// Imports a JSON Schema document.
///
/// Every definition is named after its `title`, or its key when it has
/// none. The root stays anonymous unless it refers to itself through
/// `"$ref": "#"`, in which case it is named after its title.
///
/// # Errors
///
/// Returns `ImportError::UnresolvedRef` for a `$ref` that is not `#` or a
/// definition of this document, `ImportError::Unsupported` for tuple arrays,
/// composite constants and schemas that accept nothing, and
/// `ImportError::InvalidSchema` for malformed keywords.
#[instrument(skip_all)]
pub fn import(schema: &Value) -> Result<ImportedSchema, ImportError> {
    let mut importer = Importer::default();
    let mut pending = Vec::new();

    for keyword in DEFINITION_KEYWORDS {
        let Some(definitions) = schema.get(keyword) else {
            continue;
        };
        let definitions = definitions
            .as_object()
            .ok_or_else(|| invalid(&format!("#/{keyword}"), "definitions must be an object"))?;

        for (key, definition) in definitions {
            let pointer = format!("#/{keyword}/{}", escape(key));
            let (placeholder, resolver) = factories::forward();
            importer.refs.insert(pointer.clone(), placeholder);
            pending.push((key, definition, pointer, resolver));
        }
    }

    let (root_placeholder, root_resolver) = factories::forward();
    importer.refs.insert(ROOT_POINTER.to_string(), root_placeholder);

    let mut definitions = Vec::with_capacity(pending.len());
    for (key, definition, pointer, resolver) in pending {
        let name = title_of(definition).unwrap_or(key.as_str());
        let meta = factories::named(
            importer.convert(definition, &pointer)?,
            Identity::named(name),
        );
        debug!(name, %pointer, "imported definition");

        resolver.resolve(&meta);
        definitions.push((key.clone(), meta));
    }

    let title = title_of(schema).map(str::to_owned);
    let mut root = importer.convert(schema, ROOT_POINTER)?;
    if importer.root_referenced {
        let name = title.as_deref().unwrap_or("Root");
        root = factories::named(root, Identity::named(name));
    }
    root_resolver.resolve(&root);

    info!(
        definitions = definitions.len(),
        kind = root.shape().kind(),
        "imported JSON Schema"
    );

    Ok(ImportedSchema {
        root,
        title,
        definitions,
    })
}

/// Parses and imports a JSON Schema document.
///
/// # Errors
///
/// Returns `ImportError::Json` if `json` does not parse, and otherwise the
/// errors of [`import`].
pub fn import_str(json: &str) -> Result<ImportedSchema, ImportError> {
    let schema: Value = serde_json::from_str(json)?;
    import(&schema)
}

/// Imports the JSON Schema that `schemars` generates for `T`.
///
/// # Errors
///
/// Returns the errors of [`import`].
pub fn import_type<T: JsonSchema>() -> Result<ImportedSchema, ImportError> {
    let schema = schemars::schema_for!(T);
    import(schema.as_value())
}

#[derive(Default)]
struct Importer {
    refs: HashMap<String, Meta>,
    root_referenced: bool,
}

impl Importer {
    fn convert(&mut self, schema: &Value, pointer: &str) -> Result<Meta, ImportError> {
        let keywords = match schema {
            Value::Bool(true) => return Ok(factories::unknown()),
            Value::Bool(false) => {
                return Err(unsupported(pointer, "the `false` schema accepts no value"));
            }
            Value::Object(keywords) => keywords,
            other => {
                return Err(invalid(
                    pointer,
                    &format!("expected an object or a boolean, found {other}"),
                ));
            }
        };

        let meta = self.convert_shape(keywords, pointer)?;
        Ok(describe(meta, keywords))
    }

    fn convert_shape(
        &mut self,
        keywords: &Map<String, Value>,
        pointer: &str,
    ) -> Result<Meta, ImportError> {
        if let Some(reference) = keywords.get("$ref") {
            return self.reference(reference, pointer);
        }
        if let Some(value) = keywords.get("const") {
            return constant(value, &format!("{pointer}/const"));
        }
        if let Some(values) = keywords.get("enum") {
            return enumeration(values, &format!("{pointer}/enum"));
        }
        for keyword in ["anyOf", "oneOf"] {
            if let Some(members) = keywords.get(keyword) {
                let members = self.convert_all(members, &format!("{pointer}/{keyword}"))?;
                return Ok(one_of(members));
            }
        }
        if let Some(members) = keywords.get("allOf") {
            let members = self.convert_all(members, &format!("{pointer}/allOf"))?;
            return Ok(all_of(members));
        }

        match keywords.get("type") {
            None if keywords.contains_key("properties") => self.object(keywords, pointer),
            None => Ok(factories::unknown()),
            Some(Value::String(kind)) => self.typed(kind, keywords, pointer),
            Some(Value::Array(kinds)) => {
                let members = kinds
                    .iter()
                    .map(|kind| match kind {
                        Value::String(kind) => self.typed(kind, keywords, pointer),
                        _ => Err(invalid(pointer, "`type` entries must be strings")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(one_of(members))
            }
            Some(_) => Err(invalid(pointer, "`type` must be a string or an array")),
        }
    }

    fn typed(
        &mut self,
        kind: &str,
        keywords: &Map<String, Value>,
        pointer: &str,
    ) -> Result<Meta, ImportError> {
        match kind {
            "string" => Ok(factories::string()),
            "number" | "integer" => Ok(factories::number()),
            "boolean" => Ok(factories::boolean()),
            "null" => Ok(factories::null()),
            "object" => self.object(keywords, pointer),
            "array" => self.array(keywords, pointer),
            other => Err(invalid(pointer, &format!("unknown type '{other}'"))),
        }
    }

    fn object(
        &mut self,
        keywords: &Map<String, Value>,
        pointer: &str,
    ) -> Result<Meta, ImportError> {
        let required: Vec<&str> = keywords
            .get("required")
            .and_then(Value::as_array)
            .map(|required| required.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let additional = match keywords.get("additionalProperties") {
            Some(schema @ Value::Object(_)) => {
                Some(self.convert(schema, &format!("{pointer}/additionalProperties"))?)
            }
            _ => None,
        };

        let Some(properties) = keywords.get("properties").and_then(Value::as_object) else {
            return Ok(additional.map_or_else(factories::object, factories::record));
        };

        let fields = properties
            .iter()
            .map(|(name, property)| {
                let meta =
                    self.convert(property, &format!("{pointer}/properties/{}", escape(name)))?;
                Ok(if required.contains(&name.as_str()) {
                    Field::required(name.as_str(), meta)
                } else {
                    Field::optional(name.as_str(), meta)
                })
            })
            .collect::<Result<Vec<_>, ImportError>>()?;

        let record = factories::record_fields(fields);
        Ok(match additional {
            Some(value) => factories::intersect(record, factories::record(value)),
            None => record,
        })
    }

    fn array(
        &mut self,
        keywords: &Map<String, Value>,
        pointer: &str,
    ) -> Result<Meta, ImportError> {
        if keywords.contains_key("prefixItems") {
            return Err(unsupported(pointer, "tuple arrays (`prefixItems`)"));
        }

        match keywords.get("items") {
            None => Ok(factories::array(factories::unknown())),
            Some(Value::Array(_)) => Err(unsupported(pointer, "tuple arrays (`items` array)")),
            Some(items) => {
                let item = self.convert(items, &format!("{pointer}/items"))?;
                Ok(factories::array(item))
            }
        }
    }

    fn convert_all(&mut self, members: &Value, pointer: &str) -> Result<Vec<Meta>, ImportError> {
        let members = members
            .as_array()
            .filter(|members| !members.is_empty())
            .ok_or_else(|| invalid(pointer, "expected a non-empty array of schemas"))?;

        members
            .iter()
            .enumerate()
            .map(|(index, member)| self.convert(member, &format!("{pointer}/{index}")))
            .collect()
    }

    fn reference(&mut self, reference: &Value, pointer: &str) -> Result<Meta, ImportError> {
        let reference = reference
            .as_str()
            .ok_or_else(|| invalid(pointer, "`$ref` must be a string"))?;

        if reference == ROOT_POINTER {
            self.root_referenced = true;
        }

        self.refs
            .get(reference)
            .cloned()
            .ok_or_else(|| ImportError::UnresolvedRef {
                reference: reference.to_string(),
                pointer: pointer.to_string(),
            })
    }
}

fn constant(value: &Value, pointer: &str) -> Result<Meta, ImportError> {
    match value {
        Value::Null => Ok(factories::null()),
        Value::Array(_) | Value::Object(_) => {
            Err(unsupported(pointer, "only scalar constants are supported"))
        }
        scalar => LiteralValue::deserialize(scalar)
            .map(factories::literal)
            .map_err(|e| unsupported(pointer, &e.to_string())),
    }
}

fn enumeration(values: &Value, pointer: &str) -> Result<Meta, ImportError> {
    let values = values
        .as_array()
        .ok_or_else(|| invalid(pointer, "`enum` must be an array"))?;
    if values.is_empty() {
        return Err(unsupported(pointer, "an empty `enum` accepts no value"));
    }

    let members = values
        .iter()
        .enumerate()
        .map(|(index, value)| constant(value, &format!("{pointer}/{index}")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(one_of(members))
}

fn one_of(members: Vec<Meta>) -> Meta {
    match <[Meta; 1]>::try_from(members) {
        Ok([member]) => member,
        Err(members) => factories::union(members),
    }
}

fn all_of(members: Vec<Meta>) -> Meta {
    match <[Meta; 1]>::try_from(members) {
        Ok([member]) => member,
        Err(members) => MetaNode::new(Shape::AllOf(members)),
    }
}

/// Attaches `description` and `default`, description first.
fn describe(meta: Meta, keywords: &Map<String, Value>) -> Meta {
    let default = keywords.get("default").map(|value| {
        DocNode::seq([
            DocNode::text("Defaults to "),
            DocNode::code(value.to_string()),
            DocNode::text("."),
        ])
    });
    let description = keywords
        .get("description")
        .and_then(Value::as_str)
        .map(DocNode::text);

    default.into_iter().chain(description).fold(meta, annotate)
}

/// Annotated primitives keep their identity, so their documentation would
/// be cached and shared by every use of the primitive. Wrap them instead.
fn annotate(meta: Meta, content: DocNode) -> Meta {
    if matches!(meta.shape(), Shape::Primitive(_)) {
        factories::parse(meta, content)
    } else {
        factories::doc(meta, content)
    }
}

fn title_of(schema: &Value) -> Option<&str> {
    schema.get("title").and_then(Value::as_str)
}

fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn invalid(pointer: &str, details: &str) -> ImportError {
    ImportError::InvalidSchema {
        pointer: pointer.to_string(),
        details: details.to_string(),
    }
}

fn unsupported(pointer: &str, details: &str) -> ImportError {
    ImportError::Unsupported {
        pointer: pointer.to_string(),
        details: details.to_string(),
    }
}
