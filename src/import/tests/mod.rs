//! Unit tests for the JSON Schema importer.
//!
//! Imported schemas are checked through the plain-text rendering of their
//! generated documentation.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use schemars::JsonSchema;
use serde_json::json;

use crate::{
    doc::render,
    docgen::DocGenerator,
    import::{ImportError, import, import_str, import_type},
    meta::Meta,
};

async fn rendered(meta: &Meta) -> String {
    let generated = DocGenerator::new().generate(meta).await.unwrap();
    render::plain(generated.content().unwrap())
}

#[tokio::test]
async fn properties_keep_order_and_requiredness() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Display name." },
            "age": { "type": "integer" }
        },
        "required": ["name"]
    });

    let imported = import(&schema).unwrap();

    assert_eq!(
        rendered(&imported.root).await,
        "A key-value structure.\n\
         - (required) name: A string value.\n\
         \x20 Display name.\n\
         - (optional) age: A numeric value.\n"
    );
}

#[tokio::test]
async fn described_primitives_do_not_share_documentation() {
    let schema = json!({
        "type": "object",
        "properties": {
            "first": { "type": "string", "description": "Only here." },
            "second": { "type": "string" }
        }
    });

    let imported = import(&schema).unwrap();
    let text = rendered(&imported.root).await;

    assert_eq!(text.matches("Only here.").count(), 1);
    assert!(text.ends_with("- (optional) second: A string value.\n"));
}

#[tokio::test]
async fn recursive_definitions_link_to_themselves() {
    let schema = json!({
        "title": "Forest",
        "type": "object",
        "properties": {
            "root": { "$ref": "#/$defs/Node" }
        },
        "$defs": {
            "Node": {
                "type": "object",
                "properties": {
                    "value": { "type": "number" },
                    "children": { "type": "array", "items": { "$ref": "#/$defs/Node" } }
                },
                "required": ["value", "children"]
            }
        }
    });

    let imported = import(&schema).unwrap();
    let generator = DocGenerator::new();
    let generated = generator.generate(&imported.root).await.unwrap();

    assert_eq!(imported.title.as_deref(), Some("Forest"));
    assert_eq!(
        render::plain(generated.content().unwrap()),
        "A key-value structure.\n- (optional) root: Node\n"
    );

    let entries = generator.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name(), "Node");
    assert_eq!(
        render::plain(entries[0].content().unwrap()),
        "A key-value structure.\n\
         - (required) value: A numeric value.\n\
         - (required) children:\n\
         \x20 An array.\n\
         \x20 - Element: Node\n"
    );
    assert!(Arc::ptr_eq(&entries[0].content().unwrap().links()[0], &entries[0]));
}

#[tokio::test]
async fn definitions_are_named_by_title() {
    let schema = json!({
        "definitions": {
            "user": { "title": "User", "type": "object" }
        },
        "$ref": "#/definitions/user"
    });

    let imported = import(&schema).unwrap();

    assert_eq!(imported.definitions.len(), 1);
    assert_eq!(imported.definitions[0].0, "user");
    assert_eq!(
        imported.definitions[0].1.identity().map(|identity| identity.name()),
        Some("User")
    );
    let generated = DocGenerator::new().generate(&imported.root).await.unwrap();
    assert_eq!(render::plain(generated.content().unwrap()), "User\n");
}

#[tokio::test]
async fn root_self_reference_names_the_root() {
    let schema = json!({
        "title": "List",
        "type": "object",
        "properties": { "next": { "$ref": "#" } }
    });

    let imported = import(&schema).unwrap();
    let generated = DocGenerator::new().generate(&imported.root).await.unwrap();

    let entry = generated.as_entry().unwrap();
    assert_eq!(entry.name(), "List");
    assert!(Arc::ptr_eq(&entry.content().unwrap().links()[0], entry));
}

#[tokio::test]
async fn enums_become_unions_of_literals() {
    let imported = import(&json!({ "enum": ["a", 2, null] })).unwrap();

    assert_eq!(
        rendered(&imported.root).await,
        "One of the following.\n- The literal \"a\"\n- The literal 2\n- The value null.\n"
    );
}

#[tokio::test]
async fn const_becomes_literal() {
    let imported = import(&json!({ "const": true })).unwrap();

    assert_eq!(rendered(&imported.root).await, "The literal true\n");
}

#[tokio::test]
async fn scalar_constants_keep_their_type() {
    for (value, expected) in [
        (json!(-3), "The literal -3\n"),
        (json!(1.5), "The literal 1.5\n"),
        (json!("a`b"), "The literal \"a`b\"\n"),
    ] {
        let imported = import(&json!({ "const": value })).unwrap();

        assert_eq!(rendered(&imported.root).await, expected);
    }
}

#[test]
fn structured_constants_are_unsupported() {
    let result = import(&json!({ "const": { "mode": "fast" } }));

    assert!(matches!(result, Err(ImportError::Unsupported { .. })));
}

#[tokio::test]
async fn nullable_types_become_unions() {
    let any_of = json!({ "anyOf": [{ "type": "string" }, { "type": "null" }] });
    let type_array = json!({ "type": ["string", "null"] });
    let expected = "One of the following.\n- A string value.\n- The value null.\n";

    assert_eq!(rendered(&import(&any_of).unwrap().root).await, expected);
    assert_eq!(rendered(&import(&type_array).unwrap().root).await, expected);
}

#[tokio::test]
async fn additional_properties_become_dictionaries() {
    let schema = json!({ "type": "object", "additionalProperties": { "type": "boolean" } });

    let imported = import(&schema).unwrap();

    assert_eq!(
        rendered(&imported.root).await,
        "A dictionary.\n- Key: A string value.\n- Value: A boolean value.\n"
    );
}

#[tokio::test]
async fn description_precedes_default() {
    let schema = json!({ "type": "integer", "description": "Port.", "default": 8080 });

    let imported = import(&schema).unwrap();

    assert_eq!(
        rendered(&imported.root).await,
        "A numeric value.\nPort.\nDefaults to 8080.\n"
    );
}

#[tokio::test]
async fn boolean_and_empty_schemas_accept_anything() {
    assert_eq!(
        rendered(&import(&json!(true)).unwrap().root).await,
        "A value of any type.\n"
    );
    assert_eq!(
        rendered(&import(&json!({})).unwrap().root).await,
        "A value of any type.\n"
    );
}

#[tokio::test]
async fn derived_types_import() {
    /// A server to connect to.
    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Server {
        /// Host name.
        host: String,
        port: Option<u16>,
        tags: Vec<String>,
    }

    let imported = import_type::<Server>().unwrap();
    let text = rendered(&imported.root).await;

    assert_eq!(imported.title.as_deref(), Some("Server"));
    assert!(text.starts_with("A key-value structure.\n"), "{text}");
    assert!(text.contains("- (required) host: A string value.\n  Host name.\n"), "{text}");
    assert!(text.contains("- (optional) port:\n  One of the following."), "{text}");
    assert!(text.contains("- (required) tags:\n  An array."), "{text}");
    assert!(text.ends_with("A server to connect to.\n"), "{text}");
}

#[test]
fn unresolved_reference_is_reported() {
    let schema = json!({ "properties": { "x": { "$ref": "#/$defs/Missing" } } });

    match import(&schema) {
        Err(ImportError::UnresolvedRef { reference, pointer }) => {
            assert_eq!(reference, "#/$defs/Missing");
            assert_eq!(pointer, "#/properties/x");
        }
        other => panic!("expected unresolved reference, got {other:?}"),
    }
}

#[test]
fn false_schema_is_unsupported() {
    let schema = json!({ "type": "array", "items": false });

    assert!(matches!(
        import(&schema),
        Err(ImportError::Unsupported { ref pointer, .. }) if pointer == "#/items"
    ));
}

#[test]
fn tuple_arrays_are_unsupported() {
    let schema = json!({ "type": "array", "prefixItems": [{ "type": "string" }] });

    assert!(matches!(import(&schema), Err(ImportError::Unsupported { .. })));
}

#[test]
fn unknown_type_is_invalid() {
    let schema = json!({ "type": "decimal" });

    assert!(matches!(import(&schema), Err(ImportError::InvalidSchema { .. })));
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(import_str("{ \"type\": "), Err(ImportError::Json(_))));
}
