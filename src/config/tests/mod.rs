//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization and import loading.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    config::{ConfigError, DocsConfig, LogLevel, OutputConfig},
    docgen::DocGenOptions,
};

#[test]
fn config_default() {
    let config = DocsConfig::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.docgen.max_depth, None);
    assert!(config.docgen.inline.is_empty());
    assert_eq!(config.output.title, None);
}

#[test]
fn config_empty_toml() {
    let config = DocsConfig::from_toml_str("").unwrap();

    assert_eq!(config, DocsConfig::default());
}

#[test]
fn config_full_toml() {
    let config = DocsConfig::from_toml_str(
        r#"
        [general]
        log_level = "debug"

        [docgen]
        max_depth = 32

        [docgen.inline]
        Email = true
        string = false

        [output]
        title = "API"
        "#,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.docgen.max_depth, Some(32));
    assert_eq!(config.docgen.inline.get("Email"), Some(&true));
    assert_eq!(config.docgen.inline.get("string"), Some(&false));
    assert_eq!(config.output.title.as_deref(), Some("API"));
}

#[test]
fn log_level_directive_targets_this_crate() {
    assert_eq!(LogLevel::Debug.directive(), "schemadoc=debug");
    assert_eq!(LogLevel::default().to_string(), "info");
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = DocsConfig::default();
    original.docgen.inline.insert("User".to_string(), true);
    original.general.log_level = LogLevel::Trace;

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("[general]"));

    assert_eq!(DocsConfig::from_toml_str(&toml_str).unwrap(), original);
}

#[test]
fn config_invalid_toml() {
    let result = DocsConfig::from_toml_str("[general\nmissing closing bracket");

    assert!(matches!(
        result,
        Err(ConfigError::TomlParseError { ref location, .. }) if location == "string"
    ));
}

#[test]
fn config_invalid_log_level() {
    let result = DocsConfig::from_toml_str("[general]\nlog_level = \"loud\"");

    assert!(result.is_err());
}

#[test]
fn docgen_config_becomes_options() {
    let config = DocsConfig::from_toml_str("[docgen]\nmax_depth = 4\ninline = { Money = true }")
        .unwrap();

    let options = DocGenOptions::from(&config.docgen);

    assert_eq!(options.max_depth, Some(4));
    assert_eq!(options.inline_by_name.get("Money"), Some(&true));
    assert!(options.inline_overrides.is_empty());
}

#[test]
fn output_title_fallbacks() {
    let configured = OutputConfig {
        title: Some("Configured".to_string()),
    };

    assert_eq!(configured.resolve_title(Some("Schema")), "Configured");
    assert_eq!(OutputConfig::default().resolve_title(Some("Schema")), "Schema");
    assert_eq!(OutputConfig::default().resolve_title(None), "Schema Reference");
}

#[test]
fn load_merges_imports_with_main_winning() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("base.toml"),
        "[docgen]\nmax_depth = 8\n\n[docgen.inline]\nEmail = true\n\n[output]\ntitle = \"Base\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "imports = [\"@base\"]\n\n[output]\ntitle = \"Main\"\n\n[docgen.inline]\nUser = false\n",
    )
    .unwrap();

    let config = DocsConfig::load(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.docgen.max_depth, Some(8));
    assert_eq!(config.docgen.inline.get("Email"), Some(&true));
    assert_eq!(config.docgen.inline.get("User"), Some(&false));
    assert_eq!(config.output.title.as_deref(), Some("Main"));
}

#[test]
fn load_detects_circular_imports() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.toml"), "imports = [\"@b\"]\n").unwrap();
    fs::write(dir.path().join("b.toml"), "imports = [\"@a\"]\n").unwrap();

    let result = DocsConfig::load(&dir.path().join("a.toml"));

    match result {
        Err(ConfigError::CircularImport { chain }) => {
            assert_eq!(chain, "a.toml -> b.toml -> a.toml");
        }
        other => panic!("expected circular import error, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_import() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "imports = [\"@missing\"]\n").unwrap();

    let result = DocsConfig::load(&dir.path().join("config.toml"));

    assert!(matches!(result, Err(ConfigError::ImportError { .. })));
}

#[test]
fn load_reports_missing_file() {
    let dir = TempDir::new().unwrap();

    let result = DocsConfig::load(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(ConfigError::IoError { .. })));
}
