mod circular_detection;
mod merging;

use std::{
    fs,
    path::{Path, PathBuf},
};

use toml::Value;
use tracing::debug;

use circular_detection::CircularDetector;
use merging::merge_toml_configs;

use super::{ConfigError, DocsConfig};

impl DocsConfig {
    /// Loads a configuration file, following its imports.
    ///
    /// Imports are listed as `imports = ["@shared", "@../base.toml"]`, paths
    /// relative to the importing file, `.toml` added when there is no
    /// extension. Imported files are merged first, in order, and the
    /// importing file wins on conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - Any imported files cannot be loaded
    /// - The merged configuration is invalid
    /// - Circular imports are detected
    pub fn load(path: &Path) -> Result<DocsConfig, ConfigError> {
        let canonical_path = path
            .canonicalize()
            .map_err(|e| ConfigError::io(format!("failed to resolve path: {e}"), path))?;

        let mut detector = CircularDetector::new();
        let merged = load_with_tracking(&canonical_path, &mut detector)?;

        debug!(path = %canonical_path.display(), "configuration loaded");

        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Validation {
                details: e.to_string(),
            })
    }
}

fn load_with_tracking(path: &Path, detector: &mut CircularDetector) -> Result<Value, ConfigError> {
    detector.detect_circular_import(path)?;
    detector.push_to_chain(path);

    let result = load_file(path, detector);
    detector.pop_from_chain();
    result
}

fn load_file(path: &Path, detector: &mut CircularDetector) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;
    let value: Value =
        toml::from_str(&content).map_err(|e| ConfigError::toml_parse(e, Some(path)))?;

    let imported = extract_import_paths(&value)
        .iter()
        .map(|import| load_import(path, import, detector))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(merge_toml_configs(imported, strip_imports(value)))
}

fn load_import(
    base_path: &Path,
    import: &str,
    detector: &mut CircularDetector,
) -> Result<Value, ConfigError> {
    let resolved = resolve_import_path(base_path, import)?;
    let canonical = resolved
        .canonicalize()
        .map_err(|e| ConfigError::import(e, &resolved))?;

    debug!(import = %canonical.display(), "loading configuration import");

    load_with_tracking(&canonical, detector)
}

fn extract_import_paths(value: &Value) -> Vec<String> {
    value
        .get("imports")
        .and_then(Value::as_array)
        .map(|imports| {
            imports
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|import| import.strip_prefix('@'))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn strip_imports(value: Value) -> Value {
    match value {
        Value::Table(mut table) => {
            table.remove("imports");
            Value::Table(table)
        }
        value => value,
    }
}

fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf, ConfigError> {
    let parent_dir = base_path.parent().ok_or_else(|| ConfigError::ImportError {
        path: base_path.to_path_buf(),
        details: "invalid base path - no parent directory".to_string(),
    })?;

    let mut import_path_buf = PathBuf::from(import_path);
    if import_path_buf.extension().is_none() {
        import_path_buf.set_extension("toml");
    }

    Ok(parent_dir.join(import_path_buf))
}
