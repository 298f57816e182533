use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Heading used when neither the configuration nor the schema has a title.
pub const DEFAULT_TITLE: &str = "Schema Reference";

/// Rendered page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct OutputConfig {
    /// Page heading. Falls back to the schema's `title`, then to
    /// "Schema Reference".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl OutputConfig {
    /// Heading for a page documenting a schema titled `schema_title`.
    pub fn resolve_title(&self, schema_title: Option<&str>) -> String {
        self.title
            .as_deref()
            .or(schema_title)
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }
}
