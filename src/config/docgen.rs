use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Documentation generator settings.
///
/// ```toml
/// [docgen]
/// max_depth = 64
///
/// [docgen.inline]
/// Email = true
/// string = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct DocgenConfig {
    /// Maximum schema nesting depth before generation fails. Unlimited when
    /// not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Inlining decisions by schema name. `true` embeds the schema wherever
    /// it is used, `false` gives it its own section.
    #[serde(default)]
    pub inline: HashMap<String, bool>,
}
