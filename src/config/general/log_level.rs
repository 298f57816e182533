use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Verbosity of schemadoc's own log output when `RUST_LOG` is unset.
///
/// `debug` reports each named schema as its entry is started; `trace` adds
/// every node built and every cache hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures only.
    Error,
    /// Failures and warnings.
    Warn,
    /// One summary line per generated page.
    #[default]
    Info,
    /// Named schemas as they are generated.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Name of the level as used in filter directives.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Filter directive applying this level to schemadoc only, leaving
    /// dependencies at their defaults.
    pub fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.as_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
