use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Tracks import chains for circular detection
#[derive(Default)]
pub struct CircularDetector {
    import_chain: Vec<PathBuf>,
}

impl CircularDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an error if visiting `path` would close a cycle
    pub fn detect_circular_import(&self, path: &Path) -> Result<(), ConfigError> {
        if !self.import_chain.iter().any(|visited| visited == path) {
            return Ok(());
        }

        let chain: Vec<String> = self
            .import_chain
            .iter()
            .map(|p| file_name(p))
            .chain([file_name(path)])
            .collect();

        Err(ConfigError::CircularImport {
            chain: chain.join(" -> "),
        })
    }

    pub fn push_to_chain(&mut self, path: &Path) {
        self.import_chain.push(path.to_path_buf());
    }

    pub fn pop_from_chain(&mut self) {
        self.import_chain.pop();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
