//! Plugin configuration
//!
//! Read from `plugins.capture-exclusion` in `tauri.conf.json`:
//!
//! ```json
//! { "plugins": { "capture-exclusion": { "excludeWindows": ["main"] } } }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Labels of windows excluded from capture as soon as they are created
    pub exclude_windows: Vec<String>,
}

impl Config {
    pub fn excludes(&self, label: &str) -> bool {
        self.exclude_windows.iter().any(|l| l == label)
    }
}
