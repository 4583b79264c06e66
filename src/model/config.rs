use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory. Everything is
/// optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Dark-palette color overrides, keyed by theme field name ("#RRGGBB").
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Light-palette color overrides.
    #[serde(default)]
    pub light_colors: HashMap<String, String>,
}
