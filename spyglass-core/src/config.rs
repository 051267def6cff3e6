//! Plugin configuration.

use std::{fs, path::PathBuf, sync::LazyLock};

use serde::Deserialize;

/// The configuration file read at startup, JSON5 so admins can comment it.
const CONFIG_PATH: &str = "spyglass.json5";

/// Spyglass settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpyglassConfig {
    /// Directory holding persisted per-player inventory documents.
    pub data_dir: PathBuf,
    /// Maximum stack size newly created virtual containers report.
    pub default_max_stack_size: i32,
    /// Whether closing the last view of an offline player's inventory
    /// persists it immediately.
    pub save_offline_on_close: bool,
}

impl Default for SpyglassConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("plugins/spyglass/playerdata"),
            default_max_stack_size: 99,
            save_offline_on_close: true,
        }
    }
}

/// The global configuration, loaded on first use.
pub static SPYGLASS_CONFIG: LazyLock<SpyglassConfig> = LazyLock::new(|| {
    match fs::read_to_string(CONFIG_PATH) {
        Ok(raw) => match serde_json5::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("Failed to parse {CONFIG_PATH}: {error}. Using defaults");
                SpyglassConfig::default()
            }
        },
        // Missing config is the common case; defaults apply.
        Err(_) => SpyglassConfig::default(),
    }
});
