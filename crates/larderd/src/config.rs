//! Configuration for larderd.
//!
//! Loads settings from /etc/larder/config.toml or uses defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/larder/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LarderConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path to the bundled recipe JSON
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,
}

fn default_listen_addr() -> String {
    // Localhost only; a reverse proxy fronts this in deployment
    "127.0.0.1:7860".to_string()
}

fn default_recipes_path() -> String {
    "data/recipes.json".to_string()
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            recipes_path: default_recipes_path(),
        }
    }
}

impl LarderConfig {
    /// Load from a toml file, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config at {} ({}), using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LarderConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:7860");
        assert_eq!(config.recipes_path, "data/recipes.json");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: LarderConfig = toml::from_str("listen_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.recipes_path, "data/recipes.json");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = LarderConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.listen_addr, default_listen_addr());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not = [valid").unwrap();
        let config = LarderConfig::load_or_default(file.path());
        assert_eq!(config.recipes_path, default_recipes_path());
    }
}
