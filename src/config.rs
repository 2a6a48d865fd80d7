use crate::engine::classify::{DEFAULT_THRESHOLD, DEFAULT_WINDOW};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classification threshold used when a record does not carry one.
    #[serde(default = "default_classify_threshold")]
    pub classify_threshold: f64,
    /// Classification window length used when a record does not carry one.
    #[serde(default = "default_classify_window")]
    pub classify_window: usize,
}

fn default_classify_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_classify_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classify_threshold: default_classify_threshold(),
            classify_window: default_classify_window(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("org", "bioseq", "bioseq-tools") {
            let config_dir = proj_dirs.config_dir();
            let config_path = config_dir.join("config.toml");

            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(proj_dirs) = ProjectDirs::from("org", "bioseq", "bioseq-tools") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;

            let config_path = config_dir.join("config.toml");
            let content = toml::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }
}
