// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "LISTING_GALLERY_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub ui: UiConfigYaml,
    #[serde(default)]
    pub timing: TimingConfigYaml,
    #[serde(default)]
    pub defaults: DefaultsConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub modal_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfigYaml {
    pub mouse_enabled: Option<bool>,
    pub tick_rate_ms: Option<u64>,
    pub toast_ttl_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimingConfigYaml {
    pub tour_launch_delay_ms: Option<u64>,
    pub drone_launch_delay_ms: Option<u64>,
    pub submit_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfigYaml {
    pub simulate_submit_failure: Option<bool>,
    pub open_command: Option<String>,
    pub catalog_path: Option<PathBuf>,
}

/// Config path from the environment, else `src/config.yaml` in the crate
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ConfigFile = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
