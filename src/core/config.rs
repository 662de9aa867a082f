use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_scenarios_url")]
    pub scenarios_url: String,

    #[serde(default = "default_roles_url")]
    pub roles_url: String,

    #[serde(default = "default_generate_url")]
    pub generate_url: String,

    /// Role checked before the user touches the checklist.
    #[serde(default = "default_role")]
    pub default_role: String,

    #[serde(default)]
    pub unattended: bool,

    /// Preset selection, only read in unattended mode.
    #[serde(default)]
    pub scenario_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(target_arch = "wasm32")]
fn default_scenarios_url() -> String {
    "../data/scenarios.json".to_string()
}
#[cfg(not(target_arch = "wasm32"))]
fn default_scenarios_url() -> String {
    "data/scenarios.json".to_string()
}
#[cfg(target_arch = "wasm32")]
fn default_roles_url() -> String {
    "../data/roles.json".to_string()
}
#[cfg(not(target_arch = "wasm32"))]
fn default_roles_url() -> String {
    "data/roles.json".to_string()
}
fn default_generate_url() -> String {
    "http://localhost:8765/generate".to_string()
}
fn default_role() -> String {
    "mastermind".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenarios_url: default_scenarios_url(),
            roles_url: default_roles_url(),
            generate_url: default_generate_url(),
            default_role: default_role(),
            unattended: false,
            scenario_id: None,
            roles: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse config")
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Falls back to defaults when the file does not exist.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid {}", path.display()))
    }
}
