use serde::{Deserialize, Serialize};

use crate::layout::StoreLayout;
use crate::StoreError;

pub const DEFAULT_BLOB_KEY: &str = "clientes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_blob_key")]
    pub blob_key: String,
}

fn default_blob_key() -> String {
    DEFAULT_BLOB_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            name: None,
            blob_key: default_blob_key(),
        }
    }
}

/// The key names a file inside `kv/`, so it must be a single plain file stem.
fn validate_blob_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        return Err(StoreError::Config("blob_key must not be empty".into()));
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(StoreError::Config(format!(
            "blob_key {key:?} must not contain path separators or '..'"
        )));
    }
    Ok(())
}

pub fn write_config(layout: &StoreLayout, config: &StoreConfig) -> Result<(), StoreError> {
    validate_blob_key(&config.blob_key)?;
    let toml_str =
        toml::to_string_pretty(config).map_err(|e| StoreError::Config(e.to_string()))?;
    std::fs::write(layout.config_file(), toml_str)?;
    Ok(())
}

pub fn read_config(layout: &StoreLayout) -> Result<StoreConfig, StoreError> {
    let path = layout.config_file();
    if !path.exists() {
        return Ok(StoreConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let config: StoreConfig =
        toml::from_str(&content).map_err(|e| StoreError::Config(e.to_string()))?;
    validate_blob_key(&config.blob_key)?;
    Ok(config)
}
