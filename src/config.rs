use crate::error::{CgpaError, Result};
use crate::types::config::CgpaConfig;
use crate::types::scores::ScoreFile;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "cgpa.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cgpa/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cgpa/config.toml";

pub fn load_config(root: &Path) -> Result<CgpaConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(root: &Path, global_path: Option<&Path>) -> Result<CgpaConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CgpaConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CgpaError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_score_file(path: &Path) -> Result<ScoreFile> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CgpaError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CgpaError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
