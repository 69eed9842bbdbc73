use crate::error::{RatingError, Result};
use crate::types::config::{RatingConfig, RatingFileConfig};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "reporate.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".reporate/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/reporate/config.toml";

/// Loads the effective configuration. `explicit` must exist when given;
/// otherwise `reporate.toml` in the working directory is used if present.
pub fn load_config(explicit: Option<&Path>) -> Result<RatingConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let project = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RatingError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    load_config_with_global(&project, global.as_deref())
}

pub(crate) fn load_config_with_global(
    project_path: &Path,
    global_path: Option<&Path>,
) -> Result<RatingConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, project_path)?;
    let project_dir = project_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    merge_file_if_exists(&mut merged, &project_dir.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RatingFileConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RatingError::ConfigParse(e.to_string()))?;
    cfg.resolve()
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "config layer not present");
        return Ok(());
    }
    info!(path = %path.display(), "loading config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RatingError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; `weights` is replaced wholesale so a layer can
/// drop checks named by an earlier one.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) if key != "weights" => merge_toml(existing, value),
                    _ => {
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

/// Effective configuration in its on-disk form.
pub fn render_config(config: &RatingConfig) -> Result<String> {
    Ok(toml::to_string_pretty(&RatingFileConfig::from(config))?)
}
