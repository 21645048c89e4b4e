use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "QUICKARGS_CONFIG";

/// Defaults for `quickargs resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Extension filter used when `--ext` is not given. Empty means no filter.
    pub extensions: Vec<String>,
    pub sort: bool,
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let txt = fs::read_to_string(&path).context("Failed to read config")?;
    parse_config(&txt)
}

pub fn parse_config(txt: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str(txt).context("Failed to parse config TOML")?;
    cfg.extensions = cfg
        .extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let txt = toml::to_string_pretty(cfg).context("Failed to serialize config TOML")?;
    fs::write(&path, txt).context("Failed to write config")?;
    Ok(())
}

pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let proj = ProjectDirs::from("dev", "quickargs", "quickargs")
        .ok_or_else(|| anyhow!("Could not determine config directory"))?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Add `ext` unless already present. Returns true if the config changed.
pub fn maybe_add_extension(cfg: &mut Config, ext: String) -> bool {
    if cfg.extensions.iter().any(|e| e == &ext) {
        return false;
    }
    cfg.extensions.push(ext);
    true
}

/// `png` and `.png` both mean `.png`.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
