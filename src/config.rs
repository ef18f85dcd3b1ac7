use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UpmDevConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsSection {
    #[serde(default)]
    pub package: PackageDefaults,
}

/// Values filled into `new` whenever the matching flag is omitted.
#[derive(Debug, Default, Deserialize)]
pub struct PackageDefaults {
    pub author: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

pub fn load() -> Result<UpmDevConfig> {
    let path_override = std::env::var("UPM_DEV_CONFIG").ok();
    load_from(path_override.as_deref())
}

pub fn load_from(path_override: Option<&str>) -> Result<UpmDevConfig> {
    let Some(path) = config_path_override(path_override) else {
        return Ok(UpmDevConfig::default());
    };

    if !path.exists() {
        return Ok(UpmDevConfig::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: UpmDevConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(config)
}

fn config_path_override(path_override: Option<&str>) -> Option<PathBuf> {
    if let Some(raw) = path_override {
        return Some(PathBuf::from(raw));
    }
    config_path()
}

pub fn config_path() -> Option<PathBuf> {
    // Prefer XDG-style config path, but fall back to legacy ~/.upm-dev/config.toml.
    if let Some(mut dir) = dirs::config_dir() {
        dir.push("upm-dev");
        dir.push("config.toml");
        if dir.exists() {
            return Some(dir);
        }
    }
    dirs::home_dir().map(|mut home| {
        home.push(".upm-dev");
        home.push("config.toml");
        home
    })
}
