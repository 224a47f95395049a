use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::addr::RangePolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ips: IpsSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpsSection {
    /// Reject bare-address offsets that wrap past the address space
    pub strict_bare_addresses: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub debug: bool,
}

impl AppConfig {
    /// Load the config from `root`, falling back to defaults when no file
    /// exists. Priority: addrspan.toml > addrspan.json > .addrspan
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let candidates: Vec<PathBuf> = ["addrspan.toml", "addrspan.json", ".addrspan"]
            .iter()
            .map(|name| root.join(name))
            .filter(|path| path.exists())
            .collect();

        match candidates.first() {
            Some(path) => load_config_by_path(path),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        load_config_by_path(path.as_ref())
    }

    pub fn range_policy(&self) -> RangePolicy {
        RangePolicy {
            strict_bare_addresses: self.ips.strict_bare_addresses,
        }
    }
}

fn load_json(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&file)
        .with_context(|| format!("invalid JSON config: {}", path.display()))?;
    Ok(config)
}

fn load_toml(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&file)
        .with_context(|| format!("invalid TOML config: {}", path.display()))?;
    Ok(config)
}

fn load_config_by_path(path: &Path) -> Result<AppConfig> {
    // ".addrspan" may hold either format; sniff the first character
    if path.file_name().and_then(|s| s.to_str()) == Some(".addrspan") {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let trimmed = raw.trim_start();
        if trimmed.starts_with('{') {
            return serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON config: {}", path.display()));
        }
        return toml::from_str(&raw)
            .with_context(|| format!("invalid TOML config: {}", path.display()));
    }

    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("json") => load_json(path),
        Some("toml") => load_toml(path),
        // default: try json then toml
        _ => load_json(path).or_else(|_| load_toml(path)),
    }
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
