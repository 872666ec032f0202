use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::ide::{self, IdeTarget};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "IDE_JUMP_CONFIG";

impl Config {
    /// Location of the config file: `$IDE_JUMP_CONFIG`, or
    /// `~/.config/ide-jump/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(custom) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(custom));
        }
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("ide-jump").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        if let Some(dup) = ide::find_duplicate(&config.ides) {
            anyhow::bail!("Duplicate IDE name {dup:?} in {}", path.display());
        }
        Ok(config)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "default_ide" => Ok(self.default_ide.clone()),
            "search_dirs" => Ok(self.search_dirs.join(",")),
            "project.fallback_to_cwd" => Ok(self.project.fallback_to_cwd.to_string()),
            "project.markers" => Ok(self.project.markers.join(",")),
            _ => {
                if let Some(id) = key.strip_prefix("paths.") {
                    return Ok(self.paths.get(id).cloned().unwrap_or_default());
                }
                if let Some(name) = key.strip_prefix("ide.") {
                    return Ok(self
                        .ides
                        .iter()
                        .find(|t| t.display_name.eq_ignore_ascii_case(name))
                        .map(|t| t.command_id.clone())
                        .unwrap_or_default());
                }
                anyhow::bail!("Unknown config key: {key}")
            }
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_ide" => {
                anyhow::ensure!(!value.is_empty(), "default_ide cannot be empty");
                self.default_ide = value.to_string();
            }
            "search_dirs" => self.search_dirs = split_list(value),
            "project.fallback_to_cwd" => {
                self.project.fallback_to_cwd = value.parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
            }
            "project.markers" => self.project.markers = split_list(value),
            _ => {
                if let Some(id) = key.strip_prefix("paths.").filter(|id| !id.is_empty()) {
                    if value.is_empty() {
                        self.paths.remove(id);
                    } else {
                        self.paths.insert(id.to_string(), value.to_string());
                    }
                    return Ok(());
                }
                if let Some(name) = key.strip_prefix("ide.").filter(|n| !n.is_empty()) {
                    self.set_ide(name, value);
                    return Ok(());
                }
                anyhow::bail!("Unknown config key: {key}")
            }
        }
        Ok(())
    }

    fn set_ide(&mut self, name: &str, command: &str) {
        let existing = self
            .ides
            .iter()
            .position(|t| t.display_name.eq_ignore_ascii_case(name));
        match (existing, command.is_empty()) {
            (Some(i), true) => {
                self.ides.remove(i);
            }
            (Some(i), false) => command.clone_into(&mut self.ides[i].command_id),
            (None, false) => self.ides.push(IdeTarget::new(name, command)),
            (None, true) => {}
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
