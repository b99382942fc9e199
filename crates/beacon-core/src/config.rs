//! Beacon configuration management.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BeaconError, Result};

/// Beacon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme preset: "dark", "light", "ocean", or "mono"
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Custom colors, layered over the preset
    #[serde(default)]
    pub colors: Option<CustomColors>,
}

/// Custom color configuration. Hex values in "#RRGGBB" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub muted: Option<String>,
    pub highlight: Option<String>,
    pub border: Option<String>,
    pub dim: Option<String>,
}

fn default_preset() -> String {
    "dark".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { preset: "dark".to_string(), colors: None }
    }
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self { theme: ThemeConfig::default() }
    }
}

impl BeaconConfig {
    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BeaconError::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(".beacon").join("config.toml"))
    }

    /// Load configuration from the default path, writing a commented default
    /// file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: BeaconConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Generate TOML with comments
        let mut toml = String::new();
        toml.push_str("# Beacon Configuration\n");
        toml.push_str("# This file customizes how Beacon renders its terminal output\n\n");
        toml.push_str("[theme]\n");
        toml.push_str("# Theme preset: \"dark\" (default), \"light\", \"ocean\", or \"mono\"\n");
        toml.push_str(&format!("preset = \"{}\"\n", self.theme.preset));

        if let Some(ref colors) = self.theme.colors {
            toml.push_str("\n# Custom colors layered over the preset\n");
            toml.push_str("# Colors should be in hex format: \"#RRGGBB\"\n");
            toml.push_str("[theme.colors]\n");

            if let Some(ref c) = colors.primary {
                toml.push_str(&format!("primary = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.secondary {
                toml.push_str(&format!("secondary = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.success {
                toml.push_str(&format!("success = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.warning {
                toml.push_str(&format!("warning = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.error {
                toml.push_str(&format!("error = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.info {
                toml.push_str(&format!("info = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.muted {
                toml.push_str(&format!("muted = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.highlight {
                toml.push_str(&format!("highlight = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.border {
                toml.push_str(&format!("border = \"{}\"\n", c));
            }
            if let Some(ref c) = colors.dim {
                toml.push_str(&format!("dim = \"{}\"\n", c));
            }
        } else {
            toml.push_str("\n# Custom colors layered over the preset (hex \"#RRGGBB\")\n");
            toml.push_str("# [theme.colors]\n");
            toml.push_str("# primary = \"#00D9FF\"\n");
        }

        fs::write(path, toml)?;

        Ok(())
    }
}
