//! Top-level application configuration.
//!
//! Configuration is stored in `.qaplan/config.yaml` and includes:
//! - Colour output mode for rendered reports
//! - Table border style
//! - Whether `decode` is strict by default

use std::fmt;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QaplanError, Result};
use crate::paths::qaplan_root;
use crate::utils::{ensure_parent_dir, format_relative_path};

pub const VALID_CONFIG_KEYS: &[&str] = &["color", "table_style", "strict"];

/// When to emit ANSI colour codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `Auto` against whether stdout is a terminal.
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = QaplanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(QaplanError::Config(format!(
                "invalid color mode '{s}'. Must be one of: auto, always, never"
            ))),
        }
    }
}

/// Border style for rendered report tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Modern,
    Ascii,
    Markdown,
    Rounded,
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::Modern => write!(f, "modern"),
            TableStyle::Ascii => write!(f, "ascii"),
            TableStyle::Markdown => write!(f, "markdown"),
            TableStyle::Rounded => write!(f, "rounded"),
        }
    }
}

impl FromStr for TableStyle {
    type Err = QaplanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modern" => Ok(TableStyle::Modern),
            "ascii" => Ok(TableStyle::Ascii),
            "markdown" => Ok(TableStyle::Markdown),
            "rounded" => Ok(TableStyle::Rounded),
            _ => Err(QaplanError::Config(format!(
                "invalid table style '{s}'. Must be one of: modern, ascii, markdown, rounded"
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub table_style: TableStyle,

    /// Make `decode` fail on missing sections without `--strict`
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        qaplan_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            QaplanError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read config at {}: {}",
                    format_relative_path(&path),
                    e
                ),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        ensure_parent_dir(&path)?;

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            QaplanError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write config at {}: {}",
                    format_relative_path(&path),
                    e
                ),
            ))
        })?;

        Ok(())
    }

    /// Read a single setting as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "color" => Ok(self.color.to_string()),
            "table_style" => Ok(self.table_style.to_string()),
            "strict" => Ok(self.strict.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single setting from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => self.color = value.parse()?,
            "table_style" => self.table_style = value.parse()?,
            "strict" => {
                self.strict = value.parse::<bool>().map_err(|_| {
                    QaplanError::Config(format!(
                        "invalid value '{value}' for strict. Must be true or false"
                    ))
                })?
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> QaplanError {
    QaplanError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    ))
}
