//! Configuration file support for libvet.
//!
//! Two locations are consulted:
//! - Global: `~/.libvet/config.toml` - user-wide defaults
//! - Project: `.libvet/config.toml` - per-checkout overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// libvet configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Toolchain settings
    pub toolchain: ToolchainSettings,

    /// Path settings
    pub paths: PathSettings,
}

/// Settings for the external package-manager toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Path to the arduino-cli binary (found on PATH when unset)
    pub cli: Option<PathBuf>,

    /// arduino-cli configuration file, forwarded as `--config-file`
    pub config_file: Option<PathBuf>,

    /// Board FQBN compile checks target
    pub board: Option<String>,
}

/// Default filesystem locations used by the check step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory arduino-cli installs libraries into
    pub library_dir: Option<PathBuf>,

    /// Scratch directory for the generated test sketch
    pub scratch_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't
    /// exist or doesn't parse.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.toolchain.cli.is_some() {
            self.toolchain.cli = other.toolchain.cli;
        }
        if other.toolchain.config_file.is_some() {
            self.toolchain.config_file = other.toolchain.config_file;
        }
        if other.toolchain.board.is_some() {
            self.toolchain.board = other.toolchain.board;
        }
        if other.paths.library_dir.is_some() {
            self.paths.library_dir = other.paths.library_dir;
        }
        if other.paths.scratch_dir.is_some() {
            self.paths.scratch_dir = other.paths.scratch_dir;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.libvet/config.toml)
/// 2. Global config (~/.libvet/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global libvet config path (~/.libvet/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".libvet").join("config.toml"))
}

/// Get the project config path (.libvet/config.toml under `root`).
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(".libvet").join("config.toml")
}
