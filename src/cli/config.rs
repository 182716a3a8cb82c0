//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::infra::{DEFAULT_SLOT, validate_key};

/// Render width used when neither the CLI nor the config sets one.
pub const DEFAULT_WIDTH: usize = 100;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the notes slot
    pub dir: Option<PathBuf>,

    /// Slot key the notes are stored under
    pub slot: Option<String>,

    /// Default render width for `view` and `shell`
    pub width: Option<usize>,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub slot: String,
    pub width: usize,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or the default if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/jot` on Linux)
    /// 4. Current working directory
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("jot")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve every setting for this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot key is not a valid key or the width is 0.
    pub fn settings(
        &self,
        cli_dir: Option<&PathBuf>,
        cli_slot: Option<&str>,
        cli_width: Option<usize>,
    ) -> Result<Settings> {
        let slot = cli_slot
            .map(str::to_string)
            .or_else(|| self.slot.clone())
            .unwrap_or_else(|| DEFAULT_SLOT.to_string());
        validate_key(&slot)?;

        let width = cli_width.or(self.width).unwrap_or(DEFAULT_WIDTH);
        if width == 0 {
            bail!("width must be greater than 0");
        }

        Ok(Settings {
            dir: self.data_dir(cli_dir),
            slot,
            width,
        })
    }
}
