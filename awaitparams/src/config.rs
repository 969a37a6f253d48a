use anyhow::Result;
use colored::Colorize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for awaitparams.
    pub awaitparams: AwaitParamsConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for awaitparams.
pub struct AwaitParamsConfig {
    /// Files to migrate, replacing the built-in list.
    pub files: Option<Vec<PathBuf>>,
    /// Directory relative targets are resolved against.
    pub root: Option<PathBuf>,
    /// List of rule codes to skip.
    pub ignore: Option<Vec<String>>,
    /// Report what would change without writing.
    pub dry_run: Option<bool>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The first `.awaitparams.toml` found wins. If it cannot be read or
    /// parsed, a warning goes to stderr and the defaults are used; parent
    /// directories are not consulted.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return match Self::read_file(&candidate) {
                    Ok(config) => config,
                    Err(err) => {
                        eprintln!(
                            "{} ignoring {}: {err}",
                            "Warning:".yellow(),
                            candidate.display()
                        );
                        Config::default()
                    }
                };
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }
}
