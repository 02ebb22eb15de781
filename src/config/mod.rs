//! config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config file
//! 3. Project config file (`pippi.toml` in the working directory)
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$PIPPI_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pippi/config.toml`
//! 3. `~/.pippi/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use pippi::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("."))).unwrap();
//! let config = result.config;
//!
//! println!("Pretty: {}", config.pretty());
//! println!("Separator: {:?}", config.separator());
//! ```

pub mod schema;

pub use schema::PippiConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::defaults::WithDefaults;

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILE: &str = "pippi.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Files that contributed, lowest precedence first.
    pub sources: Vec<PathBuf>,
}

/// Merged configuration from all sources.
#[derive(Debug, Clone)]
pub struct Config {
    resolved: PippiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolved: PippiConfig::builtin(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, `pippi.toml` in that directory is
    /// layered over the global file.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global = Self::global_config_path();
        let project = project_dir.map(|dir| dir.join(PROJECT_CONFIG_FILE));
        Self::load_from(global.as_deref(), project.as_deref())
    }

    /// Load configuration from explicit file locations.
    ///
    /// Paths that do not exist are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, parsed, or
    /// validated.
    pub fn load_from(
        global_path: Option<&Path>,
        project_path: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut sources = Vec::new();
        let mut layers = Vec::new();

        for path in [global_path, project_path].into_iter().flatten() {
            if path.exists() {
                let layer = Self::read_config(path)?;
                layer.validate()?;
                layers.push(layer);
                sources.push(path.to_path_buf());
            }
        }

        // Highest precedence first, each filling the gaps left by the ones after it.
        let mut resolved = PippiConfig::default();
        for layer in layers.iter().rev() {
            resolved.fill_absent_from(layer);
        }
        resolved.fill_absent_from(&PippiConfig::builtin());

        Ok(ConfigLoadResult {
            config: Config { resolved },
            sources,
        })
    }

    /// Locate the global config file, if any candidate location applies.
    fn global_config_path() -> Option<PathBuf> {
        // 1. Check $PIPPI_CONFIG
        if let Ok(path) = std::env::var("PIPPI_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 2. Check $XDG_CONFIG_HOME/pippi/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("pippi/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Fall back to ~/.pippi/config.toml
        dirs::home_dir().map(|home| home.join(".pippi/config.toml"))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<PippiConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Whether JSON output is indented.
    ///
    /// Defaults to `false`.
    pub fn pretty(&self) -> bool {
        self.resolved.pretty.unwrap_or(false)
    }

    /// Seed for random operations, if pinned.
    pub fn seed(&self) -> Option<u64> {
        self.resolved.seed
    }

    /// Separator for `join`.
    ///
    /// Defaults to `","`.
    pub fn separator(&self) -> &str {
        self.resolved.separator.as_deref().unwrap_or(",")
    }

    /// Output format name.
    ///
    /// Defaults to `"json"`.
    pub fn format(&self) -> &str {
        self.resolved.format.as_deref().unwrap_or("json")
    }

    /// The fully merged configuration.
    pub fn resolved(&self) -> &PippiConfig {
        &self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_when_no_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = Config::load_from(Some(&missing), None).unwrap();

        assert!(result.sources.is_empty());
        assert!(!result.config.pretty());
        assert_eq!(result.config.seed(), None);
        assert_eq!(result.config.separator(), ",");
        assert_eq!(result.config.format(), "json");
    }

    #[test]
    fn project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = write(&dir, "global.toml", "pretty = true\nseed = 1\n");
        let project = write(&dir, "pippi.toml", "seed = 2\nseparator = \"|\"\n");

        let result = Config::load_from(Some(&global), Some(&project)).unwrap();

        assert_eq!(result.sources, vec![global, project]);
        assert!(result.config.pretty());
        assert_eq!(result.config.seed(), Some(2));
        assert_eq!(result.config.separator(), "|");
        assert_eq!(result.config.format(), "json");
    }

    #[test]
    fn parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "pippi.toml", "pretty = \n");

        let err = Config::load_from(None, Some(&broken)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("pippi.toml"));
    }

    #[test]
    fn invalid_value_rejected() {
        let dir = TempDir::new().unwrap();
        let project = write(&dir, "pippi.toml", "format = \"yaml\"\n");

        let err = Config::load_from(None, Some(&project)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn load_reads_project_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, PROJECT_CONFIG_FILE, "format = \"lines\"\n");

        let result = Config::load(Some(dir.path())).unwrap();
        assert_eq!(result.config.format(), "lines");
    }
}
