use crate::core::config::data::{path_display, Config, API_KEY_ENV};
use directories::BaseDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SEEK_CONFIG";

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid JSON.
    Parse {
        /// Path to the configuration file with invalid JSON.
        path: PathBuf,
        /// The JSON deserialization error.
        source: serde_json::Error,
    },

    /// No API key is stored and none is provided through the environment.
    MissingApiKey {
        /// Path the key would have been read from.
        path: PathBuf,
    },

    /// No home directory could be determined for the default location.
    NoHomeDir,
}

impl ConfigError {
    fn display_path(path: &Path) -> String {
        path_display(path)
    }

    /// Process exit code used when the error aborts the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::MissingApiKey { .. } => 2,
            _ => 1,
        }
    }

    pub fn quick_fixes(&self) -> &'static [&'static str] {
        match self {
            ConfigError::MissingApiKey { .. } => &[
                "seek config --api-key <KEY>      # Store the key",
                "export DEEPSEEK_API_KEY=<KEY>    # Use environment variable",
            ],
            ConfigError::Parse { .. } => {
                &["seek config --api-key <KEY>      # Rewrite the file with valid JSON"]
            }
            _ => &[],
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read config at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Invalid configuration file at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::MissingApiKey { path } => {
                write!(
                    f,
                    "API key not configured in {} and {} is not set. Run 'seek config --api-key <KEY>'.",
                    Self::display_path(path),
                    API_KEY_ENV
                )
            }
            ConfigError::NoHomeDir => {
                write!(
                    f,
                    "Failed to determine home directory; set {} to a config file path",
                    CONFIG_PATH_ENV
                )
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::MissingApiKey { .. } | ConfigError::NoHomeDir => None,
        }
    }
}

impl Config {
    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };

        temp_file.write_all(contents.as_bytes())?;
        temp_file.as_file_mut().sync_all()?;
        temp_file
            .persist(config_path)
            .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;
        Ok(())
    }

    /// `$SEEK_CONFIG`, or `~/.deepseek/seek.json`.
    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
        Ok(base_dirs.home_dir().join(".deepseek").join("seek.json"))
    }

    pub fn load() -> Result<(Config, PathBuf), ConfigError> {
        let path = Self::get_config_path()?;
        let config = Self::load_from_path(&path)?;
        Ok((config, path))
    }

    /// API key from the file or `DEEPSEEK_API_KEY`.
    pub fn api_key(&self, config_path: &Path) -> Result<String, ConfigError> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| ConfigError::MissingApiKey {
                path: config_path.to_path_buf(),
            })
    }
}
