use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig};

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for KANBAN_CONFIG_DIR env var, else use ./.kanban/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply KANBAN_* environment variable overrides
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KANBAN_CONFIG_DIR env var > ./.kanban/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("KANBAN_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".kanban"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("KANBAN_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Ok(level) = std::env::var("KANBAN_LOG_LEVEL") {
            // FromStr never fails; unknown values fall back to info
            self.logging.level = crate::LogLevel::from_str(&level).unwrap();
        }
        if let Ok(dir) = std::env::var("KANBAN_LOG_DIR") {
            self.logging.dir = dir;
        }
    }

    /// Absolute path of the board database, resolved under the config
    /// directory when the configured path is relative.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let path = PathBuf::from(&self.database.path);
        if path.is_absolute() {
            return Ok(path);
        }
        Ok(Self::config_dir()?.join(path))
    }
}
