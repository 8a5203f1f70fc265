use crate::DEFAULT_DATABASE_FILENAME;

use serde::Deserialize;

/// Where the board database lives. A relative path is resolved under the
/// config directory by `Config::database_path`, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}
