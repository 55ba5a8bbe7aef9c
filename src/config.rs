use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::responder::{Content, ContentFile};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable overriding the keep-alive port.
pub const PORT_VAR: &str = "PORT";
/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "meha.json";

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { path: PathBuf, source: serde_json::Error },
    /// Required environment variable is missing or empty.
    MissingEnv { var: &'static str },
    /// Environment variable has an unusable value.
    InvalidEnv { var: &'static str, value: String },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            Self::ParseJson { path, source } => {
                write!(f, "failed to parse config file '{}': {}", path.display(), source)
            }
            Self::MissingEnv { var } => {
                write!(f, "environment variable {} must be set", var)
            }
            Self::InvalidEnv { var, value } => {
                write!(f, "environment variable {} has invalid value '{}'", var, value)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::MissingEnv { .. } | Self::InvalidEnv { .. } | Self::Validation(_) => None,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Directory for state files (logs). Defaults to current directory.
    data_dir: Option<String>,
    /// Keep-alive port; the PORT environment variable takes precedence.
    port: Option<u16>,
    /// Skip updates that queued up while the bot was offline.
    #[serde(default = "default_drop_pending_updates")]
    drop_pending_updates: bool,
    /// Replacement content tables.
    content: Option<ContentFile>,
}

fn default_drop_pending_updates() -> bool {
    true
}

fn default_port() -> u16 {
    8080
}

pub struct Config {
    pub telegram_bot_token: String,
    /// Port for the keep-alive HTTP endpoint.
    pub port: u16,
    /// Directory for state files (logs).
    pub data_dir: PathBuf,
    pub drop_pending_updates: bool,
    /// Content tables, not yet validated. `Responder::new` validates them.
    pub content: Content,
    /// Config file actually read, if any.
    pub config_path: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("drop_pending_updates", &self.drop_pending_updates)
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load from the process environment and an optional config file.
    ///
    /// With `path == None` the default `meha.json` is read if it exists;
    /// an explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |var| std::env::var(var).ok())
    }

    /// Like [`Config::load`], with environment lookups going through `env`.
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (file, config_path) = match path {
            Some(path) => (read_config_file(path)?, Some(path.to_path_buf())),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    (read_config_file(default)?, Some(default.to_path_buf()))
                } else {
                    (ConfigFile { drop_pending_updates: true, ..Default::default() }, None)
                }
            }
        };

        let telegram_bot_token = env(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingEnv { var: TOKEN_VAR })?;
        validate_token(&telegram_bot_token)?;

        let port = match env(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnv { var: PORT_VAR, value })?,
            None => file.port.unwrap_or_else(default_port),
        };

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let content = file.content.map(Content::from_file).unwrap_or_default();

        Ok(Self {
            telegram_bot_token,
            port,
            data_dir,
            drop_pending_updates: file.drop_pending_updates,
            content,
            config_path,
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadFile { path: path.to_path_buf(), source: e })?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseJson { path: path.to_path_buf(), source: e })
}

/// Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric.
fn validate_token(token: &str) -> Result<(), ConfigError> {
    let valid = match token.split_once(':') {
        Some((id, secret)) => id.parse::<u64>().is_ok() && !secret.is_empty() && !secret.contains(':'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{TOKEN_VAR} appears invalid (expected format: 123456789:ABCdefGHI...)"
        )))
    }
}
