//! JSON configuration for a dispatcher.
//!
//! Stored by default in `%APPDATA%/WinMsgRelay/listener.json`:
//!
//! ```json
//! {
//!   "allowed": [256, "WM_KEYUP", "0x0450"],
//!   "verbose_logging": false,
//!   "listen_on_start": true
//! }
//! ```
//!
//! Selectors are raw codes, registry names (any case) or `0x` hex strings.
//! Use [`Dispatcher::apply_config`](crate::Dispatcher::apply_config) to load
//! one into a dispatcher.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::error::ConfigError;
use crate::model::constants::*;

/// One entry of the allow-list as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageSelector {
    Code(u32),
    Name(String),
}

impl MessageSelector {
    /// Resolve to a numeric code.
    pub fn resolve(&self) -> Result<u32, ConfigError> {
        match self {
            MessageSelector::Code(code) => Ok(*code),
            MessageSelector::Name(name) => {
                let trimmed = name.trim();
                if let Some(hex) = strip_hex_prefix(trimmed) {
                    // from_str_radix alone would also take a sign.
                    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                        return Err(ConfigError::UnknownMessage(name.clone()));
                    }
                    return u32::from_str_radix(hex, 16)
                        .map_err(|_| ConfigError::UnknownMessage(name.clone()));
                }
                codes::code_for_name(trimmed).ok_or_else(|| ConfigError::UnknownMessage(name.clone()))
            }
        }
    }
}

impl From<u32> for MessageSelector {
    fn from(code: u32) -> Self {
        MessageSelector::Code(code)
    }
}

impl From<&str> for MessageSelector {
    fn from(name: &str) -> Self {
        MessageSelector::Name(name.to_string())
    }
}

impl fmt::Display for MessageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSelector::Code(code) => write!(f, "0x{code:04X}"),
            MessageSelector::Name(name) => f.write_str(name),
        }
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix(HEX_PREFIX)
        .or_else(|| s.strip_prefix("0X"))
}

/// Serializable dispatcher settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    pub allowed: Vec<MessageSelector>,
    pub verbose_logging: bool,
    pub listen_on_start: bool,
}

impl ListenerConfig {
    /// `%APPDATA%/WinMsgRelay/listener.json`, or `./WinMsgRelay/listener.json`
    /// when `APPDATA` is unset.
    pub fn default_path() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), entries = config.allowed.len(), "Loaded listener config.");
        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No listener config found, using defaults.");
            Ok(Self::default())
        }
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_json()?).map_err(io_err)?;
        tracing::info!(path = %path.display(), "Saved listener config.");
        Ok(())
    }

    /// Resolve every selector, failing on the first unknown one.
    pub fn resolve_allowed(&self) -> Result<Vec<u32>, ConfigError> {
        self.allowed.iter().map(MessageSelector::resolve).collect()
    }
}
