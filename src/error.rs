//! Error types for the relay.
//!
//! - [`ListenerError`]: conditions reported while attaching to or detaching
//!   from the host message source. The non-`try_` listener methods log these
//!   instead of returning them.
//! - [`ConfigError`]: failures loading or applying a [`crate::ListenerConfig`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions raised by the listening state machine.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// No host message source has been initialized yet.
    #[error("message source is not available")]
    SourceUnavailable,

    /// `start_listening` called while already registered.
    #[error("message listener is already active")]
    AlreadyListening,

    /// `stop_listening` called while not registered.
    #[error("message listener is not active")]
    NotListening,
}

impl ListenerError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::SourceUnavailable => "source_unavailable",
            ListenerError::AlreadyListening => "already_listening",
            ListenerError::NotListening => "not_listening",
        }
    }
}

/// Errors produced while loading, saving or applying configuration.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A selector named a message the registry does not know.
    #[error("unknown message selector {0:?}")]
    UnknownMessage(String),
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "config_io",
            ConfigError::Parse(_) => "config_parse",
            ConfigError::UnknownMessage(_) => "config_unknown_message",
        }
    }
}
