use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown time zone '{zone}': {reason}")]
    UnknownTimeZone { zone: String, reason: String },

    #[error("Invalid session time '{0}', expected HH:MM or HH:MM:SS")]
    InvalidSessionTime(String),

    #[error("Invalid session window: open {open} must be before close {close}")]
    InvalidSessionWindow { open: String, close: String },

    #[error("Invalid observer hours: {0}")]
    InvalidObserverHours(String),

    #[error("IO error occurred: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
