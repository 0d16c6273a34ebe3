use crate::errors::ConfigurationError;
use crate::helpers::converters::{parse_session_time, parse_time_zone};
use crate::standardized_types::market_hours::{MarketSession, ObserverHours, DEFAULT_SESSION_CLOSE, DEFAULT_SESSION_OPEN};
use chrono_tz::Tz;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EXCHANGE_ZONE: &str = "US/Eastern";
pub const DEFAULT_OBSERVER_ZONE: &str = "Asia/Singapore";

/// Validated configuration handed to the `SessionCalculator`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub exchange_zone: Tz,
    pub observer_zone: Tz,
    pub session: MarketSession,
    pub observer_hours: Option<ObserverHours>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            exchange_zone: Tz::US__Eastern,
            observer_zone: Tz::Asia__Singapore,
            session: MarketSession::default(),
            observer_hours: None,
        }
    }
}

/// On disk form of the configuration, every key is optional.
///
/// ```toml
/// exchange_zone = "US/Eastern"
/// observer_zone = "Asia/Singapore"
/// session_open = "09:30"
/// session_close = "16:00"
///
/// [observer_hours]
/// start_hour = 9
/// end_hour = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub exchange_zone: String,
    pub observer_zone: String,
    pub session_open: String,
    pub session_close: String,
    pub observer_hours: Option<ObserverHours>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            exchange_zone: DEFAULT_EXCHANGE_ZONE.to_string(),
            observer_zone: DEFAULT_OBSERVER_ZONE.to_string(),
            session_open: DEFAULT_SESSION_OPEN.format("%H:%M").to_string(),
            session_close: DEFAULT_SESSION_CLOSE.format("%H:%M").to_string(),
            observer_hours: None,
        }
    }
}

impl SessionSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigurationError> {
        let settings: SessionSettings = toml::from_str(contents)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigurationError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn to_config(&self) -> Result<SessionConfig, ConfigurationError> {
        let session = MarketSession::new(
            parse_session_time(&self.session_open)?,
            parse_session_time(&self.session_close)?,
        )?;
        let observer_hours = match self.observer_hours {
            Some(hours) => Some(ObserverHours::new(hours.start_hour, hours.end_hour)?),
            None => None,
        };

        Ok(SessionConfig {
            exchange_zone: parse_time_zone(&self.exchange_zone)?,
            observer_zone: parse_time_zone(&self.observer_zone)?,
            session,
            observer_hours,
        })
    }
}
