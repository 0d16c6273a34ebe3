use crate::errors::ConfigurationError;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde_derive::{Deserialize, Serialize};

const fn const_time(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(t) => t,
        None => panic!("Invalid time"),
    }
}

pub const DEFAULT_SESSION_OPEN: NaiveTime = const_time(9, 30, 0);
pub const DEFAULT_SESSION_CLOSE: NaiveTime = const_time(16, 0, 0);

/// The regular trading window of an exchange, in the exchange's local wall clock.
///
/// Trading days are Monday to Friday by the exchange-local calendar. Holidays are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketSession {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl Default for MarketSession {
    fn default() -> Self {
        MarketSession {
            open: DEFAULT_SESSION_OPEN,
            close: DEFAULT_SESSION_CLOSE,
        }
    }
}

impl MarketSession {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, ConfigurationError> {
        if open >= close {
            return Err(ConfigurationError::InvalidSessionWindow {
                open: open.to_string(),
                close: close.to_string(),
            });
        }
        Ok(MarketSession { open, close })
    }

    pub fn is_trading_day(weekday: Weekday) -> bool {
        !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    pub fn is_trading_date(date: NaiveDate) -> bool {
        Self::is_trading_day(date.weekday())
    }

    /// Both ends of the window count as open.
    pub fn is_trading_time(&self, time: NaiveTime) -> bool {
        time >= self.open && time <= self.close
    }

    pub fn is_after_close(&self, time: NaiveTime) -> bool {
        time >= self.close
    }
}

/// Hours of the observer's day during which a run may go ahead.
///
/// `start_hour` is inclusive and `end_hour` exclusive, a window with `start_hour > end_hour`
/// runs overnight, eg 9 -> 2 covers 09:00 until 01:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl ObserverHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, ConfigurationError> {
        if start_hour > 23 {
            return Err(ConfigurationError::InvalidObserverHours(format!("start_hour {} is not within 0..=23", start_hour)));
        }
        if end_hour > 24 {
            return Err(ConfigurationError::InvalidObserverHours(format!("end_hour {} is not within 0..=24", end_hour)));
        }
        if start_hour == end_hour {
            return Err(ConfigurationError::InvalidObserverHours(format!("start_hour and end_hour are both {}", start_hour)));
        }
        Ok(ObserverHours { start_hour, end_hour })
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour < self.end_hour {
            hour >= self.start_hour && hour < self.end_hour // Same-day window
        } else {
            hour >= self.start_hour || hour < self.end_hour // Overnight window
        }
    }
}
