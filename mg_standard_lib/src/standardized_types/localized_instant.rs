use crate::helpers::converters::time_convert_utc_to_local;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// An absolute instant viewed from a named time zone.
///
/// Changing zones never moves the instant, only the wall clock fields it is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedInstant {
    instant: DateTime<Utc>,
    zone: Tz,
}

impl LocalizedInstant {
    pub fn new(instant: DateTime<Utc>, zone: Tz) -> Self {
        LocalizedInstant { instant, zone }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn in_zone(&self, zone: Tz) -> LocalizedInstant {
        LocalizedInstant::new(self.instant, zone)
    }

    pub fn local(&self) -> DateTime<Tz> {
        time_convert_utc_to_local(&self.zone, self.instant)
    }

    pub fn date(&self) -> NaiveDate {
        self.local().date_naive()
    }

    pub fn time(&self) -> NaiveTime {
        self.local().time()
    }

    pub fn weekday(&self) -> Weekday {
        self.local().weekday()
    }

    pub fn format(&self, fmt: &str) -> String {
        self.local().format(fmt).to_string()
    }
}

impl fmt::Display for LocalizedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local().format(DISPLAY_FORMAT))
    }
}

impl Serialize for LocalizedInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LocalizedInstant", 3)?;
        state.serialize_field("instant", &self.instant.to_rfc3339())?;
        state.serialize_field("zone", self.zone.name())?;
        state.serialize_field("local", &self.to_string())?;
        state.end()
    }
}
