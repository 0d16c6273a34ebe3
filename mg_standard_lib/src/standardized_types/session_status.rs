use crate::standardized_types::localized_instant::LocalizedInstant;
use serde_derive::Serialize;
use std::fmt;

/// The next session open, rendered for both the exchange and the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextOpen {
    pub exchange_local: LocalizedInstant,
    pub observer_local: LocalizedInstant,
}

impl NextOpen {
    pub fn exchange_local_string(&self) -> String {
        self.exchange_local.to_string()
    }

    pub fn observer_local_string(&self) -> String {
        self.observer_local.to_string()
    }
}

/// Result of a single session check, recomputed on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub is_open: bool,
    pub reason: String,
    /// Exchange-local weekday name, eg "Wednesday"
    pub weekday: String,
    pub exchange_now: LocalizedInstant,
    pub observer_now: LocalizedInstant,
    pub next_open: Option<NextOpen>,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Market is {}: {}", if self.is_open { "OPEN" } else { "CLOSED" }, self.reason)?;
        writeln!(f, "Exchange time ({}): {} ({})", self.exchange_now.zone().name(), self.exchange_now, self.weekday)?;
        write!(f, "Observer time ({}): {}", self.observer_now.zone().name(), self.observer_now)?;
        if let Some(next_open) = &self.next_open {
            writeln!(f)?;
            write!(
                f,
                "Next open: {} | {}",
                next_open.exchange_local_string(),
                next_open.observer_local_string()
            )?;
        }
        Ok(())
    }
}
