use crate::standardized_types::market_hours::ObserverHours;
use crate::standardized_types::session_status::SessionStatus;
use chrono::Timelike;
use log::info;
use serde_derive::Serialize;

/// What the caller should do with this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Skip(String),
}

impl GateDecision {
    pub fn evaluate(status: &SessionStatus, observer_hours: Option<&ObserverHours>) -> GateDecision {
        if !status.is_open {
            info!("Skipping run: {}", status.reason);
            return GateDecision::Skip(status.reason.clone());
        }

        if let Some(hours) = observer_hours {
            let hour = status.observer_now.local().hour();
            if !hours.contains(hour) {
                let reason = format!(
                    "Outside observer hours {:02}:00-{:02}:00 - {}",
                    hours.start_hour, hours.end_hour, status.observer_now
                );
                info!("Skipping run: {}", reason);
                return GateDecision::Skip(reason);
            }
        }

        info!("Market open, proceeding: {}", status.reason);
        GateDecision::Proceed
    }

    pub fn should_proceed(&self) -> bool {
        matches!(self, GateDecision::Proceed)
    }
}

/// A session status together with what the gate decided, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateReport<'a> {
    pub status: &'a SessionStatus,
    /// "proceed" or "skip"
    pub decision: &'static str,
    pub skip_reason: Option<&'a str>,
}

impl<'a> GateReport<'a> {
    pub fn new(status: &'a SessionStatus, decision: &'a GateDecision) -> Self {
        match decision {
            GateDecision::Proceed => GateReport {
                status,
                decision: "proceed",
                skip_reason: None,
            },
            GateDecision::Skip(reason) => GateReport {
                status,
                decision: "skip",
                skip_reason: Some(reason.as_str()),
            },
        }
    }
}
