use crate::app::settings::SessionConfig;
use crate::helpers::converters::resolve_market_datetime_in_timezone;
use crate::standardized_types::localized_instant::LocalizedInstant;
use crate::standardized_types::market_hours::MarketSession;
use crate::standardized_types::session_status::{NextOpen, SessionStatus};
use chrono::{DateTime, Datelike, Days, Utc, Weekday};
use log::debug;

pub const WEEKEND_REASON: &str = "Market closed - Weekend";

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Decides whether the exchange is open at a given instant and when it opens next.
///
/// Every call is a pure function of `now` and the configuration the calculator was built with.
#[derive(Debug, Clone)]
pub struct SessionCalculator {
    config: SessionConfig,
}

impl SessionCalculator {
    pub fn new(config: SessionConfig) -> Self {
        SessionCalculator { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn session(&self) -> &MarketSession {
        &self.config.session
    }

    fn exchange_time(&self, now: DateTime<Utc>) -> LocalizedInstant {
        LocalizedInstant::new(now, self.config.exchange_zone)
    }

    fn timestamps(&self, now: DateTime<Utc>) -> String {
        let exchange = self.exchange_time(now);
        format!("{} | {}", exchange, exchange.in_zone(self.config.observer_zone))
    }

    pub fn is_market_open(&self, now: DateTime<Utc>) -> (bool, String) {
        let exchange = self.exchange_time(now);
        if !MarketSession::is_trading_day(exchange.weekday()) {
            debug!("{} falls on a weekend", exchange);
            return (false, WEEKEND_REASON.to_string());
        }

        if self.session().is_trading_time(exchange.time()) {
            (true, format!("Market open - {}", self.timestamps(now)))
        } else {
            (false, format!("Market closed - {}", self.timestamps(now)))
        }
    }

    /// The next session open, counted from the exchange-local date of `now`.
    ///
    /// Weekends roll to Monday and a weekday at or after the close rolls to the next trading day.
    /// Any other weekday time, including one already inside the session, returns today's open.
    pub fn next_market_open(&self, now: DateTime<Utc>) -> NextOpen {
        let exchange = self.exchange_time(now);
        let date = exchange.date();

        let candidate = match date.weekday() {
            Weekday::Sat => date + Days::new(2),
            Weekday::Sun => date + Days::new(1),
            _ if self.session().is_after_close(exchange.time()) => {
                let next = date + Days::new(1);
                if !MarketSession::is_trading_date(next) {
                    next + Days::new(u64::from(7 - next.weekday().num_days_from_monday()))
                } else {
                    next
                }
            }
            _ => date,
        };

        let open = resolve_market_datetime_in_timezone(self.config.exchange_zone, candidate.and_time(self.session().open));
        let exchange_local = LocalizedInstant::new(open.to_utc(), self.config.exchange_zone);
        debug!("Next open from {} is {}", exchange, exchange_local);

        NextOpen {
            exchange_local,
            observer_local: exchange_local.in_zone(self.config.observer_zone),
        }
    }

    pub fn get_session_info(&self, now: DateTime<Utc>) -> SessionStatus {
        let (is_open, reason) = self.is_market_open(now);
        let exchange_now = self.exchange_time(now);
        let next_open = if is_open { None } else { Some(self.next_market_open(now)) };

        SessionStatus {
            is_open,
            reason,
            weekday: exchange_now.format("%A"),
            exchange_now,
            observer_now: exchange_now.in_zone(self.config.observer_zone),
            next_open,
        }
    }

    pub fn current_session_info(&self, clock: &dyn Clock) -> SessionStatus {
        self.get_session_info(clock.now())
    }
}
