pub mod localized_instant;
pub mod market_hours;
pub mod session_status;
