use crate::errors::ConfigurationError;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA style zone identifier such as `US/Eastern` or `Asia/Singapore`.
pub fn parse_time_zone(zone: &str) -> Result<Tz, ConfigurationError> {
    Tz::from_str(zone.trim()).map_err(|e| ConfigurationError::UnknownTimeZone {
        zone: zone.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a wall-clock session time, `HH:MM` or `HH:MM:SS`.
pub fn parse_session_time(time: &str) -> Result<NaiveTime, ConfigurationError> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| ConfigurationError::InvalidSessionTime(time.to_string()))
}

/// Convert utc time to local time, adjusting the actual hour
pub fn time_convert_utc_to_local(time_zone: &Tz, utc_time: DateTime<Utc>) -> DateTime<Tz> {
    time_zone.from_utc_datetime(&utc_time.naive_utc())
}

/// Resolve a wall-clock date time in `tz` to a single instant.
///
/// Ambiguous times (clocks falling back) take the first occurrence, times that
/// do not exist (clocks springing forward) move forward by one hour.
pub fn resolve_market_datetime_in_timezone(tz: Tz, naive_dt: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive_dt) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(dt1, _dt2) => dt1,
        LocalResult::None => match tz.from_local_datetime(&(naive_dt + Duration::hours(1))).earliest() {
            Some(dt) => dt,
            // No zone in the database skips more than an hour, fall back to reading the wall clock as utc.
            None => time_convert_utc_to_local(&tz, naive_dt.and_utc()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use chrono_tz::US::Eastern;

    #[test]
    fn test_parse_time_zone() {
        assert_eq!(parse_time_zone("US/Eastern").unwrap(), Tz::US__Eastern);
        assert_eq!(parse_time_zone(" Asia/Singapore ").unwrap(), Tz::Asia__Singapore);
        assert_eq!(parse_time_zone("America/New_York").unwrap(), Tz::America__New_York);

        let err = parse_time_zone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownTimeZone { ref zone, .. } if zone == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_parse_session_time() {
        assert_eq!(parse_session_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(parse_session_time("16:00:00").unwrap(), NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        assert!(matches!(parse_session_time("25:00"), Err(ConfigurationError::InvalidSessionTime(_))));
        assert!(matches!(parse_session_time("half past nine"), Err(ConfigurationError::InvalidSessionTime(_))));
    }

    #[test]
    fn test_resolve_spring_forward_gap() {
        // 2024-03-10 02:30 does not exist in New York.
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(2, 30, 0).unwrap();
        let resolved = resolve_market_datetime_in_timezone(Eastern, naive);
        assert_eq!(resolved.hour(), 3);
        assert_eq!(resolved.minute(), 30);
    }

    #[test]
    fn test_resolve_fall_back_overlap_takes_first() {
        // 2024-11-03 01:30 happens twice in New York, first as EDT.
        let naive = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap().and_hms_opt(1, 30, 0).unwrap();
        let resolved = resolve_market_datetime_in_timezone(Eastern, naive);
        assert_eq!(resolved.to_utc(), Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_time_convert_utc_to_local() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 10, 15, 0, 0).unwrap();
        let local = time_convert_utc_to_local(&Tz::Asia__Singapore, utc);
        assert_eq!(local.hour(), 23);
        assert_eq!(local.to_utc(), utc);
    }
}
