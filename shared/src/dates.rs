//! Date parsing helpers for API timestamps.
//!
//! The transactions endpoint is loose about its `date` field: sample data uses
//! bare calendar dates (`2022-03-03`) while other deployments send full RFC 3339
//! timestamps. Everything here normalizes to UTC instants or calendar days.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse a transaction date into a UTC instant.
///
/// Accepted forms:
/// - RFC 3339 with offset (`2022-03-03T10:15:00+01:00`)
/// - naive timestamp, read as UTC (`2022-03-03T10:15:00`, optional fraction).
///   The machine's timezone never applies, so the same text always names the
///   same instant.
/// - calendar date, read as midnight UTC (`2022-03-03`)
pub fn parse_transaction_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Calendar day of a transaction date, taken literally from the text before `T`.
///
/// No timezone conversion happens: `2022-03-03T23:30:00-05:00` is day 2022-03-03
/// even though it is already March 4th in UTC.
pub fn day_key(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// First instant of `day` in `tz`, as UTC
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    local_to_utc(tz, day.and_time(NaiveTime::MIN))
}

/// Last whole second of `day` in `tz`, as UTC
pub fn end_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    local_to_utc(tz, day.and_time(last_second))
}

// Falls back to reading the wall-clock time as UTC when it does not exist in
// `tz` (spring-forward gap).
fn local_to_utc<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_transaction_date("2022-03-03T10:15:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2022, 3, 3, 9, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_zulu_with_fraction() {
        let parsed = parse_transaction_date("2022-03-03T10:15:00.123Z").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.nanosecond(), 123_000_000);
    }

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        let parsed = parse_transaction_date("2022-03-03T10:15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2022, 3, 3, 10, 15, 0).unwrap());
    }

    #[test]
    fn test_naive_timestamp_ignores_local_offsets() {
        let naive = parse_transaction_date("2022-03-03T10:15:00").unwrap();
        assert_eq!(naive, parse_transaction_date("2022-03-03T10:15:00Z").unwrap());

        // The same wall-clock reading taken in UTC+1 is an hour earlier
        let lagos = FixedOffset::east_opt(3600).unwrap();
        let wall_clock = NaiveDate::from_ymd_opt(2022, 3, 3)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        let in_lagos = lagos.from_local_datetime(&wall_clock).unwrap().with_timezone(&Utc);
        assert_eq!(in_lagos.hour(), 9);
        assert_ne!(naive, in_lagos);

        // Local midnight bounds in UTC+1 still see it as March 3rd
        let day = NaiveDate::from_ymd_opt(2022, 3, 3).unwrap();
        assert!(naive >= start_of_day(&lagos, day) && naive <= end_of_day(&lagos, day));
    }

    #[test]
    fn test_parse_calendar_date_as_midnight_utc() {
        let parsed = parse_transaction_date(" 2022-03-03 ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2022, 3, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_transaction_date("").is_none());
        assert!(parse_transaction_date("yesterday").is_none());
        assert!(parse_transaction_date("2022-13-45").is_none());
    }

    #[test]
    fn test_day_key_ignores_offset() {
        let day = day_key("2022-03-03T23:30:00-05:00").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2022, 3, 3).unwrap());
        assert_eq!(day_key("2022-03-04"), NaiveDate::from_ymd_opt(2022, 3, 4));
        assert_eq!(day_key("March 4th"), None);
    }

    #[test]
    fn test_day_bounds_in_fixed_offset() {
        let lagos = FixedOffset::east_opt(3600).unwrap();
        let day = NaiveDate::from_ymd_opt(2022, 3, 3).unwrap();

        assert_eq!(start_of_day(&lagos, day), Utc.with_ymd_and_hms(2022, 3, 2, 23, 0, 0).unwrap());
        assert_eq!(end_of_day(&lagos, day), Utc.with_ymd_and_hms(2022, 3, 3, 22, 59, 59).unwrap());
    }
}
