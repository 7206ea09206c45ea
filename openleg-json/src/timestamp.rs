use chrono::{DateTime, Utc};

/// `chrono` pattern for every emitted timestamp: ISO-8601 to the
/// millisecond with a literal `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats `at` as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn formats_whole_seconds_with_millis() {
        let at = Utc.with_ymd_and_hms(2014, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(&at), "2014-03-05T14:30:00.000Z");
    }

    #[test]
    fn truncates_below_millis() {
        let at = NaiveDate::from_ymd_opt(2013, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 59, 999_999)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&at), "2013-12-31T23:59:59.999Z");
    }
}
