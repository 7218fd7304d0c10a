//! Boundary formats for dates and times
//!
//! Internally every instant is a `NaiveDateTime` in facility-local time.
//! Strings only appear here, when reading configuration or rendering output.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Display format for dates on bills and reports (`31-01-2025`)
pub const DISPLAY_DATE: &str = "%d-%m-%Y";
/// Time-of-day format used in configuration and display (`17:00`)
pub const CLOCK_TIME: &str = "%H:%M";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

pub fn format_instant(instant: NaiveDateTime) -> String {
    instant.format("%d-%m-%Y %H:%M").to_string()
}

pub fn parse_clock_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), CLOCK_TIME)
}

/// Serde adapter for `HH:MM` times of day.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_clock_time, CLOCK_TIME};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(CLOCK_TIME).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_clock_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Render an amount in minor units as `major.minor CUR`.
pub fn format_money(amount_minor: i64, currency: &str) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    format!("{}{}.{:02} {}", sign, abs / 100, abs % 100, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_round_trip() {
        let t = parse_clock_time("23:59").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(t.format(CLOCK_TIME).to_string(), "23:59");
        assert!(parse_clock_time("25:00").is_err());
    }

    #[test]
    fn formats_dates_for_display() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(format_date(d), "31-01-2025");
        assert_eq!(format_instant(d.and_hms_opt(22, 0, 0).unwrap()), "31-01-2025 22:00");
    }

    #[test]
    fn formats_money() {
        assert_eq!(format_money(45_000, "INR"), "450.00 INR");
        assert_eq!(format_money(5, "INR"), "0.05 INR");
        assert_eq!(format_money(0, "INR"), "0.00 INR");
        assert_eq!(format_money(-150, "INR"), "-1.50 INR");
    }
}
