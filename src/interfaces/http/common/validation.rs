//! Field rules shared by request bodies

use std::borrow::Cow;

use chrono::{Duration, NaiveDateTime};
use validator::ValidationError;

/// Shortest plate the gate accepts, after trimming
pub const MIN_PLATE_LEN: usize = 4;

/// Longest walk-in stay, arrival to expected pickup
pub const MAX_STAY_HOURS: i64 = 72;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Plates are letters and digits only.
pub fn validate_plate(plate: &str) -> Result<(), ValidationError> {
    let plate = plate.trim();
    if plate.is_empty() {
        return Err(rule("plate_required", "vehicle number is required"));
    }
    if plate.len() < MIN_PLATE_LEN {
        return Err(rule(
            "plate_too_short",
            "vehicle number must be at least 4 characters",
        ));
    }
    if !plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(rule(
            "plate_charset",
            "vehicle number should contain only letters and numbers",
        ));
    }
    Ok(())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("blank", "must not be blank"));
    }
    Ok(())
}

/// Expected pickup strictly after arrival, at most [`MAX_STAY_HOURS`] later.
pub fn validate_stay(arrival: NaiveDateTime, pickup: NaiveDateTime) -> Result<(), ValidationError> {
    if pickup <= arrival {
        return Err(rule(
            "pickup_before_arrival",
            "pickup time must be after arrival time",
        ));
    }
    if pickup - arrival > Duration::hours(MAX_STAY_HOURS) {
        return Err(rule("stay_too_long", "maximum parking duration is 72 hours"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn plate_rules() {
        assert!(validate_plate("KA01AB1234").is_ok());
        assert!(validate_plate("  wb11x1234 ").is_ok());
        assert_eq!(validate_plate("   ").unwrap_err().code, "plate_required");
        assert_eq!(validate_plate("AB1").unwrap_err().code, "plate_too_short");
        assert_eq!(validate_plate("KA-01 AB").unwrap_err().code, "plate_charset");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_not_blank("John Doe").is_ok());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn stay_window() {
        assert!(validate_stay(at(3, 9), at(3, 12)).is_ok());
        assert!(validate_stay(at(3, 9), at(6, 9)).is_ok());
        assert_eq!(
            validate_stay(at(3, 9), at(3, 9)).unwrap_err().code,
            "pickup_before_arrival"
        );
        assert_eq!(
            validate_stay(at(3, 9), at(3, 8)).unwrap_err().code,
            "pickup_before_arrival"
        );
        assert_eq!(
            validate_stay(at(3, 9), at(6, 10)).unwrap_err().code,
            "stay_too_long"
        );
    }
}
