//! Hour-by-hour tariff classification
//!
//! A stay is cut into whole hours starting at the arrival instant; each hour
//! is billed at the tier active at its own start. Partial hours round up.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};

use crate::domain::holiday::HolidayCalendar;
use crate::domain::vehicle::VehicleType;
use crate::support::errors::{DomainError, DomainResult};

use super::model::{ChargeBreakdown, HourSlice, RateTable, RateTier};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Night tier covers [23:00, 05:00).
pub fn is_night_hour(hour: u32) -> bool {
    hour >= 23 || hour < 5
}

/// Weekly rush outside holidays: Friday from 17:00, weekends from 11:00.
pub fn is_weekly_rush(weekday: Weekday, hour: u32) -> bool {
    match weekday {
        Weekday::Fri => hour >= 17,
        Weekday::Sat | Weekday::Sun => hour >= 11,
        _ => false,
    }
}

/// Tier of the hour starting at `instant`.
pub fn classify_hour(instant: NaiveDateTime, calendar: &HolidayCalendar) -> RateTier {
    let hour = instant.hour();

    if is_night_hour(hour) {
        return RateTier::Night;
    }

    let rush = match calendar.find(instant.date()) {
        Some(holiday) => holiday.rush.contains_hour(hour),
        None => is_weekly_rush(instant.weekday(), hour),
    };

    if rush {
        RateTier::Rush
    } else {
        RateTier::Standard
    }
}

/// Number of billable hours between two instants, rounded up.
pub fn billable_hours(arrival: NaiveDateTime, departure: NaiveDateTime) -> DomainResult<u32> {
    if departure < arrival {
        return Err(DomainError::InvalidInterval { arrival, departure });
    }
    let millis = (departure - arrival).num_milliseconds();
    Ok(((millis + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR) as u32)
}

/// Pure tariff calculator over a rate table and a holiday calendar.
#[derive(Debug, Clone)]
pub struct TariffEngine {
    rates: RateTable,
    calendar: HolidayCalendar,
}

impl TariffEngine {
    pub fn new(rates: RateTable, calendar: HolidayCalendar) -> Self {
        Self { rates, calendar }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Itemized charge for a stay from `arrival` to `departure`.
    pub fn calculate_charge(
        &self,
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
        vehicle_type: VehicleType,
    ) -> DomainResult<ChargeBreakdown> {
        let total_hours = billable_hours(arrival, departure)?;

        let hours: Vec<HourSlice> = (0..total_hours)
            .map(|i| {
                let starts_at = arrival + Duration::hours(i64::from(i));
                HourSlice {
                    starts_at,
                    tier: classify_hour(starts_at, &self.calendar),
                }
            })
            .collect();

        let count = |tier: RateTier| hours.iter().filter(|h| h.tier == tier).count() as u32;
        let standard_hours = count(RateTier::Standard);
        let rush_hours = count(RateTier::Rush);
        let night_hours = count(RateTier::Night);

        let standard_rate = self.rates.hourly(vehicle_type, RateTier::Standard);
        let rush_rate = self.rates.hourly(vehicle_type, RateTier::Rush);
        let night_rate = self.rates.hourly(vehicle_type, RateTier::Night);

        let standard_charge = i64::from(standard_hours) * standard_rate;
        let rush_charge = i64::from(rush_hours) * rush_rate;
        let night_charge = i64::from(night_hours) * night_rate;

        Ok(ChargeBreakdown {
            vehicle_type,
            total_hours,
            standard_hours,
            rush_hours,
            night_hours,
            standard_rate,
            rush_rate,
            night_rate,
            standard_charge,
            rush_charge,
            night_charge,
            total: standard_charge + rush_charge + night_charge,
            currency: self.rates.currency.clone(),
            hours,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holiday::{HolidayRecord, RushWindow};
    use crate::domain::tariff::model::VehicleRate;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn holiday(y: i32, mo: u32, d: u32, from: (u32, u32), to: (u32, u32)) -> HolidayRecord {
        HolidayRecord::new(
            NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
            "Test Holiday",
            RushWindow::new(
                NaiveTime::from_hms_opt(from.0, from.1, 0).unwrap(),
                NaiveTime::from_hms_opt(to.0, to.1, 0).unwrap(),
            ),
        )
    }

    fn engine() -> TariffEngine {
        TariffEngine::new(RateTable::default(), HolidayCalendar::default())
    }

    fn engine_with(holidays: Vec<HolidayRecord>) -> TariffEngine {
        TariffEngine::new(RateTable::default(), HolidayCalendar::new(holidays))
    }

    #[test]
    fn car_weekday_morning_is_standard() {
        // Monday 2025-02-03
        let b = engine()
            .calculate_charge(at(2025, 2, 3, 9, 0), at(2025, 2, 3, 12, 0), VehicleType::Car)
            .unwrap();
        assert_eq!(b.total_hours, 3);
        assert_eq!(b.standard_hours, 3);
        assert_eq!(b.total, 45_000);
        assert_eq!(b.format_total(), "450.00 INR");
    }

    #[test]
    fn bike_friday_afternoon_crosses_into_rush() {
        // Friday 2025-02-07
        let b = engine()
            .calculate_charge(at(2025, 2, 7, 16, 0), at(2025, 2, 7, 19, 0), VehicleType::Bike)
            .unwrap();
        assert_eq!(b.standard_hours, 1);
        assert_eq!(b.rush_hours, 2);
        assert_eq!(b.standard_charge, 20_000);
        assert_eq!(b.rush_charge, 50_000);
        assert_eq!(b.total, 70_000);
        assert_eq!(b.hours[0].tier, RateTier::Standard);
        assert_eq!(b.hours[1].tier, RateTier::Rush);
    }

    #[test]
    fn truck_overnight_bills_night_hours_flat() {
        // Wednesday 2024-01-31 22:00 → Thursday 2024-02-01 06:00
        let b = engine()
            .calculate_charge(
                at(2024, 1, 31, 22, 0),
                at(2024, 2, 1, 6, 0),
                VehicleType::Truck,
            )
            .unwrap();
        assert_eq!(b.total_hours, 8);
        assert_eq!(b.standard_hours, 2);
        assert_eq!(b.night_hours, 6);
        assert_eq!(b.rush_hours, 0);
        assert_eq!(b.total, 2 * 30_000 + 6 * 10_000);
        assert_eq!(b.format_total(), "1200.00 INR");
    }

    #[test]
    fn partial_hours_round_up() {
        let e = engine();
        let b = e
            .calculate_charge(at(2025, 2, 3, 9, 0), at(2025, 2, 3, 10, 1), VehicleType::Car)
            .unwrap();
        assert_eq!(b.total_hours, 2);

        for minutes in [1, 30, 59] {
            let b = e
                .calculate_charge(
                    at(2025, 2, 3, 6, 0),
                    at(2025, 2, 3, 9, minutes),
                    VehicleType::Car,
                )
                .unwrap();
            assert_eq!(b.total_hours, 4);
            assert_eq!(b.standard_hours + b.rush_hours + b.night_hours, b.total_hours);
        }
    }

    #[test]
    fn zero_length_stay_costs_nothing() {
        let t = at(2025, 2, 3, 9, 0);
        let b = engine().calculate_charge(t, t, VehicleType::Car).unwrap();
        assert_eq!(b.total_hours, 0);
        assert_eq!(b.total, 0);
        assert!(b.hours.is_empty());
    }

    #[test]
    fn departure_before_arrival_is_rejected() {
        let err = engine()
            .calculate_charge(at(2025, 2, 3, 12, 0), at(2025, 2, 3, 9, 0), VehicleType::Car)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval { .. }));
    }

    #[test]
    fn weekend_rush_starts_at_eleven() {
        // Saturday 2025-02-08
        let b = engine()
            .calculate_charge(at(2025, 2, 8, 9, 0), at(2025, 2, 8, 13, 0), VehicleType::Car)
            .unwrap();
        assert_eq!(b.standard_hours, 2);
        assert_eq!(b.rush_hours, 2);
        assert_eq!(b.total, 2 * 15_000 + 2 * 18_000);
    }

    #[test]
    fn night_wins_over_weekend_rush_and_holidays() {
        // Saturday night, and a full-day holiday on Sunday 2025-02-09
        let e = engine_with(vec![holiday(2025, 2, 9, (0, 0), (23, 59))]);
        let b = e
            .calculate_charge(at(2025, 2, 8, 22, 0), at(2025, 2, 9, 6, 0), VehicleType::Bike)
            .unwrap();
        assert_eq!(b.night_hours, 6);
        assert_eq!(b.rush_hours, 2); // Sat 22:00 and Sun 05:00
        assert_eq!(b.standard_hours, 0);
        assert!(b
            .hours
            .iter()
            .filter(|h| is_night_hour(h.starts_at.hour()))
            .all(|h| h.tier == RateTier::Night));
    }

    #[test]
    fn holiday_window_replaces_weekly_rules() {
        // Friday 2025-04-18 (Good Friday), rush 08:00–16:00
        let e = engine_with(vec![holiday(2025, 4, 18, (8, 0), (16, 0))]);
        let b = e
            .calculate_charge(at(2025, 4, 18, 7, 0), at(2025, 4, 18, 19, 0), VehicleType::Car)
            .unwrap();
        // 07 std, 08–15 rush (8h), 16–18 std: the Friday 17:00 rule does not apply
        assert_eq!(b.rush_hours, 8);
        assert_eq!(b.standard_hours, 4);
        assert_eq!(b.night_hours, 0);
    }

    #[test]
    fn holiday_on_weekday_outside_window_is_standard() {
        let e = engine_with(vec![holiday(2025, 8, 15, (8, 0), (14, 0))]);
        assert_eq!(classify_hour(at(2025, 8, 15, 15, 0), e.calendar()), RateTier::Standard);
        assert_eq!(classify_hour(at(2025, 8, 15, 8, 0), e.calendar()), RateTier::Rush);
    }

    #[test]
    fn wrapping_holiday_window() {
        let cal = HolidayCalendar::new(vec![holiday(2025, 3, 5, (20, 0), (6, 0))]);
        assert_eq!(classify_hour(at(2025, 3, 5, 21, 0), &cal), RateTier::Rush);
        // 05:00 is inside the wrapped window and past the night tier
        assert_eq!(classify_hour(at(2025, 3, 5, 5, 0), &cal), RateTier::Rush);
        assert_eq!(classify_hour(at(2025, 3, 5, 23, 0), &cal), RateTier::Night);
        assert_eq!(classify_hour(at(2025, 3, 5, 12, 0), &cal), RateTier::Standard);
    }

    #[test]
    fn full_day_holiday_marks_all_daytime_hours() {
        let cal = HolidayCalendar::new(vec![holiday(2025, 1, 1, (0, 0), (23, 59))]);
        for h in 5..23 {
            assert_eq!(classify_hour(at(2025, 1, 1, h, 0), &cal), RateTier::Rush);
        }
        assert_eq!(classify_hour(at(2025, 1, 1, 4, 0), &cal), RateTier::Night);
    }

    #[test]
    fn each_hour_classified_at_its_own_start() {
        // Thursday 23:30 → Friday 17:30: starts inside night, ends in Friday rush
        let b = engine()
            .calculate_charge(at(2025, 2, 6, 23, 30), at(2025, 2, 7, 17, 30), VehicleType::Car)
            .unwrap();
        assert_eq!(b.total_hours, 18);
        // 23:30, 00:30..04:30 → 6 night
        assert_eq!(b.night_hours, 6);
        // the last slice starts at 16:30, before the Friday rush
        assert_eq!(b.rush_hours, 0);
        assert_eq!(b.standard_hours, 12);
    }

    #[test]
    fn calculation_is_pure() {
        let e = engine();
        let a = e
            .calculate_charge(at(2025, 2, 7, 10, 0), at(2025, 2, 8, 15, 20), VehicleType::Truck)
            .unwrap();
        let b = e
            .calculate_charge(at(2025, 2, 7, 10, 0), at(2025, 2, 8, 15, 20), VehicleType::Truck)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_rates_are_honoured() {
        let mut rates = RateTable::default();
        rates.car = VehicleRate::new(10_000, 1_000);
        rates.night_rate = 5_000;
        let e = TariffEngine::new(rates, HolidayCalendar::default());
        let b = e
            .calculate_charge(at(2025, 2, 7, 16, 0), at(2025, 2, 8, 0, 0), VehicleType::Car)
            .unwrap();
        // 16 std, 17–22 rush (6h), 23 night
        assert_eq!(b.standard_charge, 10_000);
        assert_eq!(b.rush_charge, 6 * 11_000);
        assert_eq!(b.night_charge, 5_000);
    }
}
