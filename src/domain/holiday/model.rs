//! Holiday calendar entities

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::support::time::hh_mm;

/// Rush-surcharge window of a holiday, `[from, to)` by hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushWindow {
    #[serde(rename = "rush_from", with = "hh_mm")]
    pub from: NaiveTime,
    #[serde(rename = "rush_to", with = "hh_mm")]
    pub to: NaiveTime,
}

impl RushWindow {
    pub fn new(from: NaiveTime, to: NaiveTime) -> Self {
        Self { from, to }
    }

    /// `00:00–23:59`: every non-night hour of the date is rush.
    pub fn is_full_day(&self) -> bool {
        self.from == NaiveTime::MIN && self.to.hour() == 23 && self.to.minute() == 59
    }

    /// Whether an hour of day falls inside the window.
    ///
    /// Only the hour component of each bound is compared. A window whose
    /// start is later than its end wraps past midnight.
    pub fn contains_hour(&self, hour: u32) -> bool {
        if self.is_full_day() {
            return true;
        }
        let start = self.from.hour();
        let end = self.to.hour();
        if start <= end {
            hour >= start && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}

/// A named holiday with its own rush window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
    #[serde(flatten)]
    pub rush: RushWindow,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>, rush: RushWindow) -> Self {
        Self {
            date,
            name: name.into(),
            rush,
        }
    }
}

/// Read-only, date-ordered list of holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    records: Vec<HolidayRecord>,
}

impl HolidayCalendar {
    pub fn new(mut records: Vec<HolidayRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// Holiday falling on `date`, if any. Linear scan; the table is small.
    pub fn find(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<HolidayRecord> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = HolidayRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
