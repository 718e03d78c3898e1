//! Recurring Event Model
//!
//! Events recur annually on a month-day pair. Resolving one against a target
//! year yields a concrete date; the origin year, when known, yields an age.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Anniversary,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Birthday => "Birthday",
            EventKind::Anniversary => "Anniversary",
        }
    }

    /// Wire value, e.g. for select inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Birthday => "birthday",
            EventKind::Anniversary => "anniversary",
        }
    }
}

/// Annual recurrence point, canonical form `MM-DD`.
///
/// Feb 29 is storable; what it means in a non-leap year is decided by
/// [`resolve_in_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMonthDayError {
    #[error("expected MM-DD, got {0:?}")]
    Malformed(String),
    #[error("month {0} out of range")]
    MonthOutOfRange(u32),
    #[error("day {day} invalid for month {month}")]
    DayOutOfRange { month: u32, day: u32 },
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, ParseMonthDayError> {
        if !(1..=12).contains(&month) {
            return Err(ParseMonthDayError::MonthOutOfRange(month));
        }
        if day < 1 || day > max_day_in_month(month) {
            return Err(ParseMonthDayError::DayOutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// A calendar date is always a valid recurrence point.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Max day per month, counting Feb as 29 so stored leap-day events stay
/// representable.
fn max_day_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 29,
    }
}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (m, d) = s
            .split_once('-')
            .ok_or_else(|| ParseMonthDayError::Malformed(s.to_string()))?;
        let month = m
            .parse()
            .map_err(|_| ParseMonthDayError::Malformed(s.to_string()))?;
        let day = d
            .parse()
            .map_err(|_| ParseMonthDayError::Malformed(s.to_string()))?;
        Self::new(month, day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ParseMonthDayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(day: MonthDay) -> Self {
        day.to_string()
    }
}

/// One tracked celebration, as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringEvent {
    pub id: u64,
    pub name: String,
    #[serde(rename = "event_type")]
    pub kind: EventKind,
    #[serde(rename = "event_date")]
    pub month_day: MonthDay,
    #[serde(rename = "year", default, skip_serializing_if = "Option::is_none")]
    pub origin_year: Option<i32>,
    #[serde(rename = "spouse", default, skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    #[serde(rename = "phone_number", default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Resolve a recurrence point against a target year.
///
/// A stored Feb 29 resolves to March 1 when the target year is not a leap
/// year.
pub fn resolve_in_year(month_day: MonthDay, target_year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(target_year, month_day.month(), month_day.day()).unwrap_or_else(|| {
        // Only Feb 29 can fail for a validated MonthDay.
        NaiveDate::from_ymd_opt(target_year, 3, 1).expect("Mar 1 exists in every year")
    })
}

/// Age (birthdays) or years together (anniversaries) as of `current_year`.
/// None when the origin year is unknown.
pub fn age_or_years(event: &RecurringEvent, current_year: i32) -> Option<i32> {
    event.origin_year.map(|year| current_year - year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(name: &str, month_day: &str, origin_year: Option<i32>) -> RecurringEvent {
        RecurringEvent {
            id: 1,
            name: name.to_string(),
            kind: EventKind::Birthday,
            month_day: month_day.parse().expect("valid month-day"),
            origin_year,
            secondary_name: None,
            contact_phone: None,
            active: true,
        }
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        for raw in ["01-01", "03-15", "12-31", "02-29"] {
            let day: MonthDay = raw.parse().expect("should parse");
            assert_eq!(day.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_accepts_unpadded_components() {
        let day: MonthDay = "3-5".parse().expect("should parse");
        assert_eq!(day.to_string(), "03-05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "march 15".parse::<MonthDay>(),
            Err(ParseMonthDayError::Malformed(_))
        ));
        assert!(matches!(
            "0315".parse::<MonthDay>(),
            Err(ParseMonthDayError::Malformed(_))
        ));
        assert!(matches!(
            "13-01".parse::<MonthDay>(),
            Err(ParseMonthDayError::MonthOutOfRange(13))
        ));
        assert!(matches!(
            "04-31".parse::<MonthDay>(),
            Err(ParseMonthDayError::DayOutOfRange { month: 4, day: 31 })
        ));
        assert!(matches!(
            "02-30".parse::<MonthDay>(),
            Err(ParseMonthDayError::DayOutOfRange { month: 2, day: 30 })
        ));
    }

    #[test]
    fn test_resolve_matches_input_month_and_day() {
        let day: MonthDay = "06-10".parse().unwrap();
        let date = resolve_in_year(day, 2025);
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    }

    #[test]
    fn test_resolve_feb_29_in_leap_year() {
        let day: MonthDay = "02-29".parse().unwrap();
        assert_eq!(
            resolve_in_year(day, 2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_resolve_feb_29_rolls_to_mar_1_in_common_year() {
        let day: MonthDay = "02-29".parse().unwrap();
        assert_eq!(
            resolve_in_year(day, 2025),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_age_from_origin_year() {
        let event = make_event("Anna", "06-10", Some(2015));
        assert_eq!(age_or_years(&event, 2025), Some(10));
    }

    #[test]
    fn test_age_unknown_without_origin_year() {
        let event = make_event("Anna", "06-10", None);
        assert_eq!(age_or_years(&event, 2025), None);
    }

    #[test]
    fn test_event_deserializes_from_wire_format() {
        let raw = r#"{
            "id": 7,
            "name": "John Smith",
            "event_type": "birthday",
            "event_date": "03-15",
            "year": 1985,
            "phone_number": "+1234567890",
            "active": true
        }"#;
        let event: RecurringEvent = serde_json::from_str(raw).expect("should deserialize");
        assert_eq!(event.name, "John Smith");
        assert_eq!(event.kind, EventKind::Birthday);
        assert_eq!(event.month_day.to_string(), "03-15");
        assert_eq!(event.origin_year, Some(1985));
        assert_eq!(event.secondary_name, None);
    }

    #[test]
    fn test_event_active_defaults_to_true() {
        let raw = r#"{"id": 1, "name": "A", "event_type": "anniversary", "event_date": "06-10"}"#;
        let event: RecurringEvent = serde_json::from_str(raw).expect("should deserialize");
        assert!(event.active);
        assert_eq!(event.kind, EventKind::Anniversary);
    }
}
