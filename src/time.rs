//! Browser Clock and Date Labels
//!
//! The browser supplies "now"; the core crate stays clock-free and takes
//! dates as arguments.

use chrono::{Datelike, NaiveDate};

use jubilee_core::{resolve_in_year, MonthDay};

/// Today's civil date in the browser's local timezone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("browser clock yields a real date")
}

pub fn current_year() -> i32 {
    today().year()
}

/// "Monday, June 10, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "June 2025"
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Jun 10, 2025"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "June 10" label for a recurrence point; the year only picks leap handling.
pub fn month_day_label(day: MonthDay) -> String {
    resolve_in_year(day, 2024).format("%B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(long_date(date(2025, 6, 2)), "Monday, June 2, 2025");
        assert_eq!(month_year(date(2025, 6, 2)), "June 2025");
        assert_eq!(short_date(date(2025, 6, 2)), "Jun 2, 2025");
    }

    #[test]
    fn test_month_day_label() {
        assert_eq!(month_day_label("03-15".parse().unwrap()), "March 15");
        assert_eq!(month_day_label("02-29".parse().unwrap()), "February 29");
    }
}
