//! View Navigation
//!
//! List/calendar mode with a shared date cursor. Transitions are pure and
//! infallible; only the data fetch that follows a move can fail, and a failed
//! fetch leaves the cursor where it is.

use chrono::{Datelike, Days, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

/// Navigation cursor for the celebrations view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub mode: ViewMode,
    pub cursor: NaiveDate,
}

impl NavState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::List,
            cursor: today,
        }
    }

    pub fn previous_day(&mut self) {
        if let Some(cursor) = self.cursor.checked_sub_days(Days::new(1)) {
            self.cursor = cursor;
        }
    }

    pub fn next_day(&mut self) {
        if let Some(cursor) = self.cursor.checked_add_days(Days::new(1)) {
            self.cursor = cursor;
        }
    }

    /// Day-of-month clamps to the target month's length (Jan 31 -> Feb 28).
    pub fn previous_month(&mut self) {
        if let Some(cursor) = self.cursor.checked_sub_months(Months::new(1)) {
            self.cursor = cursor;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(cursor) = self.cursor.checked_add_months(Months::new(1)) {
            self.cursor = cursor;
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.cursor = today;
    }

    /// Mode changes keep the cursor; callers re-fetch at the new granularity.
    pub fn switch_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.cursor == date
    }

    pub fn same_month_as(&self, date: NaiveDate) -> bool {
        self.cursor.year() == date.year() && self.cursor.month() == date.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_day_navigation_crosses_month_boundary() {
        let mut nav = NavState::new(date(2025, 3, 31));
        nav.next_day();
        assert_eq!(nav.cursor, date(2025, 4, 1));
        nav.previous_day();
        assert_eq!(nav.cursor, date(2025, 3, 31));
    }

    #[test]
    fn test_month_navigation_round_trip_stays_in_month() {
        for start in [date(2025, 1, 31), date(2025, 3, 15), date(2024, 12, 31)] {
            let mut nav = NavState::new(start);
            nav.next_month();
            nav.previous_month();
            assert!(
                nav.same_month_as(start),
                "round trip from {} landed on {}",
                start,
                nav.cursor
            );
        }
    }

    #[test]
    fn test_month_navigation_clamps_day_of_month() {
        let mut nav = NavState::new(date(2025, 1, 31));
        nav.next_month();
        assert_eq!(nav.cursor, date(2025, 2, 28));
        nav.next_month();
        // The clamp sticks; there is no snap back to the 31st.
        assert_eq!(nav.cursor, date(2025, 3, 28));
    }

    #[test]
    fn test_month_navigation_crosses_year_boundary() {
        let mut nav = NavState::new(date(2024, 12, 10));
        nav.next_month();
        assert_eq!(nav.cursor, date(2025, 1, 10));
        nav.previous_month();
        nav.previous_month();
        assert_eq!(nav.cursor, date(2024, 11, 10));
    }

    #[test]
    fn test_go_to_today_from_any_cursor() {
        let today = date(2025, 6, 2);
        let mut nav = NavState::new(date(2023, 1, 1));
        nav.go_to_today(today);
        assert!(nav.is_on(today));
    }

    #[test]
    fn test_switch_mode_retains_cursor() {
        let mut nav = NavState::new(date(2025, 6, 2));
        nav.switch_mode(ViewMode::Calendar);
        assert_eq!(nav.mode, ViewMode::Calendar);
        assert_eq!(nav.cursor, date(2025, 6, 2));
        nav.switch_mode(ViewMode::List);
        assert_eq!(nav.mode, ViewMode::List);
        assert_eq!(nav.cursor, date(2025, 6, 2));
    }
}
