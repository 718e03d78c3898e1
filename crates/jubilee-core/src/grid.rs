//! Month Grid Builder
//!
//! Lays a month out for a Sunday-first, 7-column calendar: leading blank
//! cells to align the 1st under its weekday, then one cell per date with the
//! events recurring on it. Pure layout over data already fetched.

use chrono::{Datelike, NaiveDate};

use crate::event::{MonthDay, RecurringEvent};
use crate::filter::filter_by_day;

/// One renderable day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub events: Vec<RecurringEvent>,
    pub is_today: bool,
}

/// A month laid out for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    /// Blank placeholders before the 1st, always 0..=6.
    pub leading_blanks: usize,
    /// Every date of the month in order, no gaps, no duplicates.
    pub days: Vec<DayCell>,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("a day precedes every first of month")
        .day()
}

/// Every date of the given month, in order.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .map(|day| NaiveDate::from_ymd_opt(year, month, day).expect("day is within the month"))
        .collect()
}

/// Lay out the month containing `view_date`, attaching to each cell the
/// events recurring on that day. `today` drives the single `is_today` flag.
pub fn month_grid(view_date: NaiveDate, events: &[RecurringEvent], today: NaiveDate) -> MonthGrid {
    let first = view_date.with_day(1).expect("day 1 exists in every month");
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let days = month_days(first.year(), first.month())
        .into_iter()
        .map(|date| DayCell {
            date,
            events: filter_by_day(events, MonthDay::from_date(date)),
            is_today: date == today,
        })
        .collect();
    MonthGrid { leading_blanks, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn make_event(id: u64, month_day: &str) -> RecurringEvent {
        RecurringEvent {
            id,
            name: format!("Person {}", id),
            kind: EventKind::Birthday,
            month_day: month_day.parse().expect("valid month-day"),
            origin_year: None,
            secondary_name: None,
            contact_phone: None,
            active: true,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_grid_covers_whole_month_in_order() {
        let grid = month_grid(date(2025, 3, 14), &[], date(2025, 1, 1));
        assert_eq!(grid.days.len(), 31);
        for (index, cell) in grid.days.iter().enumerate() {
            assert_eq!(cell.date, date(2025, 3, index as u32 + 1));
        }
    }

    #[test]
    fn test_leading_blanks_align_first_weekday() {
        // Jun 1 2025 is a Sunday, Feb 1 2025 a Saturday.
        assert_eq!(month_grid(date(2025, 6, 15), &[], date(2025, 1, 1)).leading_blanks, 0);
        assert_eq!(month_grid(date(2025, 2, 10), &[], date(2025, 1, 1)).leading_blanks, 6);
    }

    #[test]
    fn test_leading_blanks_always_within_week() {
        for month in 1..=12 {
            let grid = month_grid(date(2025, month, 1), &[], date(2025, 1, 1));
            assert!(grid.leading_blanks <= 6, "month {}: {}", month, grid.leading_blanks);
            assert_eq!(
                grid.days.len() as u32,
                days_in_month(2025, month),
                "month {}",
                month
            );
        }
    }

    #[test]
    fn test_events_land_on_their_cell() {
        let events = vec![make_event(1, "03-15"), make_event(2, "03-15"), make_event(3, "04-01")];
        let grid = month_grid(date(2025, 3, 1), &events, date(2025, 1, 1));
        let cell = &grid.days[14];
        assert_eq!(cell.date, date(2025, 3, 15));
        assert_eq!(cell.events.len(), 2);
        // The April event belongs to no March cell.
        assert!(grid
            .days
            .iter()
            .all(|cell| cell.events.iter().all(|event| event.id != 3)));
    }

    #[test]
    fn test_exactly_one_today_cell_in_current_month() {
        let today = date(2025, 3, 15);
        let grid = month_grid(date(2025, 3, 1), &[], today);
        let flagged: Vec<_> = grid.days.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);
    }

    #[test]
    fn test_no_today_cell_outside_current_month() {
        let grid = month_grid(date(2025, 4, 1), &[], date(2025, 3, 15));
        assert!(grid.days.iter().all(|cell| !cell.is_today));
    }
}
