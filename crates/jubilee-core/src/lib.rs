//! Calendar aggregation engine for the Jubilee celebration tracker.
//!
//! Pure logic only: the recurring-event model, day/range filters, the month
//! grid layout and the view navigation cursor. Nothing in this crate touches
//! the network or the browser, so all of it runs and tests on any target.

pub mod event;
pub mod filter;
pub mod grid;
pub mod nav;

pub use event::{age_or_years, resolve_in_year, EventKind, MonthDay, ParseMonthDayError, RecurringEvent};
pub use filter::{filter_active, filter_by_day, filter_by_kind, filter_by_month, KindFilter};
pub use grid::{days_in_month, month_days, month_grid, DayCell, MonthGrid};
pub use nav::{NavState, ViewMode};
