//! Day and Range Filters
//!
//! Pure filters over the event list: they borrow the input, return a fresh
//! Vec and keep input order. Empty in, empty out.

use crate::event::{EventKind, MonthDay, RecurringEvent};

/// Category selection for the list and calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(EventKind),
}

impl KindFilter {
    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(only) => *only == kind,
        }
    }

    /// Wire/form value, the inverse of [`KindFilter::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind.as_str(),
        }
    }

    /// Anything unrecognized falls back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "birthday" => KindFilter::Only(EventKind::Birthday),
            "anniversary" => KindFilter::Only(EventKind::Anniversary),
            _ => KindFilter::All,
        }
    }
}

/// Events recurring exactly on `day`.
pub fn filter_by_day(events: &[RecurringEvent], day: MonthDay) -> Vec<RecurringEvent> {
    events
        .iter()
        .filter(|event| event.month_day == day)
        .cloned()
        .collect()
}

/// Events recurring anywhere within `month` (1-based).
pub fn filter_by_month(events: &[RecurringEvent], month: u32) -> Vec<RecurringEvent> {
    events
        .iter()
        .filter(|event| event.month_day.month() == month)
        .cloned()
        .collect()
}

/// Events matching the category selection; `All` is the identity filter.
pub fn filter_by_kind(events: &[RecurringEvent], filter: KindFilter) -> Vec<RecurringEvent> {
    events
        .iter()
        .filter(|event| filter.matches(event.kind))
        .cloned()
        .collect()
}

/// Drops deactivated events; they stay stored backend-side but never render.
pub fn filter_active(events: &[RecurringEvent]) -> Vec<RecurringEvent> {
    events.iter().filter(|event| event.active).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: u64, name: &str, kind: EventKind, month_day: &str) -> RecurringEvent {
        RecurringEvent {
            id,
            name: name.to_string(),
            kind,
            month_day: month_day.parse().expect("valid month-day"),
            origin_year: None,
            secondary_name: None,
            contact_phone: None,
            active: true,
        }
    }

    fn sample() -> Vec<RecurringEvent> {
        vec![
            make_event(1, "A", EventKind::Birthday, "03-15"),
            make_event(2, "B", EventKind::Birthday, "03-16"),
            make_event(3, "C", EventKind::Anniversary, "03-15"),
            make_event(4, "D", EventKind::Anniversary, "07-01"),
        ]
    }

    #[test]
    fn test_filter_by_day_exact_match_only() {
        let events = sample();
        let day = "03-15".parse().unwrap();
        let matched = filter_by_day(&events, day);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].name, "A");
        assert_eq!(matched[1].name, "C");
    }

    #[test]
    fn test_filter_by_day_is_idempotent() {
        let events = sample();
        let day = "03-15".parse().unwrap();
        let once = filter_by_day(&events, day);
        let twice = filter_by_day(&once, day);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_day_leaves_input_untouched() {
        let events = sample();
        let before = events.clone();
        let _ = filter_by_day(&events, "03-15".parse().unwrap());
        assert_eq!(events, before);
    }

    #[test]
    fn test_filter_by_month() {
        let events = sample();
        let march = filter_by_month(&events, 3);
        assert_eq!(march.len(), 3);
        let july = filter_by_month(&events, 7);
        assert_eq!(july.len(), 1);
        assert_eq!(july[0].name, "D");
    }

    #[test]
    fn test_kind_filter_all_is_identity() {
        let events = sample();
        assert_eq!(filter_by_kind(&events, KindFilter::All), events);
    }

    #[test]
    fn test_month_then_kind_composition_preserves_order() {
        let events = sample();
        let march_birthdays =
            filter_by_kind(&filter_by_month(&events, 3), KindFilter::Only(EventKind::Birthday));
        assert_eq!(march_birthdays.len(), 2);
        assert_eq!(march_birthdays[0].name, "A");
        assert_eq!(march_birthdays[1].name, "B");
    }

    #[test]
    fn test_filter_active_drops_inactive() {
        let mut events = sample();
        events[1].active = false;
        let active = filter_active(&events);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|event| event.name != "B"));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_by_day(&[], "01-01".parse().unwrap()).is_empty());
        assert!(filter_by_month(&[], 1).is_empty());
        assert!(filter_by_kind(&[], KindFilter::All).is_empty());
    }

    #[test]
    fn test_kind_filter_parse_round_trip() {
        for raw in ["all", "birthday", "anniversary"] {
            assert_eq!(KindFilter::parse(raw).as_str(), raw);
        }
        assert_eq!(KindFilter::parse("nonsense"), KindFilter::All);
    }
}
