//! Time-window filtering
//!
//! Selects the subsequence of events whose date falls inside the requested
//! window, relative to an injected reference date. The reference date is a
//! parameter rather than the ambient clock so windowed output is
//! reproducible.

use chrono::{Duration, NaiveDate};
use clap::ValueEnum;

use crate::core::types::PitchEvent;

/// Selectable aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Period {
    /// Every recorded event
    #[default]
    All,
    /// Events in the reference date's calendar month
    Month,
    /// Events in the trailing 7 calendar days, inclusive
    Week,
    /// Events on the reference date
    Today,
}

/// Keep the events inside `period`, preserving input order.
///
/// Comparisons are lexicographic on the date strings; valid only because
/// ISO dates are fixed-width zero-padded.
pub(crate) fn filter_events(
    events: Vec<PitchEvent>,
    period: Period,
    today: NaiveDate,
) -> Vec<PitchEvent> {
    match period {
        Period::All => events,
        Period::Today => {
            let day = today.format("%Y-%m-%d").to_string();
            events.into_iter().filter(|e| e.date == day).collect()
        }
        Period::Month => {
            let month = today.format("%Y-%m").to_string();
            events
                .into_iter()
                .filter(|e| e.date.starts_with(&month))
                .collect()
        }
        Period::Week => {
            let cutoff = (today - Duration::days(7)).format("%Y-%m-%d").to_string();
            events
                .into_iter()
                .filter(|e| e.date.as_str() >= cutoff.as_str())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(date: &str) -> PitchEvent {
        PitchEvent {
            date: date.to_string(),
            ..Default::default()
        }
    }

    fn dates(events: &[PitchEvent]) -> Vec<&str> {
        events.iter().map(|e| e.date.as_str()).collect()
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn today_excludes_the_previous_day() {
        let events = vec![dated("2024-06-14"), dated("2024-06-15")];
        let kept = filter_events(events, Period::Today, reference());
        assert_eq!(dates(&kept), ["2024-06-15"]);
    }

    #[test]
    fn month_matches_on_the_year_month_prefix() {
        let events = vec![
            dated("2024-05-31"),
            dated("2024-06-01"),
            dated("2024-06-30"),
            dated("2024-07-01"),
        ];
        let kept = filter_events(events, Period::Month, reference());
        assert_eq!(dates(&kept), ["2024-06-01", "2024-06-30"]);
    }

    #[test]
    fn week_cutoff_is_inclusive() {
        let events = vec![
            dated("2024-06-07"),
            dated("2024-06-08"),
            dated("2024-06-15"),
        ];
        let kept = filter_events(events, Period::Week, reference());
        // 7 days before 2024-06-15 is 2024-06-08, inclusive
        assert_eq!(dates(&kept), ["2024-06-08", "2024-06-15"]);
    }

    #[test]
    fn week_spans_a_month_boundary() {
        let reference = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();
        let events = vec![dated("2024-06-25"), dated("2024-06-26"), dated("2024-07-01")];
        let kept = filter_events(events, Period::Week, reference);
        assert_eq!(dates(&kept), ["2024-06-26", "2024-07-01"]);
    }

    #[test]
    fn all_is_identity_and_preserves_order() {
        let events = vec![dated("2024-06-15"), dated("2020-01-01"), dated("2024-06-14")];
        let kept = filter_events(events, Period::All, reference());
        assert_eq!(dates(&kept), ["2024-06-15", "2020-01-01", "2024-06-14"]);
    }

    #[test]
    fn all_is_a_superset_of_every_other_period() {
        let events: Vec<PitchEvent> = [
            "2024-06-15",
            "2024-06-10",
            "2024-05-20",
            "2023-12-31",
        ]
        .iter()
        .map(|d| dated(d))
        .collect();

        let all = filter_events(events.clone(), Period::All, reference()).len();
        for period in [Period::Month, Period::Week, Period::Today] {
            let kept = filter_events(events.clone(), period, reference()).len();
            assert!(kept <= all, "{period:?}");
        }
    }
}
