use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days between a window's end anchor and its start; the window itself
/// spans seven days inclusive.
pub const WINDOW_SPAN_DAYS: i64 = 6;

/// End date computed from a chosen start, with the clamp made explicit
/// so callers can tell the operator the window was shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedEnd {
    Exact(NaiveDate),
    Clamped(NaiveDate),
}

impl DerivedEnd {
    pub fn date(&self) -> NaiveDate {
        match self {
            DerivedEnd::Exact(date) | DerivedEnd::Clamped(date) => *date,
        }
    }

    pub fn was_clamped(&self) -> bool {
        matches!(self, DerivedEnd::Clamped(_))
    }
}

pub fn derive_start_from_end(end: NaiveDate) -> NaiveDate {
    end - Duration::days(WINDOW_SPAN_DAYS)
}

/// `min(start + 6 days, today)`. Clamping is informational, not an
/// error.
pub fn derive_end_from_start(start: NaiveDate, today: NaiveDate) -> DerivedEnd {
    let end = start + Duration::days(WINDOW_SPAN_DAYS);
    if end > today {
        DerivedEnd::Clamped(today)
    } else {
        DerivedEnd::Exact(end)
    }
}

/// Payroll weeks close on Saturday; an anchor must be a Saturday that
/// has already passed (or is today).
pub fn is_selectable_anchor(date: NaiveDate, today: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat && date <= today
}

/// A fixed trailing seven-day range. `start` is always exactly six days
/// before `end`, except when `from_start` had to clamp the end to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayrollWindow {
    pub fn anchored_to_end(end: NaiveDate) -> Self {
        Self {
            start: derive_start_from_end(end),
            end,
        }
    }

    pub fn from_start(start: NaiveDate, today: NaiveDate) -> (Self, bool) {
        let derived = derive_end_from_start(start, today);
        (
            Self {
                start,
                end: derived.date(),
            },
            derived.was_clamped(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_anchor_yields_the_preceding_sunday() {
        // 2025-03-22 is a Saturday.
        let end = date(2025, 3, 22);
        assert_eq!(end.weekday(), Weekday::Sat);
        let start = derive_start_from_end(end);
        assert_eq!(start, date(2025, 3, 16));
        assert_eq!(start.weekday(), Weekday::Sun);
    }

    #[test]
    fn forward_derivation_clamps_to_today() {
        let start = date(2025, 3, 15);
        let today = date(2025, 3, 20);
        let derived = derive_end_from_start(start, today);
        assert_eq!(derived, DerivedEnd::Clamped(today));
        assert!(derived.was_clamped());
    }

    #[test]
    fn forward_derivation_is_exact_when_window_has_passed() {
        let start = date(2025, 3, 9);
        let today = date(2025, 3, 20);
        let derived = derive_end_from_start(start, today);
        assert_eq!(derived, DerivedEnd::Exact(date(2025, 3, 15)));
    }

    #[test]
    fn derivations_round_trip_when_no_clamp_occurs() {
        let today = date(2025, 3, 20);
        for offset in 0..30 {
            let start = date(2025, 1, 1) + Duration::days(offset);
            let derived = derive_end_from_start(start, today);
            if !derived.was_clamped() {
                assert_eq!(derive_start_from_end(derived.date()), start);
            }
        }
    }

    #[test]
    fn anchors_must_be_saturdays_not_in_the_future() {
        let today = date(2025, 3, 20); // Thursday
        assert!(is_selectable_anchor(date(2025, 3, 15), today));
        assert!(!is_selectable_anchor(date(2025, 3, 22), today)); // future Saturday
        assert!(!is_selectable_anchor(date(2025, 3, 14), today)); // Friday
        assert!(!is_selectable_anchor(date(2025, 3, 16), today)); // Sunday

        // A Saturday "today" is itself selectable.
        assert!(is_selectable_anchor(date(2025, 3, 22), date(2025, 3, 22)));
    }

    #[test]
    fn window_constructors_maintain_the_span() {
        let window = PayrollWindow::anchored_to_end(date(2025, 3, 22));
        assert_eq!(window.start, date(2025, 3, 16));

        let (window, clamped) = PayrollWindow::from_start(date(2025, 3, 16), date(2025, 3, 25));
        assert!(!clamped);
        assert_eq!(window.end, date(2025, 3, 22));

        let (window, clamped) = PayrollWindow::from_start(date(2025, 3, 23), date(2025, 3, 25));
        assert!(clamped);
        assert_eq!(window.end, date(2025, 3, 25));
    }
}
