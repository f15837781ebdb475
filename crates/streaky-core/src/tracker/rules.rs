//! Calendar-day streak transitions.
//!
//! Both functions are pure so the same rules serve the tracker and its tests.
//! Completion after a gap restarts at 1; passive reconciliation after a gap
//! drops to 0. The two paths are intentionally separate.

use chrono::NaiveDate;

/// How the previous completion day relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayGap {
    /// No completion recorded yet.
    Never,
    SameDay,
    Yesterday,
    /// Two or more calendar days ago.
    Lapsed(i64),
    /// Last completion is after today (clock moved backwards).
    Future,
}

impl DayGap {
    pub fn between(last_day: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(last_day) = last_day else {
            return DayGap::Never;
        };
        match (today - last_day).num_days() {
            0 => DayGap::SameDay,
            1 => DayGap::Yesterday,
            n if n > 1 => DayGap::Lapsed(n),
            _ => DayGap::Future,
        }
    }
}

/// Streak value after a completion on `today`.
pub fn streak_after_completion(streak: u32, last_day: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match DayGap::between(last_day, today) {
        DayGap::Never => 1,
        DayGap::SameDay => streak,
        DayGap::Yesterday => streak.saturating_add(1),
        DayGap::Lapsed(_) | DayGap::Future => 1,
    }
}

/// Whether a streak last extended on `last_day` has lapsed by `today`.
///
/// A one-day gap is not a lapse: the next completion still extends it.
pub fn has_lapsed(last_day: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(DayGap::between(last_day, today), DayGap::Lapsed(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn classifies_gaps() {
        assert_eq!(DayGap::between(None, day(10)), DayGap::Never);
        assert_eq!(DayGap::between(Some(day(10)), day(10)), DayGap::SameDay);
        assert_eq!(DayGap::between(Some(day(9)), day(10)), DayGap::Yesterday);
        assert_eq!(DayGap::between(Some(day(7)), day(10)), DayGap::Lapsed(3));
        assert_eq!(DayGap::between(Some(day(11)), day(10)), DayGap::Future);
    }

    #[test]
    fn completion_transitions() {
        assert_eq!(streak_after_completion(0, None, day(10)), 1);
        assert_eq!(streak_after_completion(4, Some(day(10)), day(10)), 4);
        assert_eq!(streak_after_completion(4, Some(day(9)), day(10)), 5);
        assert_eq!(streak_after_completion(4, Some(day(8)), day(10)), 1);
        assert_eq!(streak_after_completion(4, Some(day(12)), day(10)), 1);
    }

    #[test]
    fn completion_saturates() {
        assert_eq!(streak_after_completion(u32::MAX, Some(day(9)), day(10)), u32::MAX);
    }

    #[test]
    fn lapse_needs_two_day_gap() {
        assert!(!has_lapsed(None, day(10)));
        assert!(!has_lapsed(Some(day(10)), day(10)));
        assert!(!has_lapsed(Some(day(9)), day(10)));
        assert!(has_lapsed(Some(day(8)), day(10)));
        assert!(!has_lapsed(Some(day(15)), day(10)));
    }

    #[test]
    fn month_boundary_counts_as_yesterday() {
        let feb_end = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(DayGap::between(Some(feb_end), day(1)), DayGap::Yesterday);
    }
}
