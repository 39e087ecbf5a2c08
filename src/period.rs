//! Active accounting-period computation.
//!
//! Reports cover a rolling window anchored on a reference date: the
//! caller's "now", or a projection date simulating it. All-accounts
//! views use the calendar month; single-account views honor the
//! account's custom financial-month start day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Which reporting mode a window is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodMode {
    /// All accounts together: the calendar month of the reference date.
    AllAccounts,
    /// One account with a custom financial-month boundary.
    SingleAccount {
        /// Day of month (1..=31) the account's financial month begins.
        start_day: u32,
    },
}

/// The inclusive `[start, end]` range transactions are filtered
/// against for reporting.
///
/// Produced by [`compute`]; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    /// First instant of the window.
    start: NaiveDateTime,
    /// Last instant of the window (23:59:59.999 of the reference date).
    end: NaiveDateTime,
}

impl PeriodWindow {
    /// Returns the first instant of the window.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the last instant of the window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns `true` if the timestamp falls inside the window,
    /// inclusive on both ends.
    #[inline]
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Computes the currently active reporting window.
///
/// The reference date is `projection` when set (only the date matters,
/// never a time of day) and `now`'s date otherwise. The window always
/// ends at 23:59:59.999 of the reference date.
///
/// - [`PeriodMode::AllAccounts`]: starts at the first day of the
///   reference month.
/// - [`PeriodMode::SingleAccount`]: starts at `start_day` of the
///   reference month when the reference day has reached it, otherwise
///   `start_day` of the previous month (with December → prior-year
///   January rollover). A `start_day` past the end of the target month
///   is clamped to that month's last day.
///
/// If inconsistent inputs ever produce `end < start`, the window
/// collapses to the single day of `end`.
///
/// This function is pure and total for valid inputs; it never fails.
#[must_use]
pub fn compute(
    now: NaiveDateTime,
    projection: Option<NaiveDate>,
    mode: PeriodMode,
) -> PeriodWindow {
    let reference = projection.unwrap_or_else(|| now.date());
    let end = end_of_day(reference);

    let start_date = match mode {
        PeriodMode::AllAccounts => first_day_of_month(reference),
        PeriodMode::SingleAccount { start_day } => {
            let requested = start_day.max(1);
            let (target_year, target_month) = if reference.day() >= requested {
                (reference.year(), reference.month())
            } else {
                previous_month(reference.year(), reference.month())
            };
            day_in_month(target_year, target_month, requested)
        }
    };
    let mut start = start_of_day(start_date);

    if end < start {
        start = start_of_day(end.date());
    }

    PeriodWindow { start, end }
}

/// First instant of the given date.
fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last instant of the given date (millisecond resolution).
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_instant = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_instant)
}

/// First day of the date's month.
fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The month preceding the given one, with year rollover.
const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The given day within a month, clamped to the month's last day when
/// the month is shorter than `day`.
fn day_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| last_day_of_month(year, month))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the given month, if the month is valid.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a date, panicking on invalid input.
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Builds a mid-day timestamp.
    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn all_accounts_starts_at_first_of_month() {
        let window = compute(noon(2024, 4, 10), None, PeriodMode::AllAccounts);
        assert_eq!(window.start(), start_of_day(date(2024, 4, 1)));
        assert_eq!(window.end(), end_of_day(date(2024, 4, 10)));
    }

    #[test]
    fn single_account_after_start_day() {
        let window = compute(
            noon(2024, 4, 26),
            None,
            PeriodMode::SingleAccount { start_day: 25 },
        );
        assert_eq!(window.start(), start_of_day(date(2024, 4, 25)));
    }

    #[test]
    fn single_account_before_start_day_uses_previous_month() {
        // April 10 with a start day of 25: the financial month began
        // on March 25.
        let window = compute(
            noon(2024, 4, 10),
            None,
            PeriodMode::SingleAccount { start_day: 25 },
        );
        assert_eq!(window.start(), start_of_day(date(2024, 3, 25)));
        assert_eq!(window.end(), end_of_day(date(2024, 4, 10)));
    }

    #[test]
    fn single_account_on_start_day_stays_in_month() {
        let window = compute(
            noon(2024, 4, 25),
            None,
            PeriodMode::SingleAccount { start_day: 25 },
        );
        assert_eq!(window.start(), start_of_day(date(2024, 4, 25)));
    }

    #[test]
    fn december_rolls_over_to_prior_year() {
        let window = compute(
            noon(2024, 1, 5),
            None,
            PeriodMode::SingleAccount { start_day: 25 },
        );
        assert_eq!(window.start(), start_of_day(date(2023, 12, 25)));
    }

    #[test]
    fn start_day_clamps_to_short_month() {
        // Start day 31 with a March reference before the 31st: the
        // target month is February, which has no 31st.
        let leap = compute(
            noon(2024, 3, 10),
            None,
            PeriodMode::SingleAccount { start_day: 31 },
        );
        assert_eq!(leap.start(), start_of_day(date(2024, 2, 29)));

        let common = compute(
            noon(2023, 3, 10),
            None,
            PeriodMode::SingleAccount { start_day: 31 },
        );
        assert_eq!(common.start(), start_of_day(date(2023, 2, 28)));
    }

    #[test]
    fn zero_start_day_is_treated_as_one() {
        let window = compute(
            noon(2024, 4, 10),
            None,
            PeriodMode::SingleAccount { start_day: 0 },
        );
        assert_eq!(window.start(), start_of_day(date(2024, 4, 1)));
    }

    #[test]
    fn projection_overrides_now() {
        let window = compute(
            noon(2024, 6, 20),
            Some(date(2024, 4, 10)),
            PeriodMode::AllAccounts,
        );
        assert_eq!(window.start(), start_of_day(date(2024, 4, 1)));
        assert_eq!(window.end(), end_of_day(date(2024, 4, 10)));
    }

    #[test]
    fn window_end_is_end_of_day() {
        let window = compute(noon(2024, 4, 10), None, PeriodMode::AllAccounts);
        let inside = date(2024, 4, 10).and_hms_opt(23, 59, 59).unwrap();
        let outside = date(2024, 4, 11).and_hms_opt(0, 0, 0).unwrap();
        assert!(window.contains(inside));
        assert!(!window.contains(outside));
    }

    #[test]
    fn contains_is_inclusive_at_start() {
        let window = compute(noon(2024, 4, 10), None, PeriodMode::AllAccounts);
        assert!(window.contains(window.start()));
        assert!(window.contains(window.end()));
    }

    #[test]
    fn start_never_exceeds_end() {
        let cases = [
            (noon(2024, 2, 29), None, PeriodMode::AllAccounts),
            (
                noon(2024, 1, 1),
                None,
                PeriodMode::SingleAccount { start_day: 31 },
            ),
            (
                noon(2024, 12, 31),
                Some(date(2020, 1, 1)),
                PeriodMode::SingleAccount { start_day: 15 },
            ),
        ];
        for (now, projection, mode) in cases {
            let window = compute(now, projection, mode);
            assert!(window.start() <= window.end());
        }
    }
}
