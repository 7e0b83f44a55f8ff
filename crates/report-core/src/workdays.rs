//! Business-day arithmetic for the reporting range.

use chrono::{Datelike, NaiveDate, Weekday};

/// Hours in one working day.
pub const WORK_HOURS_PER_DAY: f64 = 8.0;

/// Count the weekdays between `start` and `end`, both inclusive.
///
/// Saturdays and Sundays are excluded. A range with `end` before `start`
/// counts zero days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use report_core::workdays::business_days_between;
///
/// let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let fri = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(business_days_between(mon, fri), 5);
/// ```
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> u64 {
    if end < start {
        return 0;
    }

    let mut days = 0u64;
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Average resolution duration in work days for one role.
///
/// The range's business days convert to work hours, divide across the
/// resolved tickets, and normalize back to days. Zero resolved tickets yield
/// an average of 0 rather than a division error.
pub fn average_days_per_resolved(business_days: u64, resolved_count: u64) -> f64 {
    if resolved_count == 0 {
        return 0.0;
    }
    let work_hours = business_days as f64 * WORK_HOURS_PER_DAY;
    let hours_per_ticket = work_hours / resolved_count as f64;
    hours_per_ticket / WORK_HOURS_PER_DAY
}
