// Date utility functions

use chrono::{Datelike, NaiveDate};

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Out-of-range months count as 31.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Fraction of the year elapsed, counting today as completed.
pub fn year_progress(today: NaiveDate) -> f64 {
    f64::from(today.ordinal()) / f64::from(days_in_year(today.year()))
}

/// Short summary line such as "Day 292 of 365 (80%)".
pub fn year_summary(today: NaiveDate) -> String {
    let percent = (year_progress(today) * 100.0).round() as u32;
    format!(
        "Day {} of {} ({}%)",
        today.ordinal(),
        days_in_year(today.year()),
        percent
    )
}
