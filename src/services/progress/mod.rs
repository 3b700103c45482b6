//! Month progress calculation.
//!
//! Turns a calendar date into twelve [`MonthProgress`] values: every month
//! before today's is complete, today's month is filled by the share of its
//! days that have started, and every later month is empty.

use crate::models::month_progress::MonthProgress;
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate};

/// Progress of all twelve months of `today`'s year, January first.
pub fn compute_month_progress(today: NaiveDate) -> [MonthProgress; 12] {
    let current_month = today.month();
    let total_days = days_in_month(today.year(), current_month);
    let completed_days = today.day();

    std::array::from_fn(|index| {
        let month = index as u32 + 1;
        if month < current_month {
            MonthProgress::elapsed(index)
        } else if month == current_month {
            MonthProgress::current(index, completed_days, total_days)
        } else {
            MonthProgress::upcoming(index)
        }
    })
}

/// The month containing `today`.
pub fn current_month_progress(today: NaiveDate) -> MonthProgress {
    let index = today.month0() as usize;
    compute_month_progress(today)[index]
}
