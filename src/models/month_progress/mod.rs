//! Month progress model
//!
//! One `MonthProgress` value describes how much of a single calendar month
//! has elapsed relative to "today". The calculator in
//! `services::progress` produces twelve of them, one per month, in order.

/// Three-letter labels drawn on the month bars, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Elapsed-progress of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthProgress {
    /// Zero-based month index (0 = January)
    pub index: usize,
    /// Fixed three-letter label, see [`MONTH_LABELS`]
    pub label: &'static str,
    /// Fraction of the month elapsed, always within [0.0, 1.0]
    pub fill_ratio: f64,
    /// True for the current month and every month before it
    pub is_filled: bool,
}

impl MonthProgress {
    /// A month that lies entirely in the past.
    pub fn elapsed(index: usize) -> Self {
        Self::new(index, 1.0, true)
    }

    /// A month that has not started yet.
    pub fn upcoming(index: usize) -> Self {
        Self::new(index, 0.0, false)
    }

    /// The month containing today, `completed_days` of `total_days` elapsed.
    pub fn current(index: usize, completed_days: u32, total_days: u32) -> Self {
        let ratio = if total_days == 0 {
            0.0
        } else {
            f64::from(completed_days) / f64::from(total_days)
        };
        Self::new(index, ratio.clamp(0.0, 1.0), true)
    }

    fn new(index: usize, fill_ratio: f64, is_filled: bool) -> Self {
        Self {
            index,
            label: MONTH_LABELS[index % 12],
            fill_ratio,
            is_filled,
        }
    }

    /// One-based month number as used by `chrono::Datelike::month`.
    pub fn month_number(&self) -> u32 {
        self.index as u32 + 1
    }

    /// Whether only part of this month has elapsed.
    pub fn is_partial(&self) -> bool {
        self.fill_ratio > 0.0 && self.fill_ratio < 1.0
    }
}
