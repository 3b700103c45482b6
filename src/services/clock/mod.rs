//! Clock source for the widget.
//!
//! The window asks a [`Clock`] for "now" on every tick instead of calling
//! `chrono::Local::now()` directly, so tests can pin the date.

use chrono::{DateTime, Local, NaiveDate};

/// Format of the live clock line, e.g. "Sunday, October 19, 2025 - 09:05:07 PM".
pub const CLOCK_FORMAT: &str = "%A, %B %-d, %Y - %I:%M:%S %p";

pub trait Clock {
    /// Current local date and time
    fn now(&self) -> DateTime<Local>;

    /// Current local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the operating system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Move the fixed instant, e.g. to simulate crossing midnight.
    pub fn set(&mut self, instant: DateTime<Local>) {
        self.instant = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

/// Text shown on the clock line for `now`.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format(CLOCK_FORMAT).to_string()
}
