// Test fixtures - reusable test data
// Provides consistent dates across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Feb 14, 2025 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Feb 28, 2025 (last day of a common February)
    pub fn feb_end_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }
}
