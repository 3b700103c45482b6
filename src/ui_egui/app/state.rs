use crate::models::month_progress::MonthProgress;
use crate::services::progress::compute_month_progress;
use crate::ui_egui::month_bar::MonthBar;
use crate::ui_egui::theme::Theme;
use crate::utils::date::year_summary;
use chrono::NaiveDate;

/// Everything one frame of the widget draws.
///
/// Snapshots are never edited in place: toggling the theme or moving to a
/// new date produces a new value that replaces the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    theme: Theme,
    today: NaiveDate,
    months: [MonthProgress; 12],
    quote: String,
}

impl AppState {
    pub fn new(theme: Theme, today: NaiveDate, quote: impl Into<String>) -> Self {
        Self {
            theme,
            today,
            months: compute_month_progress(today),
            quote: quote.into(),
        }
    }

    pub fn with_theme_toggled(&self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self.clone()
        }
    }

    /// Snapshot with month progress recomputed for `today`
    pub fn with_date(&self, today: NaiveDate) -> Self {
        Self {
            today,
            months: compute_month_progress(today),
            ..self.clone()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn months(&self) -> &[MonthProgress; 12] {
        &self.months
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// One bar per month, drawn with the snapshot's theme
    pub fn bars(&self) -> Vec<MonthBar> {
        self.months
            .iter()
            .map(|month| MonthBar::from_progress(month, self.theme))
            .collect()
    }

    /// "Day N of 365 (x%)" line under the bars
    pub fn summary(&self) -> String {
        year_summary(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_toggle_keeps_progress_and_quote() {
        let state = AppState::new(Theme::Dark, date(2025, 3, 15), "Keep going.");
        let toggled = state.with_theme_toggled();

        assert_eq!(toggled.theme(), Theme::Light);
        assert_eq!(toggled.months(), state.months());
        assert_eq!(toggled.quote(), "Keep going.");
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(toggled.with_theme_toggled(), state);
    }

    #[test]
    fn test_with_date_recomputes_months() {
        let state = AppState::new(Theme::Light, date(2025, 1, 31), "Start now.");
        let next = state.with_date(date(2025, 2, 1));

        assert_eq!(next.months()[0].fill_ratio, 1.0);
        assert_eq!(next.months()[1].fill_ratio, 1.0 / 28.0);
        assert!(next.months()[1].is_filled);
        assert_eq!(next.theme(), Theme::Light);
        assert_eq!(state.today(), date(2025, 1, 31));
    }

    #[test]
    fn test_bars_follow_theme() {
        let state = AppState::new(Theme::Dark, date(2025, 6, 10), "");
        let bars = state.with_theme_toggled().bars();

        assert_eq!(bars.len(), 12);
        assert!(bars.iter().all(|bar| bar.theme() == Theme::Light));
        assert_eq!(bars[5].label(), "JUN");
        assert_eq!(bars[5].fill_ratio(), 10.0 / 30.0);
    }

    #[test]
    fn test_summary() {
        let state = AppState::new(Theme::Dark, date(2025, 12, 31), "");
        assert_eq!(state.summary(), "Day 365 of 365 (100%)");
    }
}
