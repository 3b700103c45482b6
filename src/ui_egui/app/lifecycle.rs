use super::state::AppState;
use super::YearProgressApp;
use crate::models::settings::Settings;
use crate::services::clock::{format_clock, Clock, SystemClock};
use crate::services::quote::{QuoteProvider, RandomQuotes};
use crate::services::scheduler::{RedrawRequest, RefreshScheduler};
use crate::ui_egui::theme::Theme;
use chrono::{DateTime, Local};

impl YearProgressApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut quotes = RandomQuotes::new();
        Self::with_sources(settings, Box::new(SystemClock), &mut quotes)
    }

    /// Build the app with explicit clock and quote sources.
    pub fn with_sources(
        settings: Settings,
        clock: Box<dyn Clock>,
        quotes: &mut dyn QuoteProvider,
    ) -> Self {
        let theme = Self::initial_theme(&settings);
        let now = clock.now();
        let today = now.date_naive();
        let state = AppState::new(theme, today, quotes.next());
        let scheduler = RefreshScheduler::new(settings.progress_refresh, today);

        log::info!(
            "Month progress computed for {} (theme={}, refresh={:?})",
            today,
            theme.name(),
            settings.progress_refresh
        );

        Self {
            settings,
            state,
            scheduler,
            clock,
            clock_text: format_clock(now),
            applied_theme: None,
        }
    }

    fn initial_theme(settings: &Settings) -> Theme {
        let configured = Theme::from_name(&settings.theme);
        if settings.use_system_theme {
            Theme::from_system(configured)
        } else {
            configured
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    /// Swap in the snapshot with the other theme.
    pub fn toggle_theme(&mut self) {
        self.state = self.state.with_theme_toggled();
        log::info!("Theme switched to {}", self.state.theme().name());
    }

    /// Run one tick against the app's clock.
    pub fn tick(&mut self) -> RedrawRequest {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Run one tick as if the clock read `now`.
    pub fn tick_at(&mut self, now: DateTime<Local>) -> RedrawRequest {
        let today = now.date_naive();
        let request = self.scheduler.on_tick(today);

        if request.clock {
            self.clock_text = format_clock(now);
        }

        if request.month_bars {
            if today != self.state.today() {
                log::info!("Recomputing month progress for {}", today);
            }
            self.state = self.state.with_date(today);
        }

        request
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        let theme = self.state.theme();
        if self.applied_theme != Some(theme) {
            theme.palette().apply_to_context(ctx);
            self.applied_theme = Some(theme);
        }

        self.render_main_panel(ctx);

        ctx.request_repaint_after(self.settings.tick_interval());
    }
}
