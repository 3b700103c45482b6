mod layout;
mod lifecycle;
mod state;

pub use self::state::AppState;

use crate::models::settings::Settings;
use crate::services::clock::Clock;
use crate::services::scheduler::RefreshScheduler;
use crate::ui_egui::theme::Theme;

pub const WINDOW_TITLE: &str = "Better Late Than Never";

pub struct YearProgressApp {
    /// Settings read at startup
    settings: Settings,
    /// Snapshot drawn by the current frame
    state: AppState,
    scheduler: RefreshScheduler,
    clock: Box<dyn Clock>,
    /// Clock line as of the last tick
    clock_text: String,
    /// Theme whose visuals were last pushed to the egui context
    applied_theme: Option<Theme>,
}

impl eframe::App for YearProgressApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
