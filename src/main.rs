// Year Progress widget
// Main entry point

use anyhow::anyhow;
use year_progress::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use year_progress::services::settings::{load_settings_or_default, SettingsService};
use year_progress::ui_egui::{YearProgressApp, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Year Progress widget");

    let settings_service = SettingsService::new();
    if let Some(path) = settings_service.path() {
        log::debug!("Settings file: {}", path.display());
    }
    let settings = load_settings_or_default(&settings_service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(egui::vec2(settings.window_width, settings.window_height))
            .with_min_inner_size(egui::vec2(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(YearProgressApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("Failed to run the widget window: {}", err))
}
