mod app;
pub mod bold_text;
pub mod month_bar;
pub mod theme;

pub use app::{AppState, YearProgressApp, WINDOW_TITLE};
