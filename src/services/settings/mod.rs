// Settings service module

mod service;

pub use service::{load_settings_or_default, SettingsError, SettingsService};
