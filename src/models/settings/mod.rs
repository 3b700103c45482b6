//! Widget settings
//!
//! Read once at startup from an optional `settings.toml`. Every field has a
//! default so a missing or partial file still yields a complete value.

use serde::Deserialize;

/// Smallest window that still fits twelve minimum-width bars and the margins.
pub const MIN_WINDOW_WIDTH: f32 = 460.0;
/// Smallest window that still fits header, quote, minimum-height bars and clock.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// When the month bars are recomputed after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressRefresh {
    /// Recompute on every clock tick
    EveryTick,
    /// Recompute when the local calendar day advances
    #[default]
    OnDateChange,
    /// Compute once when the window opens and never again
    OnceAtLaunch,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "dark" or "light"
    pub theme: String,
    /// Follow the desktop's dark/light preference instead of `theme`
    pub use_system_theme: bool,
    pub progress_refresh: ProgressRefresh,
    /// Seconds between clock ticks
    pub tick_interval_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_system_theme: false,
            progress_refresh: ProgressRefresh::default(),
            tick_interval_secs: 1,
            window_width: 850.0,
            window_height: 580.0,
        }
    }
}

impl Settings {
    /// Validate the settings values
    pub fn validate(&self) -> Result<(), String> {
        match self.theme.trim().to_lowercase().as_str() {
            "dark" | "light" => {}
            other => return Err(format!("Unknown theme '{}', expected 'dark' or 'light'", other)),
        }

        if self.tick_interval_secs == 0 {
            return Err("Tick interval must be at least one second".to_string());
        }

        if self.window_width.is_nan() || self.window_width < MIN_WINDOW_WIDTH {
            return Err(format!(
                "Window width {} is below the minimum of {}",
                self.window_width, MIN_WINDOW_WIDTH
            ));
        }

        if self.window_height.is_nan() || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window height {} is below the minimum of {}",
                self.window_height, MIN_WINDOW_HEIGHT
            ));
        }

        Ok(())
    }

    /// Tick interval as a `Duration`
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.tick_interval_secs.max(1))
    }
}
