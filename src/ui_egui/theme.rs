//! Theme module for the year progress widget
//!
//! A [`Theme`] is the dark/light choice the user toggles. [`WidgetTheme`]
//! resolves it into the concrete colors every element is drawn with.

use egui::Color32;

/// Dark or light appearance of the whole widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a settings value; anything other than "light" is dark.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Follow the desktop preference, keeping `fallback` when it is unknown.
    pub fn from_system(fallback: Theme) -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Theme::Dark,
            dark_light::Mode::Light => Theme::Light,
            dark_light::Mode::Default => fallback,
        }
    }

    pub fn palette(self) -> WidgetTheme {
        match self {
            Theme::Dark => WidgetTheme::dark(),
            Theme::Light => WidgetTheme::light(),
        }
    }
}

/// Colors used by the widget for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub background: Color32,

    /// Month bar outline color, also used for bar labels
    pub bar_border: Color32,

    /// Month bar fill color
    pub bar_fill: Color32,

    /// Title and clock text color
    pub text: Color32,

    /// Quote text color (translucent text color)
    pub quote_text: Color32,

    /// Toggle button background
    pub button_fill: Color32,

    /// Toggle button background while hovered
    pub button_hover: Color32,

    /// Toggle button border
    pub button_border: Color32,
}

impl WidgetTheme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            bar_border: Color32::WHITE,
            bar_fill: Color32::from_rgb(0xFF, 0x4B, 0x4B),
            text: Color32::WHITE,
            quote_text: Color32::from_rgba_unmultiplied(255, 255, 255, 180),
            button_fill: Color32::from_rgb(0x33, 0x33, 0x33),
            button_hover: Color32::from_rgb(0x44, 0x44, 0x44),
            button_border: Color32::from_rgb(0x66, 0x66, 0x66),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            background: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            bar_border: Color32::BLACK,
            bar_fill: Color32::from_rgb(0xD3, 0x2F, 0x2F),
            text: Color32::BLACK,
            quote_text: Color32::from_rgba_unmultiplied(0, 0, 0, 180),
            button_fill: Color32::from_rgb(0xDD, 0xDD, 0xDD),
            button_hover: Color32::from_rgb(0xCC, 0xCC, 0xCC),
            button_border: Color32::from_rgb(0xAA, 0xAA, 0xAA),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;

        visuals.widgets.inactive.weak_bg_fill = self.button_fill;
        visuals.widgets.inactive.bg_fill = self.button_fill;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, self.button_border);
        visuals.widgets.hovered.weak_bg_fill = self.button_hover;
        visuals.widgets.hovered.bg_fill = self.button_hover;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.button_border);
        visuals.widgets.active.weak_bg_fill = self.button_hover;
        visuals.widgets.active.bg_fill = self.button_hover;

        visuals.override_text_color = Some(self.text);

        ctx.set_visuals(visuals);
    }
}
