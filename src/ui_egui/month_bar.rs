//! Month bar widget.
//!
//! A bar is a rounded outline with a red fill rising from the bottom edge in
//! proportion to how much of the month has elapsed, and the month label drawn
//! in the middle. Geometry is computed separately from drawing so the shape
//! can be checked without a GPU, and drawing goes through [`BarCanvas`] so any
//! surface that can stroke/fill rounded rectangles and lay out text will do.

use crate::models::month_progress::MonthProgress;
use crate::ui_egui::bold_text::paint_bold_centered;
use crate::ui_egui::theme::Theme;
use egui::{pos2, Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Vec2};

pub const BAR_CORNER_RADIUS: f32 = 10.0;
pub const BAR_STROKE_WIDTH: f32 = 2.0;
pub const BAR_LABEL_SIZE: f32 = 13.0;
pub const BAR_MIN_SIZE: Vec2 = Vec2::new(20.0, 100.0);

/// Drawing primitives a month bar needs.
#[cfg_attr(test, mockall::automock)]
pub trait BarCanvas {
    /// Outline `rect` without filling it
    fn stroke_rounded_rect(&mut self, rect: Rect, rounding: Rounding, stroke: Stroke);

    /// Fill `rect` with no outline
    fn fill_rounded_rect(&mut self, rect: Rect, rounding: Rounding, color: Color32);

    /// Draw `text` centered on `center`
    fn centered_text(&mut self, center: Pos2, text: &str, font: FontId, bold: bool, color: Color32);
}

impl BarCanvas for egui::Painter {
    fn stroke_rounded_rect(&mut self, rect: Rect, rounding: Rounding, stroke: Stroke) {
        self.rect_stroke(rect, rounding, stroke);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, rounding: Rounding, color: Color32) {
        self.rect_filled(rect, rounding, color);
    }

    fn centered_text(&mut self, center: Pos2, text: &str, font: FontId, bold: bool, color: Color32) {
        if bold {
            paint_bold_centered(self, center, text, font, color);
        } else {
            self.text(center, Align2::CENTER_CENTER, text, font, color);
        }
    }
}

/// Clamp a fill ratio into [0, 1]. NaN counts as empty.
pub fn clamp_ratio(fill_ratio: f64) -> f64 {
    if fill_ratio.is_nan() {
        0.0
    } else {
        fill_ratio.clamp(0.0, 1.0)
    }
}

/// Shapes making up one bar inside `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Outline rectangle, inset by half the stroke so the stroke stays in bounds
    pub outline: Rect,
    pub outline_rounding: Rounding,
    /// Filled part anchored to the bottom edge, if any
    pub fill: Option<BarFill>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFill {
    pub rect: Rect,
    /// Rounded top corners, square bottom corners
    pub rounding: Rounding,
}

impl BarGeometry {
    pub fn compute(bounds: Rect, fill_ratio: f64, is_filled: bool) -> Self {
        let outline = bounds.shrink(BAR_STROKE_WIDTH / 2.0);
        let outline_rounding = Rounding::same(BAR_CORNER_RADIUS);

        let ratio = clamp_ratio(fill_ratio);
        let fill = if is_filled && ratio > 0.0 {
            Self::fill_for(bounds, ratio)
        } else {
            None
        };

        Self {
            outline,
            outline_rounding,
            fill,
        }
    }

    fn fill_for(bounds: Rect, ratio: f64) -> Option<BarFill> {
        let height = bounds.height().max(0.0);
        let fill_height = (f64::from(height) * ratio).floor() as f32;
        if fill_height <= 0.0 {
            return None;
        }

        let rect = Rect::from_min_max(pos2(bounds.left(), bounds.bottom() - fill_height), bounds.max);

        let radius = BAR_CORNER_RADIUS
            .min(fill_height)
            .min(bounds.width().max(0.0) / 2.0);
        let rounding = Rounding {
            nw: radius,
            ne: radius,
            sw: 0.0,
            se: 0.0,
        };

        Some(BarFill { rect, rounding })
    }

    /// Height of the filled part, zero when empty
    pub fn fill_height(&self) -> f32 {
        self.fill.map(|fill| fill.rect.height()).unwrap_or(0.0)
    }
}

/// Draw one month bar into `bounds`.
pub fn render(
    canvas: &mut dyn BarCanvas,
    bounds: Rect,
    label: &str,
    fill_ratio: f64,
    is_filled: bool,
    theme: Theme,
) {
    let palette = theme.palette();
    let geometry = BarGeometry::compute(bounds, fill_ratio, is_filled);

    canvas.stroke_rounded_rect(
        geometry.outline,
        geometry.outline_rounding,
        Stroke::new(BAR_STROKE_WIDTH, palette.bar_border),
    );

    if let Some(fill) = geometry.fill {
        canvas.fill_rounded_rect(fill.rect, fill.rounding, palette.bar_fill);
    }

    canvas.centered_text(
        bounds.center(),
        label,
        FontId::proportional(BAR_LABEL_SIZE),
        true,
        palette.bar_border,
    );
}

/// The inputs a bar was last drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBar {
    label: String,
    fill_ratio: f64,
    is_filled: bool,
    theme: Theme,
}

impl MonthBar {
    pub fn new(label: impl Into<String>, fill_ratio: f64, is_filled: bool, theme: Theme) -> Self {
        Self {
            label: label.into(),
            fill_ratio,
            is_filled,
            theme,
        }
    }

    pub fn from_progress(progress: &MonthProgress, theme: Theme) -> Self {
        Self::new(progress.label, progress.fill_ratio, progress.is_filled, theme)
    }

    /// Same bar drawn with another theme
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    pub fn is_filled(&self) -> bool {
        self.is_filled
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn paint(&self, canvas: &mut dyn BarCanvas, bounds: Rect) {
        render(
            canvas,
            bounds,
            &self.label,
            self.fill_ratio,
            self.is_filled,
            self.theme,
        );
    }

    /// Allocate `size` in `ui` and draw the bar there.
    pub fn show(&self, ui: &mut egui::Ui, size: Vec2) -> egui::Response {
        let size = size.max(BAR_MIN_SIZE);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let mut painter = ui.painter_at(rect);
            self.paint(&mut painter, rect);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::{always, eq};
    use pretty_assertions::assert_eq;

    fn bounds() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(60.0, 300.0))
    }

    fn assert_within(inner: Rect, outer: Rect) {
        assert!(outer.contains_rect(inner), "{:?} escapes {:?}", inner, outer);
    }

    #[test]
    fn test_half_filled_geometry() {
        let geometry = BarGeometry::compute(bounds(), 0.5, true);
        let fill = geometry.fill.unwrap();

        assert_eq!(fill.rect, Rect::from_min_max(pos2(0.0, 150.0), pos2(60.0, 300.0)));
        assert_eq!(
            fill.rounding,
            Rounding {
                nw: BAR_CORNER_RADIUS,
                ne: BAR_CORNER_RADIUS,
                sw: 0.0,
                se: 0.0
            }
        );
    }

    #[test]
    fn test_fill_height_is_floored() {
        let geometry = BarGeometry::compute(bounds(), 1.0 / 31.0, true);
        assert_eq!(geometry.fill_height(), 9.0);
    }

    #[test]
    fn test_ratio_above_one_is_clamped() {
        let geometry = BarGeometry::compute(bounds(), 1.5, true);

        assert_eq!(geometry.fill_height(), bounds().height());
        assert_within(geometry.fill.unwrap().rect, bounds());
        assert_within(geometry.outline.expand(BAR_STROKE_WIDTH / 2.0), bounds());
    }

    #[test]
    fn test_negative_and_nan_ratios_draw_no_fill() {
        assert_eq!(BarGeometry::compute(bounds(), -0.25, true).fill, None);
        assert_eq!(BarGeometry::compute(bounds(), f64::NAN, true).fill, None);
    }

    #[test]
    fn test_unfilled_flag_suppresses_fill() {
        assert_eq!(BarGeometry::compute(bounds(), 0.8, false).fill, None);
    }

    #[test]
    fn test_tiny_ratio_rounding_fits_fill() {
        // 1/64 of 300 is 4.6875, floored to 4
        let geometry = BarGeometry::compute(bounds(), 1.0 / 64.0, true);
        let fill = geometry.fill.unwrap();
        assert_eq!(fill.rect.height(), 4.0);
        assert_eq!(fill.rounding.nw, 4.0);
        assert_eq!(fill.rounding.ne, 4.0);
    }

    #[test]
    fn test_fill_below_one_unit_is_dropped() {
        let geometry = BarGeometry::compute(bounds(), 0.001, true);
        assert_eq!(geometry.fill, None);
    }

    #[test]
    fn test_empty_bounds_do_not_panic() {
        let geometry = BarGeometry::compute(Rect::NOTHING, 0.5, true);
        assert_eq!(geometry.fill, None);
    }

    #[test]
    fn test_clamp_ratio() {
        assert_eq!(clamp_ratio(1.5), 1.0);
        assert_eq!(clamp_ratio(-1.0), 0.0);
        assert_eq!(clamp_ratio(f64::NAN), 0.0);
        assert_eq!(clamp_ratio(0.25), 0.25);
    }

    #[test]
    fn test_render_draws_outline_fill_and_label() {
        let palette = Theme::Dark.palette();
        let mut canvas = MockBarCanvas::new();

        canvas
            .expect_stroke_rounded_rect()
            .with(
                eq(bounds().shrink(1.0)),
                eq(Rounding::same(BAR_CORNER_RADIUS)),
                eq(Stroke::new(BAR_STROKE_WIDTH, palette.bar_border)),
            )
            .times(1)
            .return_const(());
        canvas
            .expect_fill_rounded_rect()
            .with(always(), always(), eq(palette.bar_fill))
            .times(1)
            .return_const(());
        canvas
            .expect_centered_text()
            .withf(|center, text, _font, bold, color| {
                *center == pos2(30.0, 150.0) && text.to_string() == "MAR" && *bold && *color == Color32::WHITE
            })
            .times(1)
            .return_const(());

        render(&mut canvas, bounds(), "MAR", 0.4, true, Theme::Dark);
    }

    #[test]
    fn test_render_future_month_skips_fill() {
        let mut canvas = MockBarCanvas::new();
        canvas.expect_stroke_rounded_rect().times(1).return_const(());
        canvas.expect_fill_rounded_rect().never();
        canvas.expect_centered_text().times(1).return_const(());

        render(&mut canvas, bounds(), "NOV", 0.0, false, Theme::Light);
    }

    #[test]
    fn test_light_theme_colors() {
        let palette = Theme::Light.palette();
        let mut canvas = MockBarCanvas::new();
        canvas
            .expect_stroke_rounded_rect()
            .withf(move |_, _, stroke| stroke.color == Color32::BLACK)
            .times(1)
            .return_const(());
        canvas
            .expect_fill_rounded_rect()
            .withf(move |_, _, color| *color == palette.bar_fill)
            .times(1)
            .return_const(());
        canvas
            .expect_centered_text()
            .withf(|_, _, _, _, color| *color == Color32::BLACK)
            .times(1)
            .return_const(());

        render(&mut canvas, bounds(), "JAN", 1.0, true, Theme::Light);
    }

    #[test]
    fn test_month_bar_from_progress() {
        let progress = MonthProgress::current(9, 19, 31);
        let bar = MonthBar::from_progress(&progress, Theme::Dark);

        assert_eq!(bar.label(), "OCT");
        assert_eq!(bar.fill_ratio(), 19.0 / 31.0);
        assert!(bar.is_filled());

        let light = bar.with_theme(Theme::Light);
        assert_eq!(light.theme(), Theme::Light);
        assert_eq!(light.label(), bar.label());
        assert_eq!(bar.theme(), Theme::Dark);
    }

    #[test]
    fn test_show_paints_label_in_bold() {
        let ctx = egui::Context::default();
        let output = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                MonthBar::new("FEB", 0.5, true, Theme::Dark).show(ui, Vec2::new(40.0, 200.0));
            });
        });

        let text_passes = output
            .shapes
            .iter()
            .filter(|clipped| matches!(clipped.shape, egui::epaint::Shape::Text(_)))
            .count();
        assert_eq!(text_passes, 2);
    }

    #[test]
    fn test_paint_is_repeatable() {
        let bar = MonthBar::new("JUN", 0.7, true, Theme::Dark);
        let mut canvas = MockBarCanvas::new();
        canvas.expect_stroke_rounded_rect().times(2).return_const(());
        canvas.expect_fill_rounded_rect().times(2).return_const(());
        canvas.expect_centered_text().times(2).return_const(());

        bar.paint(&mut canvas, bounds());
        bar.paint(&mut canvas, bounds());
        assert_eq!(bar, MonthBar::new("JUN", 0.7, true, Theme::Dark));
    }
}
