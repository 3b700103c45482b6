//! Window layout: header, quote, month bars and clock, top to bottom.

use super::{YearProgressApp, WINDOW_TITLE};
use crate::ui_egui::bold_text::bold_label;
use crate::ui_egui::month_bar::BAR_MIN_SIZE;
use egui::{Align, FontId, Layout, RichText, Vec2};

const CONTENT_MARGIN: f32 = 40.0;
const SECTION_SPACING: f32 = 25.0;
const BAR_SPACING: f32 = 12.0;
const TITLE_SIZE: f32 = 28.0;
const QUOTE_SIZE: f32 = 16.0;
const CLOCK_SIZE: f32 = 11.0;
const SUMMARY_SIZE: f32 = 10.0;
/// Height kept free below the bars for the clock and summary lines
const FOOTER_HEIGHT: f32 = 48.0;

/// Size of each of `count` bars sharing `available`, in whole units.
fn bar_size(available: Vec2, count: usize) -> Vec2 {
    let count = count.max(1) as f32;
    let width = ((available.x - BAR_SPACING * (count - 1.0)) / count)
        .floor()
        .max(BAR_MIN_SIZE.x);
    let height = (available.y - FOOTER_HEIGHT - SECTION_SPACING)
        .floor()
        .max(BAR_MIN_SIZE.y);
    Vec2::new(width, height)
}

impl YearProgressApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let palette = self.state.theme().palette();
        let frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(CONTENT_MARGIN)
            .fill(palette.background);

        let mut toggle_clicked = false;
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = SECTION_SPACING;
            toggle_clicked = self.render_header(ui);
            self.render_quote(ui);
            self.render_month_bars(ui);
            self.render_clock(ui);
        });

        if toggle_clicked {
            self.toggle_theme();
            ctx.request_repaint();
        }
    }

    /// Title on the left, theme toggle on the right. Returns true when the toggle was clicked.
    fn render_header(&self, ui: &mut egui::Ui) -> bool {
        let palette = self.state.theme().palette();
        ui.horizontal(|ui| {
            bold_label(ui, WINDOW_TITLE, FontId::proportional(TITLE_SIZE), palette.text);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.button("🌗 Toggle Theme")
                    .on_hover_text("Switch between dark and light")
                    .clicked()
            })
            .inner
        })
        .inner
    }

    fn render_quote(&self, ui: &mut egui::Ui) {
        let palette = self.state.theme().palette();
        ui.vertical_centered(|ui| {
            bold_label(
                ui,
                self.state.quote(),
                FontId::proportional(QUOTE_SIZE),
                palette.quote_text,
            );
        });
    }

    fn render_month_bars(&self, ui: &mut egui::Ui) {
        let bars = self.state.bars();
        let size = bar_size(ui.available_size(), bars.len());

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = BAR_SPACING;
            for bar in &bars {
                bar.show(ui, size);
            }
        });
    }

    fn render_clock(&self, ui: &mut egui::Ui) {
        let palette = self.state.theme().palette();
        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            ui.label(
                RichText::new(self.clock_text())
                    .size(CLOCK_SIZE)
                    .color(palette.text),
            );
            ui.label(
                RichText::new(self.state.summary())
                    .size(SUMMARY_SIZE)
                    .color(palette.quote_text),
            );
        });
    }
}
