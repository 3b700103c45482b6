//! Bold text for the default egui fonts.
//!
//! The bundled fonts have no bold face, so bold text is the same galley
//! painted twice with a small horizontal offset.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Vec2};

/// Horizontal offset of the second pass
pub const BOLD_OFFSET: f32 = 0.6;

/// Paint `text` in bold centered on `center`.
pub fn paint_bold_centered(painter: &Painter, center: Pos2, text: &str, font: FontId, color: Color32) {
    painter.text(
        center + Vec2::new(BOLD_OFFSET, 0.0),
        Align2::CENTER_CENTER,
        text,
        font.clone(),
        color,
    );
    painter.text(center, Align2::CENTER_CENTER, text, font, color);
}

/// Lay out `text` wrapped to the available width and add it to `ui` in bold.
pub fn bold_label(ui: &mut egui::Ui, text: &str, font: FontId, color: Color32) -> Response {
    let galley = ui
        .painter()
        .layout(text.to_owned(), font, color, ui.available_width());
    let size = galley.size() + Vec2::new(BOLD_OFFSET, 0.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let text_rect = Rect::from_min_size(rect.min, galley.size());
        painter.galley(text_rect.min + Vec2::new(BOLD_OFFSET, 0.0), galley.clone(), color);
        painter.galley(text_rect.min, galley, color);
    }

    response
}
