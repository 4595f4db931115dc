//! Removable chip for one selected option.

use egui::{
    vec2, Align2, CornerRadius, CursorIcon, Id, Pos2, Rect, Response, Sense, Stroke, Ui,
};

use crate::{sizing, theme};

/// Response from drawing a chip.
pub struct ChipResponse {
    /// Whether the close mark was clicked
    pub removed: bool,
    /// The response for the whole chip
    pub response: Response,
}

const CLOSE_ZONE: f32 = 18.0;

/// Show a chip with `label` and a close mark. `id` must be unique per chip.
pub fn chip(ui: &mut Ui, id: Id, label: &str) -> ChipResponse {
    let font_id = egui::FontId::proportional(12.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font_id.clone(), egui::Color32::PLACEHOLDER);
    let size = vec2(galley.size().x + 10.0 + CLOSE_ZONE, sizing::CHIP_HEIGHT);

    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let close_rect = Rect::from_min_max(
        Pos2::new(rect.right() - CLOSE_ZONE, rect.top()),
        rect.max,
    );
    let close = ui.interact(close_rect, id.with("close"), Sense::click());

    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same((sizing::CHIP_HEIGHT / 2.0) as u8);
        ui.painter().rect_filled(rect, radius, theme::CHIP_BG);

        ui.painter().text(
            Pos2::new(rect.left() + 10.0, rect.center().y),
            Align2::LEFT_CENTER,
            label,
            font_id,
            theme::TEXT,
        );

        let mark_color = if close.hovered() {
            theme::ACCENT
        } else {
            theme::TEXT_MUTED
        };
        let mark = Rect::from_center_size(close_rect.center(), vec2(7.0, 7.0));
        let stroke = Stroke::new(1.4, mark_color);
        ui.painter()
            .line_segment([mark.left_top(), mark.right_bottom()], stroke);
        ui.painter()
            .line_segment([mark.right_top(), mark.left_bottom()], stroke);
    }

    let removed = close.clicked();
    close.on_hover_cursor(CursorIcon::PointingHand);
    ChipResponse { removed, response }
}
