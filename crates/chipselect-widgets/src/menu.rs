//! Panel components: suggestion rows, fallback messages, frames.

use egui::{
    vec2, Color32, CornerRadius, CursorIcon, Frame, Margin, Pos2, Rect, Sense, Shape, Stroke,
    StrokeKind, Ui,
};

use crate::{sizing, theme};

/// Show one suggestion row with a checkbox. Returns true if clicked.
pub fn suggestion_row(ui: &mut Ui, label: &str, checked: bool) -> bool {
    let size = vec2(ui.available_width(), sizing::ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

        let box_rect = Rect::from_center_size(
            Pos2::new(rect.left() + 8.0 + sizing::CHECKBOX / 2.0, rect.center().y),
            vec2(sizing::CHECKBOX, sizing::CHECKBOX),
        );
        paint_checkbox(ui, box_rect, checked);

        ui.painter().text(
            Pos2::new(box_rect.right() + 8.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(13.0),
            theme::TEXT,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

fn paint_checkbox(ui: &Ui, rect: Rect, checked: bool) {
    let radius = CornerRadius::same(3);
    if checked {
        ui.painter().rect_filled(rect, radius, theme::ACCENT);
        let tick = vec![
            Pos2::new(rect.left() + rect.width() * 0.22, rect.center().y),
            Pos2::new(rect.left() + rect.width() * 0.42, rect.bottom() - rect.height() * 0.28),
            Pos2::new(rect.right() - rect.width() * 0.2, rect.top() + rect.height() * 0.28),
        ];
        ui.painter()
            .add(Shape::line(tick, Stroke::new(1.6, Color32::WHITE)));
    } else {
        ui.painter().rect_filled(rect, radius, Color32::WHITE);
        ui.painter().rect_stroke(
            rect,
            radius,
            Stroke::new(1.0, Color32::from_gray(170)),
            StrokeKind::Inside,
        );
    }
}

/// Show a message in place of the suggestion rows.
pub fn panel_message(ui: &mut Ui, text: &str, errored: bool) {
    let color = if errored { theme::ERROR } else { theme::TEXT_MUTED };
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(text).size(12.0).color(color));
    });
    ui.add_space(4.0);
}

/// Create the suggestion panel frame with shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(4))
}

/// Create the frame around the chips and text input.
pub fn input_frame(focused: bool) -> Frame {
    let border = if focused { theme::ACCENT } else { theme::BORDER };
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .stroke(Stroke::new(1.0, border))
        .inner_margin(Margin::symmetric(6, 4))
}
