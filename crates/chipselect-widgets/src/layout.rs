//! Layout helpers: field label and hint line.

use egui::{Response, Ui};

use crate::theme;

/// Draw the label above the field.
pub fn field_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(12.0).color(theme::TEXT));
}

/// Draw a hint line (small, muted text).
pub fn hint_label(ui: &mut Ui, text: &str) -> Response {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_MUTED),
    )
}
