//! egui components for the chip multi-select.
//!
//! - **Select**: the full widget, driving a [`chipselect_core::Select`]
//! - **Chip**: a removable pill for one selected option
//! - **Menu**: suggestion rows, fallback messages, panel frames
//! - **Layout**: field labels and the hint line
//! - **Measure**: egui-backed text measurement and repaint waking

pub mod chip;
pub mod layout;
pub mod measure;
pub mod menu;
pub mod select;

pub use chip::{ChipResponse, chip};
pub use layout::{field_label, hint_label};
pub use measure::{EguiMeasurer, RepaintWaker, repaint_waker};
pub use menu::{input_frame, panel_frame, panel_message, suggestion_row};
pub use select::{SelectResponse, SelectWidget};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Chip height
    pub const CHIP_HEIGHT: f32 = 22.0;
    /// Suggestion row height
    pub const ROW_HEIGHT: f32 = 28.0;
    /// Checkbox size inside a suggestion row
    pub const CHECKBOX: f32 = 14.0;
    /// Narrowest the text input gets before wrapping to its own line
    pub const MIN_INPUT_WIDTH: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Chip background
    pub const CHIP_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Error text
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
