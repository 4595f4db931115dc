//! Text measurement and repaint waking backed by egui.

use std::sync::Arc;
use std::task::{Wake, Waker};

use chipselect_core::{MeasureStyle, TextMeasurer};
use egui::{Color32, FontId, Painter};

/// Measures text with the fonts of a painter.
#[derive(Clone)]
pub struct EguiMeasurer {
    painter: Painter,
}

impl EguiMeasurer {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasurer for EguiMeasurer {
    fn measure_width(&self, text: &str, style: &MeasureStyle) -> f64 {
        let size = style.font_size as f32;
        let font_id = if style.monospace {
            FontId::monospace(size)
        } else {
            FontId::proportional(size)
        };
        // Color doesn't matter for sizing
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), font_id, Color32::PLACEHOLDER);
        galley.size().x as f64
    }
}

/// Requests a repaint when a suggestion lookup makes progress, so the
/// next frame polls it again.
pub struct RepaintWaker {
    ctx: egui::Context,
}

impl Wake for RepaintWaker {
    fn wake(self: Arc<Self>) {
        self.ctx.request_repaint();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.ctx.request_repaint();
    }
}

/// A waker that repaints `ctx`.
pub fn repaint_waker(ctx: &egui::Context) -> Waker {
    Waker::from(Arc::new(RepaintWaker { ctx: ctx.clone() }))
}
