//! Anchoring of the suggestion panel to the input.

use kurbo::{Point, Rect, Size};

/// Vertical gap between the input and the panel, in logical pixels.
pub const PANEL_GAP: f64 = 4.0;

/// Where the panel is drawn relative to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPlacement {
    /// Below the input, in the same layout flow.
    #[default]
    Inline,
    /// In a top-level overlay layer.
    Portal,
}

impl PanelPlacement {
    pub fn from_render_to_portal(render_to_portal: bool) -> Self {
        if render_to_portal {
            Self::Portal
        } else {
            Self::Inline
        }
    }
}

/// Tracks the input rectangle the panel hangs from.
///
/// The panel opens at the bottom-start corner of the input. The input can
/// grow as chips are added or the text wraps, so the anchor is re-validated
/// on every update, not only when the panel opens.
#[derive(Debug, Clone, Default)]
pub struct PanelAnchor {
    input: Option<Rect>,
    revision: u64,
}

impl PanelAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current input rectangle. Returns `true` if it moved or
    /// changed size.
    pub fn revalidate(&mut self, input: Rect) -> bool {
        if self.input == Some(input) {
            return false;
        }
        self.input = Some(input);
        self.revision += 1;
        true
    }

    /// The last recorded input rectangle.
    pub fn input(&self) -> Option<Rect> {
        self.input
    }

    /// Number of times the anchor changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Top-left corner of the panel.
    pub fn origin(&self) -> Option<Point> {
        self.input.map(|r| Point::new(r.x0, r.y1 + PANEL_GAP))
    }

    /// Panel rectangle for a panel of `size`, as wide as the input at least.
    pub fn panel_rect(&self, size: Size) -> Option<Rect> {
        let input = self.input?;
        let origin = Point::new(input.x0, input.y1 + PANEL_GAP);
        let width = size.width.max(input.width());
        Some(Rect::from_origin_size(origin, Size::new(width, size.height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_bottom_start() {
        let mut anchor = PanelAnchor::new();
        assert!(anchor.origin().is_none());
        anchor.revalidate(Rect::new(10.0, 20.0, 210.0, 50.0));
        assert_eq!(anchor.origin(), Some(Point::new(10.0, 50.0 + PANEL_GAP)));
    }

    #[test]
    fn test_revalidate_tracks_changes() {
        let mut anchor = PanelAnchor::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 30.0);
        assert!(anchor.revalidate(rect));
        assert!(!anchor.revalidate(rect));
        // Input grew a line after wrapping.
        assert!(anchor.revalidate(Rect::new(0.0, 0.0, 100.0, 60.0)));
        assert_eq!(anchor.revision(), 2);
        assert_eq!(anchor.origin(), Some(Point::new(0.0, 60.0 + PANEL_GAP)));
    }

    #[test]
    fn test_panel_rect_matches_input_width() {
        let mut anchor = PanelAnchor::new();
        anchor.revalidate(Rect::new(0.0, 0.0, 300.0, 30.0));
        let rect = anchor.panel_rect(Size::new(120.0, 200.0)).unwrap();
        assert!((rect.width() - 300.0).abs() < f64::EPSILON);
        assert!((rect.height() - 200.0).abs() < f64::EPSILON);
    }
}
