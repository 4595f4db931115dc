//! Input text layout: width growth, line wrapping, and the filled-field placeholder.

use serde::{Deserialize, Serialize};

/// Non-breaking space shown in place of an empty input while options are
/// selected, so the field styles itself as filled.
pub const PLACEHOLDER: char = '\u{a0}';
/// [`PLACEHOLDER`] as a string.
pub const PLACEHOLDER_STR: &str = "\u{a0}";
/// Added to the measured width in single-line mode before rounding up.
pub const GROW_PADDING: f64 = 0.5;

/// Font description handed to a [`TextMeasurer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureStyle {
    pub font_size: f64,
    pub monospace: bool,
}

impl Default for MeasureStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            monospace: false,
        }
    }
}

/// Measures the rendered width of a run of text without wrapping it.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str, style: &MeasureStyle) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &MeasureStyle) -> f64,
{
    fn measure_width(&self, text: &str, style: &MeasureStyle) -> f64 {
        self(text, style)
    }
}

/// Displayed input text and whether it is pushed to its own line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineState {
    pub input_value: String,
    pub line_break: bool,
}

/// What a layout pass decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutChange {
    /// Single-line mode: the input should be this wide.
    Grow(f64),
    /// Multi-line mode: the text no longer fits and wraps to a new line.
    Break { at_width: f64 },
    /// Multi-line mode: the text fits the width it broke at again.
    Unbreak,
    /// Nothing changed.
    None,
}

/// Strip the placeholder from text read back out of the input.
///
/// Typing into a filled field lands on either side of the placeholder
/// depending on the caret, so it is removed from both ends.
pub fn strip_placeholder(raw: &str) -> &str {
    raw.trim_matches(PLACEHOLDER)
}

/// The text the input should show for `literal` given whether anything is selected.
pub fn display_value(literal: &str, has_selection: bool) -> String {
    if literal.is_empty() && has_selection {
        PLACEHOLDER_STR.to_string()
    } else {
        literal.to_string()
    }
}

/// Derived layout state of the input.
///
/// Never owns the query text itself, only the displayed value, the wrap
/// flag, the width the text broke at, and the grown width.
#[derive(Debug, Clone, Default)]
pub struct LineLayoutController {
    state: LineState,
    break_width: Option<f64>,
    input_width: Option<f64>,
    style: MeasureStyle,
}

impl LineLayoutController {
    pub fn new(style: MeasureStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &LineState {
        &self.state
    }

    pub fn input_value(&self) -> &str {
        &self.state.input_value
    }

    pub fn line_break(&self) -> bool {
        self.state.line_break
    }

    /// Width the text broke at, while broken.
    pub fn break_width(&self) -> Option<f64> {
        self.break_width
    }

    /// Width the input should take in single-line mode, once measured.
    pub fn input_width(&self) -> Option<f64> {
        self.input_width
    }

    pub fn style(&self) -> &MeasureStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MeasureStyle) {
        self.style = style;
    }

    /// Accept text typed into the input. Returns the literal query text.
    pub fn set_input<'a>(&mut self, raw: &'a str, has_selection: bool) -> &'a str {
        let literal = strip_placeholder(raw);
        self.state.input_value = display_value(literal, has_selection);
        literal
    }

    /// Empty the input, e.g. after an option was added.
    pub fn clear_input(&mut self, has_selection: bool) {
        self.state.input_value = display_value("", has_selection);
    }

    /// Drop the wrap flag. The remembered break width is kept.
    pub fn clear_line_break(&mut self) {
        self.state.line_break = false;
    }

    /// Re-assert or drop the placeholder after the selection changed.
    /// Returns whether the displayed value changed.
    pub fn reconcile_placeholder(&mut self, has_selection: bool) -> bool {
        let current = self.state.input_value.as_str();
        let blank = current.is_empty() || current == PLACEHOLDER_STR;
        let wanted = display_value("", has_selection);
        if blank && current != wanted {
            self.state.input_value = wanted;
            true
        } else {
            false
        }
    }

    /// Measure `text` and update the grow width or wrap state.
    ///
    /// `container_width` is the width currently available to the input.
    pub fn measure(
        &mut self,
        text: &str,
        container_width: f64,
        single_line: bool,
        measurer: &dyn TextMeasurer,
    ) -> LayoutChange {
        let measured = measurer.measure_width(text, &self.style);

        if single_line {
            let width = (measured + GROW_PADDING).ceil();
            self.input_width = Some(width);
            return LayoutChange::Grow(width);
        }

        if measured > container_width {
            self.break_width = Some(container_width);
            self.state.line_break = true;
            log::debug!(
                "Input text {:.1}px overflows {:.1}px, wrapping",
                measured,
                container_width
            );
            return LayoutChange::Break {
                at_width: container_width,
            };
        }

        if let Some(break_width) = self.break_width {
            if measured <= break_width {
                self.break_width = None;
                self.state.line_break = false;
                return LayoutChange::Unbreak;
            }
        }

        LayoutChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10px wide.
    fn fixed(text: &str, _style: &MeasureStyle) -> f64 {
        text.chars().count() as f64 * 10.0
    }

    #[test]
    fn test_single_line_grows_with_padding() {
        let mut layout = LineLayoutController::default();
        assert_eq!(layout.measure("abc", 100.0, true, &fixed), LayoutChange::Grow(31.0));
        assert_eq!(layout.input_width(), Some(31.0));
        assert!(!layout.line_break());
    }

    #[test]
    fn test_single_line_never_breaks() {
        let mut layout = LineLayoutController::default();
        layout.measure("a very long piece of text", 50.0, true, &fixed);
        assert!(!layout.line_break());
    }

    #[test]
    fn test_line_break_hysteresis() {
        let mut layout = LineLayoutController::default();

        assert_eq!(layout.measure("12345678", 100.0, false, &fixed), LayoutChange::None);
        assert!(!layout.line_break());

        // 120px of text in a 100px slot wraps.
        let change = layout.measure("123456789012", 100.0, false, &fixed);
        assert_eq!(change, LayoutChange::Break { at_width: 100.0 });
        assert!(layout.line_break());
        assert_eq!(layout.break_width(), Some(100.0));

        // On its own line the input is wider, but 110px is still past the break width.
        assert_eq!(layout.measure("12345678901", 300.0, false, &fixed), LayoutChange::None);
        assert!(layout.line_break());

        // Back to 100px: fits where it broke.
        assert_eq!(layout.measure("1234567890", 300.0, false, &fixed), LayoutChange::Unbreak);
        assert!(!layout.line_break());
        assert_eq!(layout.break_width(), None);
    }

    #[test]
    fn test_measure_uses_style() {
        let mut layout = LineLayoutController::new(MeasureStyle {
            font_size: 20.0,
            monospace: true,
        });
        let by_size = |text: &str, style: &MeasureStyle| text.len() as f64 * style.font_size;
        assert_eq!(layout.measure("ab", 100.0, true, &by_size), LayoutChange::Grow(41.0));
    }

    #[test]
    fn test_placeholder_when_selected_and_empty() {
        let mut layout = LineLayoutController::default();
        layout.clear_input(true);
        assert_eq!(layout.input_value(), PLACEHOLDER_STR);

        // Clearing the selection leaves a truly empty field.
        assert!(layout.reconcile_placeholder(false));
        assert_eq!(layout.input_value(), "");
    }

    #[test]
    fn test_placeholder_reasserts() {
        let mut layout = LineLayoutController::default();
        // Backspacing the placeholder away while something is selected.
        let query = layout.set_input("", true);
        assert_eq!(query, "");
        assert_eq!(layout.input_value(), PLACEHOLDER_STR);

        layout.state.input_value.clear();
        assert!(layout.reconcile_placeholder(true));
        assert_eq!(layout.input_value(), PLACEHOLDER_STR);
    }

    #[test]
    fn test_typed_text_strips_placeholder() {
        let mut layout = LineLayoutController::default();
        let query = layout.set_input("\u{a0}bio", true);
        assert_eq!(query, "bio");
        assert_eq!(layout.input_value(), "bio");
        assert!(!layout.reconcile_placeholder(true));
    }

    #[test]
    fn test_text_typed_before_placeholder_is_stripped() {
        let mut layout = LineLayoutController::default();
        let query = layout.set_input("a\u{a0}", true);
        assert_eq!(query, "a");
        assert_eq!(layout.input_value(), "a");

        let query = layout.set_input("\u{a0}", true);
        assert_eq!(query, "");
        assert_eq!(layout.input_value(), PLACEHOLDER_STR);
    }
}
