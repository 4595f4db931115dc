//! Toggle and range selection over a caller-owned selection.

use crate::input::Modifiers;
use crate::option::{SelectOption, position_of};

/// Result of a toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome<T> {
    /// The selection after the toggle. The caller's selection is not touched.
    pub selection: Vec<SelectOption<T>>,
    /// Whether the clicked option was added (`false` means it was removed).
    pub added: bool,
}

/// Applies toggles to a selection and remembers the range anchor.
///
/// The selection itself is owned by the caller; this only keeps the value of
/// the last option that was directly toggled.
#[derive(Debug, Clone)]
pub struct SelectionModel<T> {
    last_selected: Option<T>,
}

impl<T> Default for SelectionModel<T> {
    fn default() -> Self {
        Self {
            last_selected: None,
        }
    }
}

impl<T> SelectionModel<T> {
    /// Create a model with no anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the last directly toggled option.
    pub fn anchor(&self) -> Option<&T> {
        self.last_selected.as_ref()
    }

    /// Forget the anchor. Called when the suggestion panel closes.
    pub fn reset_anchor(&mut self) {
        self.last_selected = None;
    }
}

impl<T: Clone + PartialEq> SelectionModel<T> {
    /// Toggle `option` in `selection`.
    ///
    /// With shift held, an anchor set, and both the anchor and `option`
    /// present in `suggestions`, every suggestion between them (inclusive)
    /// follows the direction of the clicked option: added if it was added,
    /// removed if it was removed.
    pub fn toggle(
        &mut self,
        selection: &[SelectOption<T>],
        option: &SelectOption<T>,
        modifiers: Modifiers,
        suggestions: &[SelectOption<T>],
    ) -> ToggleOutcome<T> {
        let (mut next, added) = toggle_plain(selection, option);

        if modifiers.shift && !suggestions.is_empty() {
            if let Some(anchor) = &self.last_selected {
                if let Some((start, end)) = range_bounds(suggestions, anchor, &option.value) {
                    log::debug!(
                        "Range {} over suggestions {}..={}",
                        if added { "add" } else { "remove" },
                        start,
                        end
                    );
                    for suggestion in &suggestions[start..=end] {
                        match (added, position_of(&next, &suggestion.value)) {
                            (true, None) => next.push(suggestion.clone()),
                            (false, Some(idx)) => {
                                next.remove(idx);
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        self.last_selected = Some(option.value.clone());

        ToggleOutcome {
            selection: next,
            added,
        }
    }
}

/// Remove `option` if present by value, append it otherwise.
pub fn toggle_plain<T: Clone + PartialEq>(
    selection: &[SelectOption<T>],
    option: &SelectOption<T>,
) -> (Vec<SelectOption<T>>, bool) {
    let mut next = selection.to_vec();
    match position_of(&next, &option.value) {
        Some(idx) => {
            next.remove(idx);
            (next, false)
        }
        None => {
            next.push(option.clone());
            (next, true)
        }
    }
}

/// Inclusive index range between `anchor` and `target` in `suggestions`.
/// `None` unless both are present.
fn range_bounds<T: PartialEq>(
    suggestions: &[SelectOption<T>],
    anchor: &T,
    target: &T,
) -> Option<(usize, usize)> {
    let i = position_of(suggestions, target)?;
    let j = position_of(suggestions, anchor)?;
    Some((i.min(j), i.max(j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(labels: &[&str]) -> Vec<SelectOption<String>> {
        labels.iter().map(|l| SelectOption::simple(*l)).collect()
    }

    fn sorted_values(selection: &[SelectOption<String>]) -> Vec<String> {
        let mut values: Vec<String> = selection.iter().map(|o| o.value.clone()).collect();
        values.sort();
        values
    }

    #[test]
    fn test_plain_toggle_adds_then_removes() {
        let mut model = SelectionModel::new();
        let x = SelectOption::simple("X");
        let start = opts(&["A"]);

        let added = model.toggle(&start, &x, Modifiers::NONE, &[]);
        assert!(added.added);
        assert_eq!(sorted_values(&added.selection), vec!["A", "X"]);

        let removed = model.toggle(&added.selection, &x, Modifiers::NONE, &[]);
        assert!(!removed.added);
        assert_eq!(removed.selection, start);
    }

    #[test]
    fn test_toggle_is_by_value() {
        let selection = vec![SelectOption::new("Old label", 3)];
        let (next, added) = toggle_plain(&selection, &SelectOption::new("New label", 3));
        assert!(!added);
        assert!(next.is_empty());
    }

    #[test]
    fn test_range_inclusive() {
        let suggestions = opts(&["A", "B", "C", "D"]);
        let mut model = SelectionModel::new();

        let step = model.toggle(&[], &suggestions[1], Modifiers::NONE, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[3], Modifiers::SHIFT, &suggestions);

        assert!(step.added);
        assert_eq!(sorted_values(&step.selection), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_range_removal_undoes_range() {
        let suggestions = opts(&["A", "B", "C", "D"]);
        let mut model = SelectionModel::new();

        let step = model.toggle(&[], &suggestions[1], Modifiers::NONE, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[3], Modifiers::SHIFT, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[1], Modifiers::SHIFT, &suggestions);

        assert!(!step.added);
        assert!(step.selection.is_empty());
    }

    #[test]
    fn test_range_upwards() {
        let suggestions = opts(&["A", "B", "C", "D"]);
        let mut model = SelectionModel::new();

        let step = model.toggle(&[], &suggestions[3], Modifiers::NONE, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[0], Modifiers::SHIFT, &suggestions);

        assert_eq!(sorted_values(&step.selection), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_range_keeps_selection_outside_range() {
        let suggestions = opts(&["A", "B", "C", "D"]);
        let mut model = SelectionModel::new();
        let start = opts(&["Z", "A"]);

        let step = model.toggle(&start, &suggestions[1], Modifiers::NONE, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[2], Modifiers::SHIFT, &suggestions);

        assert_eq!(sorted_values(&step.selection), vec!["A", "B", "C", "Z"]);
    }

    #[test]
    fn test_shift_without_anchor_is_plain() {
        let suggestions = opts(&["A", "B", "C"]);
        let mut model = SelectionModel::new();

        let step = model.toggle(&[], &suggestions[2], Modifiers::SHIFT, &suggestions);
        assert_eq!(sorted_values(&step.selection), vec!["C"]);
        assert_eq!(model.anchor(), Some(&"C".to_string()));
    }

    #[test]
    fn test_anchor_outside_suggestions_is_plain() {
        let suggestions = opts(&["A", "B", "C"]);
        let mut model = SelectionModel::new();
        let chip_only = SelectOption::simple("Q");

        let step = model.toggle(&[], &chip_only, Modifiers::NONE, &suggestions);
        let step = model.toggle(&step.selection, &suggestions[2], Modifiers::SHIFT, &suggestions);

        assert_eq!(sorted_values(&step.selection), vec!["C", "Q"]);
    }

    #[test]
    fn test_reset_anchor() {
        let suggestions = opts(&["A", "B", "C"]);
        let mut model = SelectionModel::new();

        let step = model.toggle(&[], &suggestions[0], Modifiers::NONE, &suggestions);
        model.reset_anchor();
        let step = model.toggle(&step.selection, &suggestions[2], Modifiers::SHIFT, &suggestions);

        assert_eq!(sorted_values(&step.selection), vec!["A", "C"]);
    }
}
