//! Keeps plain values and their selected options in sync.

use crate::option::{SelectOption, position_of};
use crate::select::SelectEvent;

/// Pairs a list of values with the options representing them.
///
/// Forms usually store only the values (ids), while the select needs full
/// options to render chips. Either side can be updated and the other
/// follows.
#[derive(Debug, Clone)]
pub struct SelectControls<T> {
    values: Vec<T>,
    selected: Vec<SelectOption<T>>,
}

impl<T> Default for SelectControls<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> SelectControls<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already selected options.
    pub fn from_selected(selected: Vec<SelectOption<T>>) -> Self {
        let mut controls = Self::new();
        controls.set_selected(selected);
        controls
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The selected options, suitable as the select's controlled value.
    pub fn selected(&self) -> &[SelectOption<T>] {
        &self.selected
    }

    /// Replace the selected options. Returns whether the values changed.
    pub fn set_selected(&mut self, selected: Vec<SelectOption<T>>) -> bool {
        let values: Vec<T> = selected.iter().map(|o| o.value.clone()).collect();
        let changed = values != self.values;
        self.values = values;
        self.selected = selected;
        changed
    }

    /// Replace the values. Options already known keep their labels; new
    /// values get their label from `label_for`. Returns whether anything
    /// changed.
    pub fn set_values<F>(&mut self, values: Vec<T>, mut label_for: F) -> bool
    where
        F: FnMut(&T) -> String,
    {
        if values == self.values {
            return false;
        }
        let selected = values
            .iter()
            .map(|value| match position_of(&self.selected, value) {
                Some(idx) => self.selected[idx].clone(),
                None => SelectOption::new(label_for(value), value.clone()),
            })
            .collect();
        self.values = values;
        self.selected = selected;
        true
    }

    /// Apply a `Changed` event from a select. Other events are ignored.
    pub fn apply(&mut self, event: &SelectEvent<T>) -> bool {
        match event {
            SelectEvent::Changed(selected) => self.set_selected(selected.clone()),
            SelectEvent::Focused | SelectEvent::Blurred => false,
        }
    }
}
