//! Selectable options.

use serde::{Deserialize, Serialize};

/// A label/value pair the user can pick.
///
/// Two options are equal when their values are equal; the label is only
/// used for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption<T> {
    /// Text shown on chips and suggestion rows.
    pub label: String,
    /// Identity of the option.
    pub value: T,
}

impl<T> SelectOption<T> {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl SelectOption<String> {
    /// Create an option whose value is its label.
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

impl<T: PartialEq> PartialEq for SelectOption<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for SelectOption<T> {}

/// Index of the option carrying `value`, if any.
pub fn position_of<T: PartialEq>(options: &[SelectOption<T>], value: &T) -> Option<usize> {
    options.iter().position(|o| o.value == *value)
}

/// Whether any option carries `value`.
pub fn contains_value<T: PartialEq>(options: &[SelectOption<T>], value: &T) -> bool {
    position_of(options, value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_label() {
        let a = SelectOption::new("Math", 1);
        let b = SelectOption::new("Mathematics", 1);
        let c = SelectOption::new("Math", 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_position_of() {
        let options = vec![
            SelectOption::simple("A"),
            SelectOption::simple("B"),
        ];
        assert_eq!(position_of(&options, &"B".to_string()), Some(1));
        assert!(!contains_value(&options, &"C".to_string()));
    }

    #[test]
    fn test_serde_shape() {
        let option = SelectOption::new("Physics", 7u32);
        let json = serde_json::to_string(&option).unwrap();
        assert_eq!(json, r#"{"label":"Physics","value":7}"#);
        let back: SelectOption<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, "Physics");
    }
}
