//! Keyboard modifier state and input events delivered to a select.

use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// Where a toggle request came from.
///
/// Chip removals never extend a range, even with shift held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOrigin {
    /// A row in the suggestion panel.
    Suggestion,
    /// The trailing removal affordance of a chip.
    Chip,
}

impl ToggleOrigin {
    /// Modifiers that actually apply for a toggle from this origin.
    pub fn effective_modifiers(self, modifiers: Modifiers) -> Modifiers {
        match self {
            Self::Suggestion => modifiers,
            Self::Chip => Modifiers::NONE,
        }
    }
}
