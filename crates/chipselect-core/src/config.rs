//! Select configuration.

use serde::{Deserialize, Serialize};

/// Default message for a successful lookup that returned nothing.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results";
/// Default message shown in place of suggestions after a failed lookup.
pub const DEFAULT_ERRORED_MESSAGE: &str = "Errored, try again";

/// Which resolved lookups get applied when several are in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePolicy {
    /// Every response is applied as it resolves, so a slow response for an
    /// older query can overwrite a newer one.
    #[default]
    LastResponseWins,
    /// Responses older than one already applied are discarded.
    LatestRequestWins,
}

/// Configuration for a select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Shown when a successful lookup returns no options.
    pub no_results_message: String,
    /// Shown when the last lookup failed.
    pub errored_message: String,
    /// Shown under the input while the suggestion panel is open.
    pub hint: Option<String>,
    /// Render the suggestion panel in a top-level overlay instead of inline.
    pub render_to_portal: bool,
    /// Open the panel on focus even before the user has typed.
    pub auto_open_menu: bool,
    /// Grow the input horizontally instead of wrapping it to a new line.
    pub single_line: bool,
    /// Keep the input focused on every update.
    pub focused: bool,
    /// How racing lookups are resolved.
    pub race_policy: RacePolicy,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            errored_message: DEFAULT_ERRORED_MESSAGE.to_string(),
            hint: None,
            render_to_portal: false,
            auto_open_menu: false,
            single_line: false,
            focused: false,
            race_policy: RacePolicy::default(),
        }
    }
}

impl SelectConfig {
    /// Set the no-results message.
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Set the errored fallback message.
    pub fn with_errored_message(mut self, message: impl Into<String>) -> Self {
        self.errored_message = message.into();
        self
    }

    /// Set the hint shown while the panel is open.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_render_to_portal(mut self, render_to_portal: bool) -> Self {
        self.render_to_portal = render_to_portal;
        self
    }

    pub fn with_auto_open_menu(mut self, auto_open_menu: bool) -> Self {
        self.auto_open_menu = auto_open_menu;
        self
    }

    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_race_policy(mut self, race_policy: RacePolicy) -> Self {
        self.race_policy = race_policy;
        self
    }
}
