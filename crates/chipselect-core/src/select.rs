//! The searchable multi-select facade.

use crate::config::SelectConfig;
use crate::fetch::{SuggestionFetcher, SuggestionSource};
use crate::input::{Modifiers, ToggleOrigin};
use crate::layout::{LayoutChange, LineLayoutController, MeasureStyle, TextMeasurer};
use crate::menu::{
    MenuEffect, MenuEvent, MenuTimingController, OpenGating, PanelAnchor, PanelPlacement,
    PanelState, Scheduler,
};
use crate::option::{SelectOption, contains_value};
use crate::selection::{SelectionModel, ToggleOutcome};
use kurbo::Rect;
use std::task::Context;

/// Notifications for the owner of a select.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent<T> {
    /// The selection changed; the owner should store this as its new value.
    Changed(Vec<SelectOption<T>>),
    /// The input gained focus.
    Focused,
    /// The input lost focus.
    Blurred,
}

/// One row of the suggestion panel.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRow<'a, T> {
    pub index: usize,
    pub option: &'a SelectOption<T>,
    /// Whether the option is in the current selection.
    pub checked: bool,
}

/// What the suggestion panel shows.
#[derive(Debug, Clone)]
pub enum PanelContent<'a, T> {
    Suggestions(Vec<SuggestionRow<'a, T>>),
    /// The last lookup failed.
    Errored(&'a str),
    /// The last lookup succeeded with no options.
    NoResults(&'a str),
}

/// A searchable multi-select.
///
/// The selection is owned by the caller and passed into every call that
/// needs it; changes come back out as [`SelectEvent::Changed`] and the
/// caller decides whether to store them. Everything else (suggestions,
/// panel state, input text, range anchor) lives here and dies with it.
pub struct Select<T> {
    config: SelectConfig,
    fetcher: SuggestionFetcher<T>,
    selection: SelectionModel<T>,
    menu: MenuTimingController,
    layout: LineLayoutController,
    force_update_seen: bool,
    events: Vec<SelectEvent<T>>,
    disposed: bool,
}

impl<T: Clone + PartialEq + 'static> Select<T> {
    /// Create a select and issue the initial empty-query lookup.
    pub fn new(config: SelectConfig, source: impl SuggestionSource<T> + 'static) -> Self {
        Self::build(config, Box::new(source), MenuTimingController::with_frame_scheduler())
    }

    /// Create a select whose deferred closes run on `scheduler`.
    pub fn with_scheduler(
        config: SelectConfig,
        source: impl SuggestionSource<T> + 'static,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        Self::build(config, Box::new(source), MenuTimingController::new(scheduler))
    }

    fn build(
        config: SelectConfig,
        source: Box<dyn SuggestionSource<T>>,
        menu: MenuTimingController,
    ) -> Self {
        let mut fetcher = SuggestionFetcher::new(source, config.race_policy);
        fetcher.fetch("");
        Self {
            config,
            fetcher,
            selection: SelectionModel::new(),
            menu,
            layout: LineLayoutController::default(),
            force_update_seen: false,
            events: Vec::new(),
            disposed: false,
        }
    }

    /// The input gained focus.
    pub fn focus_gained(&mut self) {
        if self.disposed {
            return;
        }
        self.events.push(SelectEvent::Focused);
        self.drive_menu(MenuEvent::FocusGained);
    }

    /// The input lost focus. The panel closes at the next update unless
    /// something reopens it first.
    pub fn focus_lost(&mut self) {
        if self.disposed {
            return;
        }
        self.events.push(SelectEvent::Blurred);
        self.drive_menu(MenuEvent::FocusLost);
    }

    /// Text in the input changed to `raw`.
    ///
    /// Lays the text out, issues a lookup for it, and opens the panel.
    pub fn input_changed(
        &mut self,
        raw: &str,
        value: &[SelectOption<T>],
        container_width: f64,
        measurer: &dyn TextMeasurer,
    ) {
        if self.disposed {
            return;
        }
        let query = self.layout.set_input(raw, !value.is_empty()).to_string();
        match self
            .layout
            .measure(&query, container_width, self.config.single_line, measurer)
        {
            LayoutChange::None => {}
            change => log::debug!("Input layout: {:?}", change),
        }
        self.fetcher.fetch(&query);
        self.drive_menu(MenuEvent::TextChanged);
    }

    /// Toggle a suggestion row, extending a range when shift is held.
    pub fn toggle(
        &mut self,
        option: &SelectOption<T>,
        modifiers: Modifiers,
        value: &[SelectOption<T>],
    ) -> Option<&[SelectOption<T>]> {
        self.toggle_from(ToggleOrigin::Suggestion, option, modifiers, value)
    }

    /// Remove a chip. Always a plain toggle.
    pub fn remove_chip(
        &mut self,
        option: &SelectOption<T>,
        value: &[SelectOption<T>],
    ) -> Option<&[SelectOption<T>]> {
        self.toggle_from(ToggleOrigin::Chip, option, Modifiers::NONE, value)
    }

    fn toggle_from(
        &mut self,
        origin: ToggleOrigin,
        option: &SelectOption<T>,
        modifiers: Modifiers,
        value: &[SelectOption<T>],
    ) -> Option<&[SelectOption<T>]> {
        if self.disposed {
            return None;
        }
        let ToggleOutcome { selection, added } = self.selection.toggle(
            value,
            option,
            origin.effective_modifiers(modifiers),
            self.fetcher.suggestions(),
        );
        log::debug!(
            "{} {:?}, {} selected",
            if added { "Selected" } else { "Deselected" },
            option.label,
            selection.len()
        );

        if added {
            self.layout.clear_input(!selection.is_empty());
        }
        self.layout.clear_line_break();
        self.layout.reconcile_placeholder(!selection.is_empty());

        self.events.push(SelectEvent::Changed(selection));
        match self.events.last() {
            Some(SelectEvent::Changed(selection)) => Some(selection.as_slice()),
            _ => None,
        }
    }

    /// Per-frame update.
    ///
    /// Runs due deferred closes, applies resolved lookups, re-issues the last
    /// query on a rising edge of `force_update_suggestions`, and re-asserts
    /// the placeholder for the current `value`. Returns whether anything
    /// visible changed.
    pub fn update(
        &mut self,
        cx: &mut Context<'_>,
        value: &[SelectOption<T>],
        force_update_suggestions: bool,
    ) -> bool {
        if self.disposed {
            return false;
        }
        let mut changed = false;

        let panel_before = self.menu.panel();
        let gating = self.gating();
        for effect in self.menu.tick(gating) {
            self.apply_menu_effect(effect);
        }
        changed |= panel_before != self.menu.panel();

        if force_update_suggestions && !self.force_update_seen {
            log::debug!("Forced refresh of {:?}", self.fetcher.last_query());
            self.fetcher.refetch();
        }
        self.force_update_seen = force_update_suggestions;

        changed |= self.fetcher.poll(cx);
        changed |= self.layout.reconcile_placeholder(!value.is_empty());
        changed
    }

    /// Re-record where the input is so the panel follows it.
    pub fn revalidate_anchor(&mut self, input: Rect) -> bool {
        self.menu.revalidate_anchor(input)
    }

    /// Content of the suggestion panel for the current `value`.
    pub fn panel_content(&self, value: &[SelectOption<T>]) -> PanelContent<'_, T> {
        let suggestions = self.fetcher.suggestions();
        if suggestions.is_empty() {
            return if self.fetcher.is_errored() {
                PanelContent::Errored(&self.config.errored_message)
            } else {
                PanelContent::NoResults(&self.config.no_results_message)
            };
        }
        PanelContent::Suggestions(
            suggestions
                .iter()
                .enumerate()
                .map(|(index, option)| SuggestionRow {
                    index,
                    option,
                    checked: contains_value(value, &option.value),
                })
                .collect(),
        )
    }

    fn gating(&self) -> OpenGating {
        OpenGating::from_auto_open(self.config.auto_open_menu)
    }

    fn drive_menu(&mut self, event: MenuEvent) {
        let gating = self.gating();
        for effect in self.menu.handle(event, gating) {
            self.apply_menu_effect(effect);
        }
    }

    fn apply_menu_effect(&mut self, effect: MenuEffect) {
        match effect {
            MenuEffect::ResetAnchor => self.selection.reset_anchor(),
            MenuEffect::Opened => log::debug!("Suggestion panel opened"),
            MenuEffect::ScheduleClose(_) | MenuEffect::CancelClose(_) => {}
        }
    }
}

impl<T> Select<T> {
    /// Take the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<SelectEvent<T>> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Change the configuration. The race policy is fixed at construction.
    pub fn config_mut(&mut self) -> &mut SelectConfig {
        &mut self.config
    }

    pub fn measure_style(&self) -> &MeasureStyle {
        self.layout.style()
    }

    pub fn set_measure_style(&mut self, style: MeasureStyle) {
        self.layout.set_style(style);
    }

    pub fn panel_state(&self) -> PanelState {
        self.menu.panel()
    }

    /// Whether the suggestion panel is on screen.
    pub fn is_panel_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn has_ever_opened(&self) -> bool {
        self.menu.has_ever_opened()
    }

    pub fn placement(&self) -> PanelPlacement {
        PanelPlacement::from_render_to_portal(self.config.render_to_portal)
    }

    pub fn anchor(&self) -> &PanelAnchor {
        self.menu.anchor()
    }

    /// Whether the host should keep the input focused.
    pub fn wants_focus(&self) -> bool {
        self.config.focused && !self.disposed
    }

    pub fn suggestions(&self) -> &[SelectOption<T>] {
        self.fetcher.suggestions()
    }

    pub fn is_errored(&self) -> bool {
        self.fetcher.is_errored()
    }

    /// Lookups issued but not resolved.
    pub fn in_flight(&self) -> usize {
        self.fetcher.in_flight()
    }

    /// Text to display in the input.
    pub fn input_value(&self) -> &str {
        self.layout.input_value()
    }

    pub fn line_break(&self) -> bool {
        self.layout.line_break()
    }

    /// Width the input should grow to in single-line mode.
    pub fn input_width(&self) -> Option<f64> {
        self.layout.input_width()
    }

    /// Value of the range anchor, if any.
    pub fn anchor_value(&self) -> Option<&T> {
        self.selection.anchor()
    }

    /// Tear down: cancel the pending close and drop in-flight lookups.
    /// Every later call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.menu.handle(MenuEvent::Dispose, OpenGating::default());
        self.fetcher.dispose();
        self.events.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<T> Drop for Select<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
