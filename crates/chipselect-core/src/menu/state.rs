//! Panel state definitions and the transition function.

/// Visibility of the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel hidden.
    #[default]
    Closed,
    /// Panel shown.
    Open,
    /// Panel still shown, a close has been scheduled but not committed.
    ClosingPending,
}

impl PanelState {
    /// Whether the panel is on screen (open or about to close).
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open | Self::ClosingPending)
    }
}

/// Identifies one scheduled close. Only the newest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CloseTicket(u64);

impl CloseTicket {
    /// Raw ticket number.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Whether a focus-triggered open may go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenGating {
    /// Focus opens only once the panel has been opened before.
    #[default]
    AfterFirstOpen,
    /// Focus always opens.
    Always,
}

impl OpenGating {
    pub fn from_auto_open(auto_open_menu: bool) -> Self {
        if auto_open_menu {
            Self::Always
        } else {
            Self::AfterFirstOpen
        }
    }
}

/// Inputs to the panel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The input gained focus.
    FocusGained,
    /// The input text changed.
    TextChanged,
    /// The input lost focus.
    FocusLost,
    /// A deferred close came due.
    CloseTimerFired(CloseTicket),
    /// The select is being torn down.
    Dispose,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Run a zero-delay deferred close for this ticket.
    ScheduleClose(CloseTicket),
    /// Drop a previously scheduled close.
    CancelClose(CloseTicket),
    /// The panel opened from `Closed`.
    Opened,
    /// The panel committed to `Closed`; the range anchor must be forgotten.
    ResetAnchor,
}

/// Complete state of the panel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub panel: PanelState,
    /// Set on the first open, never cleared.
    pub has_ever_opened: bool,
    pub pending_close: Option<CloseTicket>,
    next_ticket: u64,
}

impl MenuState {
    /// Initial state: closed, never opened.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next state for `event`.
    pub fn transition(self, event: MenuEvent, gating: OpenGating) -> (Self, Vec<MenuEffect>) {
        let mut next = self;
        let mut effects = Vec::new();

        match event {
            MenuEvent::FocusGained => {
                if gating == OpenGating::Always || next.has_ever_opened {
                    next.open(&mut effects);
                }
            }
            MenuEvent::TextChanged => next.open(&mut effects),
            MenuEvent::FocusLost => {
                if next.panel.is_visible() {
                    if let Some(stale) = next.pending_close.take() {
                        effects.push(MenuEffect::CancelClose(stale));
                    }
                    let ticket = CloseTicket(next.next_ticket);
                    next.next_ticket += 1;
                    next.pending_close = Some(ticket);
                    next.panel = PanelState::ClosingPending;
                    effects.push(MenuEffect::ScheduleClose(ticket));
                }
            }
            MenuEvent::CloseTimerFired(ticket) => {
                if next.pending_close == Some(ticket) && next.panel == PanelState::ClosingPending {
                    next.pending_close = None;
                    next.panel = PanelState::Closed;
                    effects.push(MenuEffect::ResetAnchor);
                }
            }
            MenuEvent::Dispose => {
                if let Some(pending) = next.pending_close.take() {
                    effects.push(MenuEffect::CancelClose(pending));
                }
                next.panel = PanelState::Closed;
            }
        }

        (next, effects)
    }

    fn open(&mut self, effects: &mut Vec<MenuEffect>) {
        if let Some(pending) = self.pending_close.take() {
            effects.push(MenuEffect::CancelClose(pending));
        }
        if self.panel == PanelState::Closed {
            effects.push(MenuEffect::Opened);
        }
        self.panel = PanelState::Open;
        self.has_ever_opened = true;
    }
}
