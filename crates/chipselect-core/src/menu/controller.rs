//! Panel timing controller.

use super::anchor::PanelAnchor;
use super::scheduler::{FrameScheduler, Scheduler};
use super::state::{MenuEffect, MenuEvent, MenuState, OpenGating, PanelState};
use kurbo::Rect;

/// Drives [`MenuState`] and executes its timer effects.
///
/// The state machine itself stays pure; this owns the scheduler handle and
/// the panel anchor so the facade only sees the effects it has to act on.
pub struct MenuTimingController {
    state: MenuState,
    scheduler: Box<dyn Scheduler>,
    anchor: PanelAnchor,
}

impl MenuTimingController {
    /// Create a controller backed by `scheduler`.
    pub fn new(scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            state: MenuState::new(),
            scheduler,
            anchor: PanelAnchor::new(),
        }
    }

    /// Create a controller whose deferred closes run at the next [`tick`](Self::tick).
    pub fn with_frame_scheduler() -> Self {
        Self::new(Box::new(FrameScheduler::new()))
    }

    /// Feed `event` through the state machine.
    ///
    /// Timer effects are handed to the scheduler here. The returned effects
    /// are the ones the owner still has to act on (`Opened`, `ResetAnchor`).
    pub fn handle(&mut self, event: MenuEvent, gating: OpenGating) -> Vec<MenuEffect> {
        let before = self.state.panel;
        let (next, effects) = self.state.transition(event, gating);
        self.state = next;
        if before != next.panel {
            log::debug!("Panel {:?} -> {:?} on {:?}", before, next.panel, event);
        }

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                MenuEffect::ScheduleClose(ticket) => self.scheduler.schedule(ticket),
                MenuEffect::CancelClose(ticket) => self.scheduler.cancel(ticket),
                MenuEffect::Opened | MenuEffect::ResetAnchor => remaining.push(effect),
            }
        }
        remaining
    }

    /// Fire every deferred close that has come due.
    pub fn tick(&mut self, gating: OpenGating) -> Vec<MenuEffect> {
        let due = self.scheduler.take_due();
        let mut effects = Vec::new();
        for ticket in due {
            effects.extend(self.handle(MenuEvent::CloseTimerFired(ticket), gating));
        }
        effects
    }

    /// Re-record the input rectangle the panel hangs from.
    pub fn revalidate_anchor(&mut self, input: Rect) -> bool {
        self.anchor.revalidate(input)
    }

    pub fn anchor(&self) -> &PanelAnchor {
        &self.anchor
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn panel(&self) -> PanelState {
        self.state.panel
    }

    /// Whether the panel is on screen.
    pub fn is_open(&self) -> bool {
        self.state.panel.is_visible()
    }

    pub fn has_ever_opened(&self) -> bool {
        self.state.has_ever_opened
    }
}
