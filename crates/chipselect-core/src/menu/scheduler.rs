//! Deferred close scheduling.

use super::state::CloseTicket;

/// Runs zero-delay deferred closes.
///
/// A host backed by real timers schedules a callback per ticket; an
/// immediate-mode host uses [`FrameScheduler`] and drains it once per frame.
pub trait Scheduler {
    /// Arrange for `ticket` to come due on the next turn.
    fn schedule(&mut self, ticket: CloseTicket);

    /// Forget `ticket` if it has not come due yet.
    fn cancel(&mut self, ticket: CloseTicket);

    /// Take every ticket that is due now.
    fn take_due(&mut self) -> Vec<CloseTicket>;
}

/// Queue of tickets that come due at the next frame.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    queue: Vec<CloseTicket>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tickets waiting for the next frame.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&mut self, ticket: CloseTicket) {
        self.queue.push(ticket);
    }

    fn cancel(&mut self, ticket: CloseTicket) {
        self.queue.retain(|t| *t != ticket);
    }

    fn take_due(&mut self) -> Vec<CloseTicket> {
        std::mem::take(&mut self.queue)
    }
}
