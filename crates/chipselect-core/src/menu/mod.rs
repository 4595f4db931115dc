//! Suggestion panel visibility.
//!
//! This module decides when the suggestion panel is shown:
//! - Open/closed state with a deferred close that can be cancelled
//! - First-use gating of focus-triggered opens
//! - Anchoring of the panel to the input
//!
//! The transitions are pure; timers run through an injected [`Scheduler`].

mod anchor;
mod controller;
mod scheduler;
mod state;

pub use anchor::{PanelAnchor, PanelPlacement};
pub use controller::MenuTimingController;
pub use scheduler::{FrameScheduler, Scheduler};
pub use state::{CloseTicket, MenuEffect, MenuEvent, MenuState, OpenGating, PanelState};
