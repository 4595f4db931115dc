//! ChipSelect Core Library
//!
//! Headless state and logic for a searchable multi-select: suggestion
//! fetching, chip selection with shift-range toggling, suggestion panel
//! timing, and input line layout. Rendering lives in `chipselect-widgets`.

pub mod config;
pub mod controls;
pub mod fetch;
pub mod input;
pub mod layout;
pub mod menu;
pub mod option;
pub mod select;
pub mod selection;

pub use config::{RacePolicy, SelectConfig};
pub use controls::SelectControls;
pub use fetch::{
    BoxFuture, FnSource, StaticSuggestions, SuggestionError, SuggestionFetcher, SuggestionResult,
    SuggestionSource,
};
pub use input::{Modifiers, ToggleOrigin};
pub use layout::{LayoutChange, LineLayoutController, MeasureStyle, TextMeasurer};
pub use menu::{FrameScheduler, MenuTimingController, PanelAnchor, PanelPlacement, PanelState, Scheduler};
pub use option::SelectOption;
pub use select::{PanelContent, Select, SelectEvent, SuggestionRow};
pub use selection::{SelectionModel, ToggleOutcome};
