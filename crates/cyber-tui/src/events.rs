//! UI event types.
//!
//! All external inputs (terminal, timer, async search results) are converted
//! to `UiEvent` before being processed by the reducer.

use crossterm::event::Event as CrosstermEvent;
use cyber_core::{RequestId, SearchResult};

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
/// Async work reports back through the runtime inbox as one of these.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation).
    Tick,

    /// Emitted once per frame before other events are processed.
    /// Carries terminal dimensions for layout calculations.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// A search request reached its outcome. Failures arrive as an empty list.
    SearchSettled {
        id: RequestId,
        results: Vec<SearchResult>,
    },
}
