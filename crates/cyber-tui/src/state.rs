//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: SearchSession   (query, request lifecycle, results)
//! ├── input: QueryBuffer       (editable text + cursor, mirrors session.query)
//! ├── results: ResultsState    (selection and scroll over session.results)
//! └── spinner_frame, viewport, endpoint, should_quit
//! ```
//!
//! The session is the single owner of search semantics. The input buffer is
//! the editing surface; every edit is pushed into the session with
//! `update_query`.

use cyber_core::SearchSession;

use crate::input::QueryBuffer;
use crate::results::ResultsState;

/// Combined application state for the TUI.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: SearchSession,
    pub input: QueryBuffer,
    pub results: ResultsState,
    /// Endpoint shown in the header.
    pub endpoint: String,
    /// Spinner animation counter, advanced on ticks while searching.
    pub spinner_frame: usize,
    /// Last known terminal size (width, height).
    pub viewport: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
