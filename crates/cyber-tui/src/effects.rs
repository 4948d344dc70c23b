//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only, so the reducer stays pure.

use cyber_core::SearchTicket;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Issue the outbound request for an admitted submission.
    StartSearch { ticket: SearchTicket },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
