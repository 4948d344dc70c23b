//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return a `UiEvent`.
//! The runtime spawns them with `spawn_effect` and the result lands in the
//! inbox. They never touch state.

use cyber_core::{SearchClient, SearchTicket};

use crate::events::UiEvent;

/// Executes the request for an admitted submission.
///
/// Every failure collapses to an empty result list, so the session always
/// settles.
pub async fn search(client: SearchClient, ticket: SearchTicket) -> UiEvent {
    let results = client.search_or_empty(&ticket.query).await;
    UiEvent::SearchSettled {
        id: ticket.id,
        results,
    }
}
