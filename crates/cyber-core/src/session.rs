//! Search session state machine.
//!
//! The session owns the editable query, the request lifecycle and the current
//! result set. It performs no I/O: `submit` hands back a ticket for the caller
//! to execute, and the caller reports the outcome through `settle`.
//!
//! ```text
//! Idle ──submit [query non-empty]──▶ Pending ──settle──▶ Settled
//!                                       ▲                   │
//!                                       └──submit [non-empty]┘
//! ```
//!
//! Only one request may be in flight. A `submit` while Pending is not
//! admitted, and a `settle` carrying any id other than the in-flight one is
//! discarded.

use tracing::debug;

use crate::types::SearchResult;

/// Opaque identifier correlating a submission with its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// An admitted submission: the request the caller must now issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: RequestId,
    pub query: String,
}

/// Request lifecycle. Results only exist once a request has settled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Pending { id: RequestId },
    /// The last request reached an outcome. An empty list is "no results".
    Settled { results: Vec<SearchResult> },
}

/// One user's in-progress or completed search.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    phase: Phase,
    next_id: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current results in API order. Empty unless settled.
    pub fn results(&self) -> &[SearchResult] {
        match &self.phase {
            Phase::Settled { results } => results,
            Phase::Idle | Phase::Pending { .. } => &[],
        }
    }

    /// Replaces the query text. Allowed in every phase.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Attempts to start a search for the current query.
    ///
    /// Returns `None` without touching state when the trimmed query is empty
    /// or a request is already in flight.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        if let Phase::Pending { id } = self.phase {
            debug!(?id, "submit ignored: request in flight");
            return None;
        }
        if self.query.trim().is_empty() {
            return None;
        }

        let id = RequestId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.phase = Phase::Pending { id };
        debug!(?id, query = %self.query, "search submitted");

        Some(SearchTicket {
            id,
            query: self.query.clone(),
        })
    }

    /// Records the outcome of the request identified by `id`.
    ///
    /// Returns `false` and leaves state untouched if `id` is not the request
    /// currently in flight.
    pub fn settle(&mut self, id: RequestId, results: Vec<SearchResult>) -> bool {
        if !self.is_in_flight(id) {
            debug!(?id, "stale search response discarded");
            return false;
        }
        debug!(?id, count = results.len(), "search settled");
        self.phase = Phase::Settled { results };
        true
    }

    /// Returns true if `id` is the outstanding request.
    pub fn is_in_flight(&self, id: RequestId) -> bool {
        self.phase == Phase::Pending { id }
    }

    // ------------------------------------------------------------------
    // Derived presentation state
    // ------------------------------------------------------------------

    /// Whether the "searching" indicator is shown.
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Whether at least one request has settled.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled { .. })
    }

    /// Whether a submit would currently be admitted.
    pub fn can_submit(&self) -> bool {
        !self.is_searching() && !self.query.trim().is_empty()
    }

    /// Result count line, shown only once settled.
    pub fn status_message(&self) -> Option<String> {
        match &self.phase {
            Phase::Settled { results } if results.is_empty() => {
                Some("NO RESULTS FOUND".to_string())
            }
            Phase::Settled { results } => Some(format!("FOUND {} RESULTS", results.len())),
            Phase::Idle | Phase::Pending { .. } => None,
        }
    }
}
