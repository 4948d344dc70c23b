//! Core library for Cyber Search.
//!
//! - `session`: the query/submit/settle state machine
//! - `types`: result and wire payload types
//! - `client`: HTTP client for the remote search endpoint
//! - `config`: configuration loading and persistence
//! - `logging`: file-backed tracing setup

pub mod client;
pub mod config;
pub mod logging;
pub mod session;
pub mod types;

pub use client::{SearchClient, SearchError};
pub use session::{Phase, RequestId, SearchSession, SearchTicket};
pub use types::SearchResult;
