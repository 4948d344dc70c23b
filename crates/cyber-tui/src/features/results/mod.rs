//! Result list feature slice.
//!
//! - `state.rs`: selection and scroll position
//! - `render.rs`: result cards

mod render;
mod state;

pub use render::{CARD_HEIGHT, cards_for_height, render_results};
pub use state::ResultsState;
