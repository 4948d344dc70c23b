//! Query input feature slice.
//!
//! - `text_buffer.rs`: single-line editing buffer
//! - `update.rs`: key and paste handling
//! - `render.rs`: input box rendering

mod render;
mod text_buffer;
mod update;

pub use render::{INPUT_HEIGHT, render_input};
pub use text_buffer::{CursorMove, QueryBuffer};
pub use update::{InputOutcome, handle_key, handle_paste};
