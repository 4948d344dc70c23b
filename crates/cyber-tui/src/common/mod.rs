pub mod text;

pub use text::{truncate_with_ellipsis, wrap_to_width};

/// Spinner frames for the searching indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Returns the spinner glyph for an animation frame counter.
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
