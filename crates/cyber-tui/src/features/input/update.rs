//! Query field key handling.
//!
//! Edits the buffer only; the app reducer decides what an edit means for the
//! session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::text_buffer::{CursorMove, QueryBuffer};

/// Whether a key changed the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Text changed; the session query must be updated.
    Edited,
    /// Cursor moved or nothing happened.
    Unchanged,
    /// Not an editing key.
    Ignored,
}

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    fn none(&self) -> bool {
        !self.ctrl && !self.alt
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.alt
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl
    }
}

/// Applies an editing key to the buffer.
pub fn handle_key(buffer: &mut QueryBuffer, key: KeyEvent) -> InputOutcome {
    let mods = Modifiers::from(&key);

    let edited = match key.code {
        KeyCode::Char('a') if mods.only_ctrl() => return moved(buffer, CursorMove::Head),
        KeyCode::Char('e') if mods.only_ctrl() => return moved(buffer, CursorMove::End),
        KeyCode::Char('b') if mods.only_alt() => return moved(buffer, CursorMove::WordLeft),
        KeyCode::Char('f') if mods.only_alt() => return moved(buffer, CursorMove::WordRight),
        KeyCode::Left if mods.only_alt() || mods.only_ctrl() => {
            return moved(buffer, CursorMove::WordLeft);
        }
        KeyCode::Right if mods.only_alt() || mods.only_ctrl() => {
            return moved(buffer, CursorMove::WordRight);
        }
        KeyCode::Left => return moved(buffer, CursorMove::Back),
        KeyCode::Right => return moved(buffer, CursorMove::Forward),
        KeyCode::Home => return moved(buffer, CursorMove::Head),
        KeyCode::End => return moved(buffer, CursorMove::End),

        KeyCode::Char('u') if mods.only_ctrl() => buffer.delete_to_head(),
        KeyCode::Char('k') if mods.only_ctrl() => buffer.delete_to_end(),
        KeyCode::Char('w') if mods.only_ctrl() => buffer.delete_word_left(),
        KeyCode::Backspace if mods.only_alt() => buffer.delete_word_left(),
        KeyCode::Backspace => buffer.delete_prev_char(),
        KeyCode::Delete => buffer.delete_next_char(),
        KeyCode::Char(ch) if mods.none() => {
            buffer.insert_char(ch);
            true
        }
        _ => return InputOutcome::Ignored,
    };

    if edited {
        InputOutcome::Edited
    } else {
        InputOutcome::Unchanged
    }
}

/// Inserts pasted text. Returns true if the text changed.
pub fn handle_paste(buffer: &mut QueryBuffer, text: &str) -> bool {
    let before = buffer.text().len();
    buffer.insert_str(text);
    buffer.text().len() != before
}

fn moved(buffer: &mut QueryBuffer, movement: CursorMove) -> InputOutcome {
    buffer.move_cursor(movement);
    InputOutcome::Unchanged
}
