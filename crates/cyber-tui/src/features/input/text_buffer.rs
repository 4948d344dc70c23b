//! Single-line buffer backing the query field.
//!
//! Supports the small set of readline-style edits the query field needs.
//! Newlines never enter the buffer; pasted text is flattened to one line.

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Forward,
    Back,
    Head,
    End,
    WordLeft,
    WordRight,
}

/// Query text with a cursor measured in chars.
#[derive(Debug, Clone, Default)]
pub struct QueryBuffer {
    text: String,
    cursor: usize,
}

impl QueryBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text before the cursor (used to place the terminal cursor).
    pub fn before_cursor(&self) -> &str {
        &self.text[..char_to_byte_index(&self.text, self.cursor)]
    }

    /// Replaces the whole text and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = flatten(text);
        self.cursor = char_len(&self.text);
    }

    /// Inserts text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let text = flatten(text);
        if text.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &text);
        self.cursor += char_len(&text);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Deletes the character before the cursor (Backspace).
    pub fn delete_prev_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.delete_range(self.cursor - 1, self.cursor);
        self.cursor -= 1;
        true
    }

    /// Deletes the character at the cursor (Delete).
    pub fn delete_next_char(&mut self) -> bool {
        if self.cursor >= char_len(&self.text) {
            return false;
        }
        self.delete_range(self.cursor, self.cursor + 1);
        true
    }

    /// Deletes from the start of the line to the cursor (Ctrl+U).
    pub fn delete_to_head(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.delete_range(0, self.cursor);
        self.cursor = 0;
        true
    }

    /// Deletes from the cursor to the end of the line (Ctrl+K).
    pub fn delete_to_end(&mut self) -> bool {
        let len = char_len(&self.text);
        if self.cursor >= len {
            return false;
        }
        self.delete_range(self.cursor, len);
        true
    }

    /// Deletes the word segment left of the cursor (Ctrl+W, Alt+Backspace).
    pub fn delete_word_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let start = scan_left_segment(&chars, self.cursor);
        self.delete_range(start, self.cursor);
        self.cursor = start;
        true
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let len = char_len(&self.text);
        self.cursor = match movement {
            CursorMove::Forward => (self.cursor + 1).min(len),
            CursorMove::Back => self.cursor.saturating_sub(1),
            CursorMove::Head => 0,
            CursorMove::End => len,
            CursorMove::WordLeft => {
                let chars: Vec<char> = self.text.chars().collect();
                scan_left_segment(&chars, self.cursor)
            }
            CursorMove::WordRight => {
                let chars: Vec<char> = self.text.chars().collect();
                scan_right_segment(&chars, self.cursor)
            }
        };
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        let start = char_to_byte_index(&self.text, start);
        let end = char_to_byte_index(&self.text, end);
        self.text.replace_range(start..end, "");
    }
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns true if the character is a word character (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn scan_left_segment(chars: &[char], mut idx: usize) -> usize {
    idx = idx.min(chars.len());
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn scan_right_segment(chars: &[char], mut idx: usize) -> usize {
    if idx >= chars.len() {
        return chars.len();
    }
    let class = char_class(chars[idx]);
    while idx < chars.len() && char_class(chars[idx]) == class {
        idx += 1;
    }
    idx
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}
