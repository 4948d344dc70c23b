//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
///
/// Uses unicode width so wide characters (CJK, emoji) are measured correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// Words longer than a line are split. If the text does not fit, the last
/// line ends with an ellipsis.
pub fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    'words: for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue 'words;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                if lines.len() == max_lines {
                    overflow = true;
                    break 'words;
                }
                continue;
            }
            // Word alone is wider than the line: hard split.
            let (head, tail) = split_at_width(word, width);
            lines.push(head.to_string());
            if lines.len() == max_lines {
                overflow = true;
                break 'words;
            }
            word = tail;
            if word.is_empty() {
                continue 'words;
            }
        }
    }

    if !overflow && !current.is_empty() {
        lines.push(current);
    }

    if overflow && let Some(last) = lines.last_mut() {
        let shortened = truncate_with_ellipsis(last, width.saturating_sub(1));
        *last = if shortened.ends_with('…') {
            shortened
        } else {
            format!("{shortened}…")
        };
    }

    lines
}

/// Splits `text` at the last char boundary that fits in `width` columns.
/// Always takes at least one char so callers make progress.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width && idx > 0 {
            return text.split_at(idx);
        }
        used += ch_width;
    }
    (text, "")
}
