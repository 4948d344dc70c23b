//! Input feature view.
//!
//! Pure rendering for the query field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::spinner_glyph;
use crate::state::AppState;

/// Height of the input box (one text row plus borders).
pub const INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "ENTER SEARCH QUERY_";

/// Renders the query field and places the terminal cursor.
pub fn render_input(app: &AppState, frame: &mut Frame, area: Rect) {
    let session = &app.session;

    let title = if session.is_searching() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                spinner_glyph(app.spinner_frame),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                " SEARCHING... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        let style = if session.can_submit() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(" SEARCH ", style))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(placeholder, inner);
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let cursor_col = app.input.before_cursor().width() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    let text = Paragraph::new(app.input.text()).scroll((0, scroll));
    frame.render_widget(text, inner);

    let cursor_x = inner.x + cursor_col - scroll;
    frame.set_cursor_position((cursor_x, inner.y));
}
