//! Results feature view.
//!
//! Each result is a fixed-height card so scroll math stays a division.

use cyber_core::SearchResult;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::{truncate_with_ellipsis, wrap_to_width};
use crate::state::AppState;

/// Rows per card: title, url, two snippet rows, source row, gap.
///
/// Source of truth for both rendering and the reducer's scroll math.
pub const CARD_HEIGHT: u16 = 6;

const SNIPPET_LINES: usize = 2;
const GUTTER_SELECTED: &str = "▌ ";
const GUTTER: &str = "  ";

/// Number of whole cards that fit in `height` rows.
pub fn cards_for_height(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

/// Renders the visible window of result cards.
pub fn render_results(app: &AppState, frame: &mut Frame, area: Rect) {
    let session = &app.session;

    if !session.is_settled() {
        if !session.is_searching() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "TYPE A QUERY AND PRESS ENTER TO JACK IN",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
        return;
    }

    let results = session.results();
    let range = app.results.visible_range(results.len());
    let selected = app.results.selected();
    let mut lines: Vec<Line<'static>> = Vec::new();
    for idx in range {
        lines.extend(card_lines(&results[idx], idx == selected, area.width));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Builds the rows of a single card.
fn card_lines(result: &SearchResult, selected: bool, width: u16) -> Vec<Line<'static>> {
    let gutter = if selected {
        Span::styled(GUTTER_SELECTED, Style::default().fg(Color::Magenta))
    } else {
        Span::raw(GUTTER)
    };
    let content_width = usize::from(width).saturating_sub(GUTTER.width());

    let badge = format!("#{} ", result.rank);
    let mut title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(Color::Magenta);
    }
    let title = truncate_with_ellipsis(
        &result.name,
        content_width.saturating_sub(badge.width()),
    );

    let mut lines = Vec::with_capacity(usize::from(CARD_HEIGHT));
    lines.push(Line::from(vec![
        gutter.clone(),
        Span::styled(
            badge,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(title, title_style),
    ]));

    lines.push(Line::from(vec![
        gutter.clone(),
        Span::styled(
            truncate_with_ellipsis(&result.url, content_width),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    let mut snippet = wrap_to_width(&result.snippet, content_width, SNIPPET_LINES);
    snippet.resize(SNIPPET_LINES, String::new());
    for row in snippet {
        lines.push(Line::from(vec![
            gutter.clone(),
            Span::styled(row, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(source_line(result, gutter, content_width));
    lines.push(Line::default());
    lines
}

/// Host on the left, date pushed to the right edge.
fn source_line(result: &SearchResult, gutter: Span<'static>, width: usize) -> Line<'static> {
    let date = truncate_with_ellipsis(&result.date, width / 2);
    let host_room = width.saturating_sub(date.width() + 1);
    let host = truncate_with_ellipsis(&result.host_name, host_room);
    let pad = width.saturating_sub(host.width() + date.width());

    Line::from(vec![
        gutter,
        Span::styled(host, Style::default().fg(Color::Green)),
        Span::raw(" ".repeat(pad)),
        Span::styled(date, Style::default().fg(Color::DarkGray)),
    ])
}
