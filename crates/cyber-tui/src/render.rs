//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::input::{INPUT_HEIGHT, render_input};
use crate::results::render_results;
use crate::state::AppState;

const HEADER_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;

const TITLE: &str = "CYBER SEARCH";
const TAGLINE: &str = "[NEURAL INTERFACE ACTIVATED]";
const SUBMIT_HINT: &str = "ENTER search";
const KEY_HINTS: &str = " · ↑↓ select · CTRL+O open · ESC quit";

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub status: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the terminal area into regions.
///
/// Shared by rendering and the reducer so scroll math matches what is drawn.
pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    // Results get a one-column margin on each side.
    let results = Rect {
        x: chunks[3].x.saturating_add(1),
        width: chunks[3].width.saturating_sub(2),
        ..chunks[3]
    };

    AppLayout {
        header: chunks[0],
        input: chunks[1],
        status: chunks[2],
        results,
        footer: chunks[4],
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let regions = layout(frame.area());

    render_header(app, frame, regions.header);
    render_input(app, frame, regions.input);
    render_status(app, frame, regions.status);
    render_results(app, frame, regions.results);
    render_footer(app, frame, regions.footer);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(TAGLINE, Style::default().fg(Color::Cyan)),
    ]);
    let endpoint = Line::from(Span::styled(
        truncate_with_ellipsis(&app.endpoint, usize::from(area.width)),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(vec![title, endpoint]), area);
}

fn render_status(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(message) = app.session.status_message() else {
        return;
    };
    let color = if app.session.results().is_empty() {
        Color::Red
    } else {
        Color::Green
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints. The submit hint is lit only when Enter would be admitted.
fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let submit = if app.session.can_submit() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        dim
    };
    let hints = Line::from(vec![
        Span::styled(SUBMIT_HINT, submit),
        Span::styled(KEY_HINTS, dim),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use cyber_core::SearchResult;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::events::UiEvent;
    use crate::update::update;

    fn draw_buffer(app: &AppState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        terminal.draw(|frame| render(app, frame)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let buffer = draw_buffer(app, width, height);
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn result(rank: u32, name: &str) -> SearchResult {
        SearchResult {
            url: format!("https://{}.example", name.to_lowercase()),
            name: name.to_string(),
            snippet: format!("about {name}"),
            host_name: format!("{}.example", name.to_lowercase()),
            rank,
            date: "2024-05-01".to_string(),
            favicon: String::new(),
        }
    }

    fn settled(results: Vec<SearchResult>) -> AppState {
        let mut app = AppState::new("http://localhost:3000/api/search");
        app.input.set_text("neural networks");
        app.session.update_query("neural networks");
        let ticket = app.session.submit().expect("admitted");
        app.session.settle(ticket.id, results);
        app
    }

    #[test]
    fn layout_reserves_fixed_rows() {
        let regions = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.header.height, HEADER_HEIGHT);
        assert_eq!(regions.input.height, INPUT_HEIGHT);
        assert_eq!(regions.results.height, 24 - 2 - 3 - 1 - 1);
        assert_eq!(regions.results.width, 78);
        assert_eq!(regions.footer.y, 23);
    }

    #[test]
    fn idle_screen_shows_placeholder_and_no_status() {
        let screen = draw(&AppState::new("http://localhost:3000/api/search"), 80, 20);
        assert!(screen.contains("CYBER SEARCH [NEURAL INTERFACE ACTIVATED]"));
        assert!(screen.contains("ENTER SEARCH QUERY_"));
        assert!(!screen.contains("RESULTS"));
    }

    #[test]
    fn pending_screen_shows_searching() {
        let mut app = AppState::new("http://localhost:3000/api/search");
        app.input.set_text("rust");
        app.session.update_query("rust");
        app.session.submit().expect("admitted");

        let screen = draw(&app, 80, 20);
        assert!(screen.contains("SEARCHING..."));
        assert!(screen.contains("rust"));
        assert!(!screen.contains("RESULTS"));
    }

    #[test]
    fn settled_screen_lists_results_in_order() {
        let mut app = settled(vec![result(1, "Alpha"), result(2, "Beta")]);
        update(
            &mut app,
            UiEvent::Frame {
                width: 80,
                height: 24,
            },
        );
        let screen = draw(&app, 80, 24);

        assert!(screen.contains("FOUND 2 RESULTS"));
        let alpha = screen.find("#1 Alpha").expect("first card");
        let beta = screen.find("#2 Beta").expect("second card");
        assert!(alpha < beta);
        assert!(screen.contains("https://alpha.example"));
        assert!(screen.contains("about Beta"));
        assert!(screen.contains("2024-05-01"));
    }

    #[test]
    fn settled_empty_screen_shows_no_results() {
        let app = settled(Vec::new());
        let screen = draw(&app, 80, 20);
        assert!(screen.contains("NO RESULTS FOUND"));
        assert!(!screen.contains("FOUND 0"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = settled(vec![result(1, "Alpha")]);
        draw(&app, 10, 4);
        draw(&app, 1, 1);
    }

    /// Foreground of the first cell of the footer's submit hint.
    fn submit_hint_color(app: &AppState) -> Color {
        let buffer = draw_buffer(app, 80, 20);
        let cell = &buffer[(0, 19)];
        assert_eq!(cell.symbol(), "E");
        cell.fg
    }

    #[test]
    fn submit_hint_is_dim_for_blank_query() {
        let mut app = AppState::new("http://localhost:3000/api/search");
        assert_eq!(submit_hint_color(&app), Color::DarkGray);

        app.input.set_text("   ");
        app.session.update_query("   ");
        assert_eq!(submit_hint_color(&app), Color::DarkGray);
    }

    #[test]
    fn submit_hint_is_lit_for_submittable_query() {
        let mut app = AppState::new("http://localhost:3000/api/search");
        app.input.set_text("rust");
        app.session.update_query("rust");
        assert_eq!(submit_hint_color(&app), Color::Cyan);
    }

    #[test]
    fn submit_hint_is_dim_while_waiting_for_response() {
        let mut app = AppState::new("http://localhost:3000/api/search");
        app.input.set_text("rust");
        app.session.update_query("rust");
        let ticket = app.session.submit().expect("admitted");
        assert_eq!(submit_hint_color(&app), Color::DarkGray);

        app.session.settle(ticket.id, Vec::new());
        assert_eq!(submit_hint_color(&app), Color::Cyan);
    }
}
