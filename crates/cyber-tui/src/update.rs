//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::input::{self, InputOutcome};
use crate::render;
use crate::results::cards_for_height;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.session.is_searching() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SearchSettled { id, results } => {
            if app.session.settle(id, results) {
                app.results.reset();
                let (width, height) = app.viewport;
                handle_frame(app, width, height);
            } else {
                debug!(?id, "ignoring stale search response");
            }
            vec![]
        }
    }
}

/// Recomputes how many result cards fit the current viewport.
fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    app.viewport = (width, height);
    let regions = render::layout(Rect::new(0, 0, width, height));
    let total = app.session.results().len();
    app.results
        .set_visible_cards(cards_for_height(regions.results.height), total);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if input::handle_paste(&mut app.input, &text) {
                sync_query(app);
            }
            vec![]
        }
        Event::Resize(width, height) => {
            handle_frame(app, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let total = app.session.results().len();

    match key.code {
        KeyCode::Esc => return quit(app),
        KeyCode::Char('c') if ctrl => return quit(app),
        KeyCode::Enter => {
            return match app.session.submit() {
                Some(ticket) => {
                    app.spinner_frame = 0;
                    vec![UiEffect::StartSearch { ticket }]
                }
                None => vec![],
            };
        }
        KeyCode::Char('o') if ctrl => return open_selected(app),
        KeyCode::Up => {
            app.results.select_prev(total);
            return vec![];
        }
        KeyCode::Down => {
            app.results.select_next(total);
            return vec![];
        }
        KeyCode::PageUp => {
            app.results.page_up(total);
            return vec![];
        }
        KeyCode::PageDown => {
            app.results.page_down(total);
            return vec![];
        }
        _ => {}
    }

    if input::handle_key(&mut app.input, key) == InputOutcome::Edited {
        sync_query(app);
    }
    vec![]
}

/// Pushes the edited buffer into the session.
fn sync_query(app: &mut AppState) {
    app.session.update_query(app.input.text());
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    vec![UiEffect::Quit]
}

fn open_selected(app: &AppState) -> Vec<UiEffect> {
    match app.session.results().get(app.results.selected()) {
        Some(result) if !result.url.trim().is_empty() => vec![UiEffect::OpenBrowser {
            url: result.url.clone(),
        }],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use cyber_core::{RequestId, SearchResult, SearchTicket};

    use super::*;

    fn press(code: KeyCode) -> UiEvent {
        press_with(code, KeyModifiers::NONE)
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, press(KeyCode::Char(ch)));
        }
    }

    fn result(rank: u32, name: &str) -> SearchResult {
        SearchResult {
            url: format!("https://{}.example", name.to_lowercase()),
            name: name.to_string(),
            rank,
            ..SearchResult::default()
        }
    }

    fn start_search(app: &mut AppState) -> SearchTicket {
        let effects = update(app, press(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::StartSearch { ticket }] => ticket.clone(),
            other => panic!("expected one StartSearch, got {other:?}"),
        }
    }

    fn settle(app: &mut AppState, id: RequestId, results: Vec<SearchResult>) {
        update(app, UiEvent::SearchSettled { id, results });
    }

    fn app() -> AppState {
        let mut app = AppState::new("http://localhost:3000/api/search");
        update(
            &mut app,
            UiEvent::Frame {
                width: 80,
                height: 40,
            },
        );
        app
    }

    #[test]
    fn typing_updates_session_query() {
        let mut app = app();
        type_text(&mut app, "neural networks");
        assert_eq!(app.session.query(), "neural networks");
        assert_eq!(app.input.text(), "neural networks");

        update(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.session.query(), "neural network");
    }

    #[test]
    fn enter_with_query_starts_one_search() {
        let mut app = app();
        type_text(&mut app, "neural networks");

        let ticket = start_search(&mut app);
        assert_eq!(ticket.query, "neural networks");
        assert!(app.session.is_searching());

        // Second Enter while pending is not admitted.
        assert!(update(&mut app, press(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn enter_with_blank_query_does_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert!(update(&mut app, press(KeyCode::Enter)).is_empty());
        assert!(!app.session.is_searching());
        assert!(!app.session.is_settled());
    }

    #[test]
    fn editing_allowed_while_pending() {
        let mut app = app();
        type_text(&mut app, "rust");
        start_search(&mut app);
        type_text(&mut app, "lang");
        assert_eq!(app.session.query(), "rustlang");
        assert!(app.session.is_searching());
    }

    #[test]
    fn settled_results_are_kept_in_order() {
        let mut app = app();
        type_text(&mut app, "neural networks");
        let ticket = start_search(&mut app);
        settle(
            &mut app,
            ticket.id,
            vec![result(1, "A"), result(2, "B"), result(3, "C")],
        );

        let names: Vec<_> = app.session.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(app.session.status_message().as_deref(), Some("FOUND 3 RESULTS"));
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut app = app();
        type_text(&mut app, "first");
        let first = start_search(&mut app);
        settle(&mut app, first.id, vec![result(1, "Old")]);

        let second = start_search(&mut app);
        settle(&mut app, first.id, vec![result(1, "Stale")]);
        assert!(app.session.is_searching());

        settle(&mut app, second.id, vec![result(1, "Fresh")]);
        assert_eq!(app.session.results()[0].name, "Fresh");
    }

    #[test]
    fn new_results_reset_selection() {
        let mut app = app();
        type_text(&mut app, "q");
        let ticket = start_search(&mut app);
        settle(&mut app, ticket.id, vec![result(1, "A"), result(2, "B")]);
        update(&mut app, press(KeyCode::Down));
        assert_eq!(app.results.selected(), 1);

        let ticket = start_search(&mut app);
        settle(&mut app, ticket.id, vec![result(1, "C")]);
        assert_eq!(app.results.selected(), 0);
    }

    #[test]
    fn navigation_is_bounded_by_results() {
        let mut app = app();
        type_text(&mut app, "q");
        let ticket = start_search(&mut app);
        settle(&mut app, ticket.id, vec![result(1, "A"), result(2, "B")]);

        update(&mut app, press(KeyCode::Down));
        update(&mut app, press(KeyCode::Down));
        update(&mut app, press(KeyCode::PageDown));
        assert_eq!(app.results.selected(), 1);
        update(&mut app, press(KeyCode::PageUp));
        update(&mut app, press(KeyCode::Up));
        assert_eq!(app.results.selected(), 0);
    }

    #[test]
    fn ctrl_o_opens_selected_url() {
        let mut app = app();
        type_text(&mut app, "q");
        let ticket = start_search(&mut app);
        settle(&mut app, ticket.id, vec![result(1, "A"), result(2, "B")]);
        update(&mut app, press(KeyCode::Down));

        let effects = update(&mut app, press_with(KeyCode::Char('o'), KeyModifiers::CONTROL));
        assert_eq!(
            effects,
            vec![UiEffect::OpenBrowser {
                url: "https://b.example".to_string()
            }]
        );
        assert_eq!(app.input.text(), "q");
    }

    #[test]
    fn ctrl_o_without_results_does_nothing() {
        let mut app = app();
        let effects = update(&mut app, press_with(KeyCode::Char('o'), KeyModifiers::CONTROL));
        assert!(effects.is_empty());
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = app();
        assert_eq!(update(&mut app, press(KeyCode::Esc)), vec![UiEffect::Quit]);
        assert!(app.should_quit);

        let mut app = self::app();
        let effects = update(&mut app, press_with(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(effects, vec![UiEffect::Quit]);
        assert!(app.input.is_empty());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert!(app.input.is_empty());
    }

    #[test]
    fn paste_updates_query() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("deep\nlearning".to_string())),
        );
        assert_eq!(app.session.query(), "deep learning");
    }

    #[test]
    fn tick_animates_only_while_searching() {
        let mut app = app();
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 0);

        type_text(&mut app, "q");
        start_search(&mut app);
        update(&mut app, UiEvent::Tick);
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 2);
    }

    #[test]
    fn frame_sizes_visible_cards() {
        let mut app = AppState::new("http://localhost:3000/api/search");
        update(
            &mut app,
            UiEvent::Frame {
                width: 80,
                height: 7 + 3 * crate::results::CARD_HEIGHT,
            },
        );
        assert_eq!(app.results.visible_cards(), 3);
        assert_eq!(app.viewport, (80, 7 + 3 * crate::results::CARD_HEIGHT));
    }
}
