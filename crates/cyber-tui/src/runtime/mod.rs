//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s to `inbox_tx` when their async work finishes
//! - The runtime drains `inbox_rx` each loop iteration
//!
//! Structure:
//! - `mod.rs`: core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: inbox channel types
//! - `handlers.rs`: effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use cyber_core::SearchClient;
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, CrosstermTerminal};
use crate::{render, update};

/// Tick interval while a search is in flight or the user is typing.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Spinner advances once per this many milliseconds regardless of frame rate.
const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: CrosstermTerminal,
    pub state: AppState,
    client: SearchClient,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each iteration.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (for fast polling while typing).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a runtime and switches the terminal into TUI mode.
    ///
    /// Must be called from within a multi-threaded tokio runtime: searches
    /// are spawned onto it while the event loop blocks this thread.
    pub fn new(client: SearchClient) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(client.endpoint().as_str());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!(endpoint = %self.client.endpoint(), "tui started");
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Layout first so key handling sees the current viewport.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                dirty |= match &event {
                    UiEvent::Frame { .. } => false,
                    UiEvent::Tick => self.state.session.is_searching(),
                    _ => true,
                };
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        info!("tui stopped");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox, the terminal and the tick timer.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let poll_interval = if self.state.session.is_searching() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't block when there is already work to process.
        let poll_duration = if events.is_empty() {
            poll_interval
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= SPINNER_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and forwards its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::StartSearch { ticket } => {
                debug!(id = ?ticket.id, "spawning search");
                let client = self.client.clone();
                self.spawn_effect(move || handlers::search(client, ticket));
            }
            UiEffect::OpenBrowser { url } => {
                if let Err(err) = open::that(&url) {
                    warn!(%url, error = %err, "failed to open browser");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
