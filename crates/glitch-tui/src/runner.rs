//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, timers and signal handler, then loops
//! - `run_loop`: drains timer/signal messages, draws, polls the terminal

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use glitch_app::config::Settings;
use glitch_app::process::process_message;
use glitch_app::signals;
use glitch_app::{AppState, Message, TimerSet};
use glitch_core::prelude::*;
use glitch_core::ThemeIndex;

use crate::animation::{FrameClock, FRAME_INTERVAL};
use crate::{event, render, startup, terminal};

/// Run the presentation until the user quits
pub async fn run(settings: Settings, initial: ThemeIndex) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::new(settings, initial);

    // Unified message channel (timers, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut timers = TimerSet::new(msg_tx);
    startup::startup(&mut state, &mut timers);

    let result = run_loop(&mut term, &mut state, msg_rx, &mut timers);

    timers.shutdown();
    ratatui::restore();
    info!("Terminal restored");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    timers: &mut TimerSet,
) -> Result<()> {
    let mut clock = FrameClock::new(FRAME_INTERVAL, Instant::now());

    while !state.should_quit() {
        // Process timer and signal messages
        loop {
            match msg_rx.try_recv() {
                Ok(msg) => process_message(state, msg, timers),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(Error::ChannelClosed),
            }
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll(clock.remaining(Instant::now()))? {
            process_message(state, message, timers);
        }

        // Advance animations and expire noise even while keys keep arriving
        if let Some(tick) = clock.tick(Instant::now()) {
            process_message(state, tick, timers);
        }
    }

    Ok(())
}
