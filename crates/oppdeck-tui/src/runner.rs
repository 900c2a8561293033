//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point wiring the state machine to the records service
//! - `run_loop`: main event loop processing terminal events and task results

use tokio::sync::mpsc;

use oppdeck_api::RecordService;
use oppdeck_app::config::Settings;
use oppdeck_app::message::Message;
use oppdeck_app::process::process_message;
use oppdeck_app::signals;
use oppdeck_app::state::AppState;
use oppdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application against the given records service.
pub async fn run<S>(settings: Settings, account_id: String, service: S) -> Result<()>
where
    S: RecordService + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::new(settings, account_id);
    info!("Starting UI for account {}", state.account_id);

    // Unified message channel: spawned tasks and the signal handler feed it
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on Ctrl+C)
    signals::spawn_signal_handler(msg_tx.clone());

    // Mount-time loads: first page plus the stage picklist
    process_message(&mut state, Message::Refresh, &msg_tx, &service);
    process_message(&mut state, Message::LoadStageOptions, &msg_tx, &service);

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx, &service);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    service: &S,
) -> Result<()>
where
    S: RecordService + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process task results and signal messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, service);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (blocks up to the 50ms tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, service);
        }
    }

    Ok(())
}
