//! OS signal handling

use tokio::sync::mpsc;
use tracing::warn;

use crate::message::Message;

/// Spawn a task that turns Ctrl+C / SIGINT into a quit message so the
/// terminal is always restored through the normal shutdown path.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = msg_tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Failed to install signal handler: {e}"),
        }
    });
}
