//! Message processing - the TEA pump
//!
//! Runs a message (and every follow-up it produces) through the update
//! function, dispatching any resulting actions to the spawn layer.

use tokio::sync::mpsc;

use oppdeck_api::RecordService;

use crate::handler;
use crate::message::Message;
use crate::spawn;
use crate::state::AppState;

/// Process a message through the TEA update function.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &S,
) where
    S: RecordService + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            spawn::handle_action(action, msg_tx.clone(), service.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
