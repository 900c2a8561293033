//! Action execution: background task spawning against the records service
//!
//! Every [`UpdateAction`] becomes one or more fire-and-forget tokio tasks.
//! Outcomes flow back into the TEA loop as [`Message`]s; nothing here
//! touches [`crate::state::AppState`].

use tokio::sync::mpsc;
use tracing::error;

use oppdeck_api::RecordService;
use oppdeck_core::error::Error;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Fallback toast texts when the service provides no message of its own.
const FETCH_ROWS_FALLBACK: &str = "Failed to fetch urgent opportunities.";
const FETCH_COUNT_FALLBACK: &str = "Failed to fetch the total record count.";
const FETCH_STAGES_FALLBACK: &str = "Failed to load stage options.";
const SAVE_FALLBACK: &str = "An unexpected error occurred.";

/// The user-facing text for a failed call: the service's own message when it
/// sent one, else the operation's generic fallback.
fn toast_message(err: &Error, fallback: &str) -> String {
    match err {
        Error::Service { message } => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Execute an action by spawning background task(s).
///
/// `LoadPage` spawns the row fetch and the count fetch as two independent
/// tasks: they run concurrently, resolve in either order, and fail
/// independently, delivering separate messages tagged with the load's
/// generation.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: S)
where
    S: RecordService + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadPage {
            generation,
            search_key,
            account_id,
            offset,
            limit,
        } => {
            let rows_service = service.clone();
            let rows_tx = msg_tx.clone();
            let rows_search = search_key.clone();
            let rows_account = account_id.clone();
            tokio::spawn(async move {
                let msg = match rows_service
                    .fetch_urgent_opportunities(&rows_search, &rows_account, offset, limit)
                    .await
                {
                    Ok(opportunities) => Message::PageLoaded {
                        generation,
                        opportunities,
                    },
                    Err(err) => {
                        error!("Row fetch failed: {err}");
                        Message::PageLoadFailed {
                            generation,
                            message: toast_message(&err, FETCH_ROWS_FALLBACK),
                        }
                    }
                };
                let _ = rows_tx.send(msg).await;
            });

            tokio::spawn(async move {
                let msg = match service
                    .fetch_total_record_count(&search_key, &account_id)
                    .await
                {
                    Ok(total) => Message::CountLoaded { generation, total },
                    Err(err) => {
                        error!("Count fetch failed: {err}");
                        Message::CountLoadFailed {
                            generation,
                            message: toast_message(&err, FETCH_COUNT_FALLBACK),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::LoadStageOptions => {
            tokio::spawn(async move {
                let msg = match service.fetch_stage_options().await {
                    Ok(options) => Message::StageOptionsLoaded { options },
                    Err(err) => {
                        error!("Stage picklist fetch failed: {err}");
                        Message::StageOptionsLoadFailed {
                            message: toast_message(&err, FETCH_STAGES_FALLBACK),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveOpportunity { opportunity } => {
            tokio::spawn(async move {
                let msg = match service.save_new_opportunity(&opportunity).await {
                    Ok(created) => Message::SaveCompleted { created },
                    Err(err) => {
                        error!("Save failed: {err}");
                        Message::SaveFailed {
                            message: toast_message(&err, SAVE_FALLBACK),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}
