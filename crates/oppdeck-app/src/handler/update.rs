//! Main update function - handles state transitions (TEA pattern)

use oppdeck_core::types::{AppPhase, Toast};
use tracing::warn;

use crate::message::Message;
use crate::state::AppState;

use super::{create, keys, table, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Table Messages
        // ─────────────────────────────────────────────────────────
        Message::Refresh => table::dispatch_load(state),

        Message::PageLoaded {
            generation,
            opportunities,
        } => table::handle_page_loaded(state, generation, opportunities),

        Message::PageLoadFailed {
            generation,
            message,
        } => table::handle_page_load_failed(state, generation, message),

        Message::CountLoaded { generation, total } => {
            table::handle_count_loaded(state, generation, total)
        }

        Message::CountLoadFailed {
            generation,
            message,
        } => table::handle_count_load_failed(state, generation, message),

        // ─────────────────────────────────────────────────────────
        // Stage Picklist Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadStageOptions => {
            if state.stage_options_loading {
                return UpdateResult::none();
            }
            state.stage_options_loading = true;
            UpdateResult::action(UpdateAction::LoadStageOptions)
        }

        Message::StageOptionsLoaded { options } => {
            state.stage_options_loading = false;
            state.stage_options = options;
            UpdateResult::none()
        }

        Message::StageOptionsLoadFailed { message } => {
            warn!("Stage picklist fetch failed: {}", message);
            state.stage_options_loading = false;
            state.stage_options = Vec::new();
            state.push_toast(Toast::error("Error", message));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Creation Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenNewOpportunity => {
            state.open_new_opportunity();
            // The picklist is fetched at startup; retry here if it never
            // arrived so the selector isn't permanently empty.
            if state.stage_options.is_empty() && !state.stage_options_loading {
                state.stage_options_loading = true;
                return UpdateResult::action(UpdateAction::LoadStageOptions);
            }
            UpdateResult::none()
        }

        Message::CancelNewOpportunity => {
            state.close_modal();
            UpdateResult::none()
        }

        Message::DraftSubmitted { draft } => create::handle_draft_submitted(state, draft),

        Message::SaveCompleted { created } => create::handle_save_completed(state, created),

        Message::SaveFailed { message } => create::handle_save_failed(state, message),
    }
}
