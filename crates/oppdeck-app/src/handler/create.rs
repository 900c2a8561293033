//! Create flow: draft submission and create-result handlers
//!
//! The create-then-refresh sequence is strictly ordered: the page reload is
//! only dispatched from the completion handler, never alongside the create.

use oppdeck_core::types::{NewOpportunity, OpportunityDraft, Toast};
use tracing::{error, info};

use crate::state::AppState;

use super::{table, UpdateAction, UpdateResult};

/// The form validated and produced a draft. Attach ownership, re-check
/// required fields (defense in depth), and issue the create request.
pub fn handle_draft_submitted(state: &mut AppState, draft: OpportunityDraft) -> UpdateResult {
    let opportunity = NewOpportunity::from_draft(draft, state.account_id.clone());

    if !opportunity.has_required_fields() {
        error!("Draft passed the form but is missing required fields: {opportunity:?}");
        state.push_toast(Toast::error(
            "Error",
            "Missing required fields for the opportunity.",
        ));
        return UpdateResult::none();
    }

    if let Some(form) = state.form.as_mut() {
        form.submitting = true;
    }
    UpdateResult::action(UpdateAction::SaveOpportunity { opportunity })
}

/// The create request resolved. Close the modal, toast the outcome, and
/// reload the current page.
pub fn handle_save_completed(state: &mut AppState, created: bool) -> UpdateResult {
    state.close_modal();
    if created {
        info!("New urgent opportunity created");
        state.push_toast(Toast::success("Success", "New urgent opportunity created!"));
    } else {
        state.push_toast(Toast::error(
            "Error",
            "Problem in creating urgent opportunity",
        ));
    }
    table::dispatch_load(state)
}

/// The create request failed. Keep the modal open with the draft intact so
/// nothing typed is lost, and surface the service's message.
pub fn handle_save_failed(state: &mut AppState, message: String) -> UpdateResult {
    error!("Save failed: {}", message);
    if let Some(form) = state.form.as_mut() {
        form.submitting = false;
    }
    state.push_toast(Toast::error("Error", message));
    UpdateResult::none()
}
