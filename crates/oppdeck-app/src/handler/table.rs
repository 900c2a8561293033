//! Page load dispatch and fetch-result handlers
//!
//! The two reads of a page load (rows, count) run concurrently and resolve
//! independently; each result is tagged with the generation of the load
//! that requested it. Anything tagged with a superseded generation is
//! dropped here, so rapid search/page changes can never be overwritten by
//! a slow stale response.

use oppdeck_core::types::{Opportunity, Toast};
use tracing::debug;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Dispatch a page load (rows + count) for the current page state.
///
/// Clamps a stranded offset first (the count may have shrunk since the
/// last fetch), then bumps the generation so in-flight results from older
/// loads become stale.
pub fn dispatch_load(state: &mut AppState) -> UpdateResult {
    if state.table.pagination_ready {
        state.page.clamp_to(state.table.total_records);
    }

    let generation = state.table.next_generation();
    state.table.loading = true;

    UpdateResult::action(UpdateAction::LoadPage {
        generation,
        search_key: state.page.search_key.clone(),
        account_id: state.account_id.clone(),
        offset: state.page.offset,
        limit: state.page.page_size,
    })
}

pub fn handle_page_loaded(
    state: &mut AppState,
    generation: u64,
    opportunities: Vec<Opportunity>,
) -> UpdateResult {
    if !state.table.is_current(generation) {
        debug!(generation, "Dropping stale page result");
        return UpdateResult::none();
    }
    state.table.opportunities = opportunities;
    state.table.loading = false;
    UpdateResult::none()
}

pub fn handle_page_load_failed(
    state: &mut AppState,
    generation: u64,
    message: String,
) -> UpdateResult {
    if !state.table.is_current(generation) {
        debug!(generation, "Dropping stale page error");
        return UpdateResult::none();
    }
    state.table.opportunities = Vec::new();
    state.table.loading = false;
    state.push_toast(Toast::error("Error", message));
    UpdateResult::none()
}

pub fn handle_count_loaded(state: &mut AppState, generation: u64, total: u64) -> UpdateResult {
    if !state.table.is_current(generation) {
        debug!(generation, "Dropping stale count result");
        return UpdateResult::none();
    }
    state.table.total_records = total;
    state.table.pagination_ready = true;

    // The count can shrink below the current window (records closed or
    // reassigned elsewhere). Snap back to the last page and reload rows.
    if state.page.clamp_to(total) {
        debug!(offset = state.page.offset, total, "Offset clamped after count shrink");
        return dispatch_load(state);
    }
    UpdateResult::none()
}

pub fn handle_count_load_failed(
    state: &mut AppState,
    generation: u64,
    message: String,
) -> UpdateResult {
    if !state.table.is_current(generation) {
        debug!(generation, "Dropping stale count error");
        return UpdateResult::none();
    }
    state.table.total_records = 0;
    // Pagination still renders (as empty) rather than spinning forever
    state.table.pagination_ready = true;
    state.push_toast(Toast::error("Error", message));
    UpdateResult::none()
}
