//! Handler tests - update() state transitions

use chrono::NaiveDate;

use oppdeck_core::types::{Opportunity, OpportunityDraft, StageOption, ToastVariant};

use crate::config::Settings;
use crate::handler::{update, UpdateAction, UpdateResult};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

fn state() -> AppState {
    AppState::new(Settings::default(), "001A")
}

fn opp(id: &str, name: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        name: name.to_string(),
        stage_name: "Prospecting".to_string(),
        amount: 1000.0,
        close_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
        account_id: "001A".to_string(),
        urgent: true,
    }
}

fn stages() -> Vec<StageOption> {
    vec![
        StageOption::new("Prospecting", "Prospecting"),
        StageOption::new("Negotiation", "Negotiation"),
    ]
}

fn draft() -> OpportunityDraft {
    OpportunityDraft {
        name: "Renewal - Acme".to_string(),
        stage_name: "Negotiation".to_string(),
        amount: 100.0,
        close_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
    }
}

/// Feed a message and every follow-up message through update, collecting
/// the actions produced along the way.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let UpdateResult { message, action } = update(state, m);
        if let Some(action) = action {
            actions.push(action);
        }
        msg = message;
    }
    actions
}

fn error_toast_count(state: &AppState) -> usize {
    state
        .toasts
        .iter()
        .filter(|t| t.variant == ToastVariant::Error)
        .count()
}

// ─────────────────────────────────────────────────────────
// Page load dispatch
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_dispatches_page_load() {
    let mut state = state();
    let actions = drive(&mut state, Message::Refresh);

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::LoadPage {
            generation,
            search_key,
            account_id,
            offset,
            limit,
        } => {
            assert_eq!(*generation, 1);
            assert_eq!(search_key, "");
            assert_eq!(account_id, "001A");
            assert_eq!(*offset, 0);
            assert_eq!(*limit, 5);
        }
        other => panic!("expected LoadPage, got {other:?}"),
    }
    assert!(state.table.loading);
}

#[test]
fn test_each_refresh_bumps_generation() {
    let mut state = state();
    drive(&mut state, Message::Refresh);
    drive(&mut state, Message::Refresh);
    assert_eq!(state.table.generation, 2);
}

#[test]
fn test_page_loaded_stores_rows() {
    let mut state = state();
    drive(&mut state, Message::Refresh);

    drive(
        &mut state,
        Message::PageLoaded {
            generation: 1,
            opportunities: vec![opp("006A", "First"), opp("006B", "Second")],
        },
    );
    assert_eq!(state.table.opportunities.len(), 2);
    assert!(!state.table.loading);
}

#[test]
fn test_stale_page_result_discarded() {
    let mut state = state();
    drive(&mut state, Message::Refresh); // generation 1
    drive(&mut state, Message::Refresh); // generation 2

    // The older response arrives late
    drive(
        &mut state,
        Message::PageLoaded {
            generation: 1,
            opportunities: vec![opp("006A", "Stale")],
        },
    );
    assert!(state.table.opportunities.is_empty());
    assert!(state.table.loading);

    // The current one lands
    drive(
        &mut state,
        Message::PageLoaded {
            generation: 2,
            opportunities: vec![opp("006B", "Fresh")],
        },
    );
    assert_eq!(state.table.opportunities[0].name, "Fresh");
}

#[test]
fn test_stale_error_discarded_without_toast() {
    let mut state = state();
    drive(&mut state, Message::Refresh);
    drive(&mut state, Message::Refresh);

    drive(
        &mut state,
        Message::PageLoadFailed {
            generation: 1,
            message: "old failure".to_string(),
        },
    );
    assert_eq!(error_toast_count(&state), 0);
}

#[test]
fn test_page_load_failure_empties_rows_and_toasts_exactly_once() {
    let mut state = state();
    drive(&mut state, Message::Refresh);
    state.table.opportunities = vec![opp("006A", "Old")];

    drive(
        &mut state,
        Message::PageLoadFailed {
            generation: 1,
            message: "Failed to fetch urgent opportunities.".to_string(),
        },
    );
    assert!(state.table.opportunities.is_empty());
    assert!(!state.table.loading);
    assert_eq!(error_toast_count(&state), 1);
}

#[test]
fn test_count_loaded_marks_pagination_ready() {
    let mut state = state();
    drive(&mut state, Message::Refresh);
    assert!(!state.table.pagination_ready);

    drive(
        &mut state,
        Message::CountLoaded {
            generation: 1,
            total: 12,
        },
    );
    assert!(state.table.pagination_ready);
    assert_eq!(state.table.total_records, 12);
}

#[test]
fn test_count_failure_zeroes_but_stays_ready() {
    let mut state = state();
    drive(&mut state, Message::Refresh);
    state.table.total_records = 12;

    drive(
        &mut state,
        Message::CountLoadFailed {
            generation: 1,
            message: "Failed to fetch the total record count.".to_string(),
        },
    );
    assert_eq!(state.table.total_records, 0);
    assert!(state.table.pagination_ready);
    assert_eq!(error_toast_count(&state), 1);
}

#[test]
fn test_rows_and_count_fail_independently() {
    let mut state = state();
    drive(&mut state, Message::Refresh);

    // Rows land, count fails - partial failure is allowed
    drive(
        &mut state,
        Message::PageLoaded {
            generation: 1,
            opportunities: vec![opp("006A", "First")],
        },
    );
    drive(
        &mut state,
        Message::CountLoadFailed {
            generation: 1,
            message: "count down".to_string(),
        },
    );
    assert_eq!(state.table.opportunities.len(), 1);
    assert_eq!(state.table.total_records, 0);
    assert_eq!(error_toast_count(&state), 1);
}

#[test]
fn test_count_shrink_clamps_offset_and_reloads() {
    let mut state = state();
    state.table.pagination_ready = true;
    state.table.total_records = 12;
    state.page.offset = 10; // page 3
    drive(&mut state, Message::Refresh); // generation 1, offset still valid

    // The shrunken count arrives for the current generation
    let actions = drive(
        &mut state,
        Message::CountLoaded {
            generation: 1,
            total: 7,
        },
    );
    assert_eq!(state.page.offset, 5);
    // A reload was dispatched with the clamped window
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::LoadPage { offset: 5, .. }]
    ));
    assert_eq!(state.table.generation, 2);
}

// ─────────────────────────────────────────────────────────
// Pagination keys
// ─────────────────────────────────────────────────────────

fn ready_state(total: u64) -> AppState {
    let mut state = state();
    state.table.total_records = total;
    state.table.pagination_ready = true;
    state
}

#[test]
fn test_next_page_key_advances_and_refetches() {
    let mut state = ready_state(12);
    let actions = drive(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.page.offset, 5);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::LoadPage { offset: 5, .. }]
    ));
}

#[test]
fn test_next_key_noop_on_last_page() {
    let mut state = ready_state(12);
    state.page.offset = 10;
    let actions = drive(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.page.offset, 10);
    assert!(actions.is_empty());
}

#[test]
fn test_previous_key_noop_on_first_page() {
    let mut state = ready_state(12);
    let actions = drive(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.page.offset, 0);
    assert!(actions.is_empty());
}

#[test]
fn test_digit_key_jumps_to_page() {
    let mut state = ready_state(12);
    let actions = drive(&mut state, Message::Key(InputKey::Char('3')));
    assert_eq!(state.page.offset, 10);
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_search_edit_resets_offset_and_refetches() {
    let mut state = ready_state(12);
    state.page.offset = 10;

    drive(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.ui_mode, UiMode::Search);

    let actions = drive(&mut state, Message::Key(InputKey::Char('a')));
    assert_eq!(state.page.search_key, "a");
    assert_eq!(state.page.offset, 0);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::LoadPage { offset: 0, .. }]
    ));
}

#[test]
fn test_search_escape_clears_filter() {
    let mut state = ready_state(12);
    drive(&mut state, Message::Key(InputKey::Char('/')));
    drive(&mut state, Message::Key(InputKey::Char('a')));

    let actions = drive(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Table);
    assert!(state.page.search_key.is_empty());
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_search_enter_keeps_filter() {
    let mut state = ready_state(12);
    drive(&mut state, Message::Key(InputKey::Char('/')));
    drive(&mut state, Message::Key(InputKey::Char('a')));

    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.ui_mode, UiMode::Table);
    assert_eq!(state.page.search_key, "a");
    assert!(actions.is_empty());
}

// ─────────────────────────────────────────────────────────
// Stage picklist
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_modal_requests_stage_options_when_missing() {
    let mut state = state();
    let actions = drive(&mut state, Message::OpenNewOpportunity);
    assert!(state.is_modal_open());
    assert!(state.stage_options_loading);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::LoadStageOptions]
    ));
}

#[test]
fn test_open_modal_skips_fetch_when_options_present() {
    let mut state = state();
    state.stage_options = stages();
    let actions = drive(&mut state, Message::OpenNewOpportunity);
    assert!(actions.is_empty());
}

#[test]
fn test_stage_options_loaded() {
    let mut state = state();
    drive(&mut state, Message::LoadStageOptions);
    drive(
        &mut state,
        Message::StageOptionsLoaded { options: stages() },
    );
    assert!(!state.stage_options_loading);
    assert_eq!(state.stage_options.len(), 2);
}

#[test]
fn test_stage_options_failure_toasts() {
    let mut state = state();
    drive(&mut state, Message::LoadStageOptions);
    drive(
        &mut state,
        Message::StageOptionsLoadFailed {
            message: "picklist unavailable".to_string(),
        },
    );
    assert!(!state.stage_options_loading);
    assert_eq!(error_toast_count(&state), 1);
}

#[test]
fn test_duplicate_stage_fetch_suppressed() {
    let mut state = state();
    let first = drive(&mut state, Message::LoadStageOptions);
    let second = drive(&mut state, Message::LoadStageOptions);
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

// ─────────────────────────────────────────────────────────
// Create flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_cancel_discards_draft() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    state.form.as_mut().unwrap().name = "half-typed".to_string();

    drive(&mut state, Message::CancelNewOpportunity);
    assert!(!state.is_modal_open());
}

#[test]
fn test_draft_submitted_dispatches_save_with_ownership() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);

    let actions = drive(&mut state, Message::DraftSubmitted { draft: draft() });
    match &actions[0] {
        UpdateAction::SaveOpportunity { opportunity } => {
            assert_eq!(opportunity.account_id, "001A");
            assert!(opportunity.urgent);
            assert_eq!(opportunity.name, "Renewal - Acme");
        }
        other => panic!("expected SaveOpportunity, got {other:?}"),
    }
    assert!(state.form.as_ref().unwrap().submitting);
}

#[test]
fn test_degenerate_draft_blocked_with_toast() {
    let mut state = state();
    drive(&mut state, Message::OpenNewOpportunity);

    let mut bad = draft();
    bad.name = String::new();
    let actions = drive(&mut state, Message::DraftSubmitted { draft: bad });
    assert!(actions.is_empty());
    assert_eq!(error_toast_count(&state), 1);
    // Modal stays open for correction
    assert!(state.is_modal_open());
}

#[test]
fn test_save_completed_closes_modal_and_reloads() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    drive(&mut state, Message::DraftSubmitted { draft: draft() });

    let actions = drive(&mut state, Message::SaveCompleted { created: true });
    assert!(!state.is_modal_open());
    assert!(state
        .toasts
        .iter()
        .any(|t| t.variant == ToastVariant::Success));
    // The refresh is dispatched only after the create resolved
    assert!(matches!(actions.as_slice(), [UpdateAction::LoadPage { .. }]));
}

#[test]
fn test_save_completed_false_closes_modal_with_error() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    drive(&mut state, Message::DraftSubmitted { draft: draft() });

    let actions = drive(&mut state, Message::SaveCompleted { created: false });
    assert!(!state.is_modal_open());
    assert_eq!(error_toast_count(&state), 1);
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_save_failed_keeps_modal_open_with_draft() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    state.form.as_mut().unwrap().name = "Renewal - Acme".to_string();
    drive(&mut state, Message::DraftSubmitted { draft: draft() });

    drive(
        &mut state,
        Message::SaveFailed {
            message: "Close Date must be in the current quarter".to_string(),
        },
    );
    let form = state.form.as_ref().expect("modal should stay open");
    assert!(!form.submitting);
    assert_eq!(form.name, "Renewal - Acme");
    assert!(state
        .toasts
        .iter()
        .any(|t| t.message.contains("current quarter")));
}

// ─────────────────────────────────────────────────────────
// Form keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_submits_valid_form() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    {
        let form = state.form.as_mut().unwrap();
        form.name = "Renewal - Acme".to_string();
        form.stage_index = Some(0);
        form.amount = "100".to_string();
        form.close_date = "2099-12-31".to_string();
    }

    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    // Valid form: submit flowed through DraftSubmitted into a save action
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SaveOpportunity { .. }]
    ));
}

#[test]
fn test_enter_blocks_invalid_form() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);

    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    assert!(actions.is_empty());
    assert!(state.is_modal_open());
    assert!(!state.form.as_ref().unwrap().errors.is_empty());
}

#[test]
fn test_modal_escape_cancels() {
    let mut state = state();
    state.stage_options = stages();
    drive(&mut state, Message::OpenNewOpportunity);
    drive(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.is_modal_open());
    assert_eq!(state.ui_mode, UiMode::Table);
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message() {
    let mut state = state();
    drive(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_modal() {
    let mut state = state();
    drive(&mut state, Message::OpenNewOpportunity);
    drive(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_tick_expires_toasts() {
    let mut state = state();
    state.settings.ui.toast_ttl_ticks = 2;
    state.toasts = crate::state::ToastStack::new(2);
    state.push_toast(oppdeck_core::types::Toast::info("T", "m"));

    drive(&mut state, Message::Tick);
    assert_eq!(state.toasts.len(), 1);
    drive(&mut state, Message::Tick);
    assert!(state.toasts.is_empty());
}
