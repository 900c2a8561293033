//! Key event handlers per UI mode

use chrono::Local;

use oppdeck_core::validate::FormField;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Route a key press to the active mode's handler.
///
/// Mutates state directly for local edits (buffers, focus, paging) and
/// returns a follow-up [`Message`] when the press triggers a flow (fetch,
/// submit, quit).
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Table => handle_table_key(state, key),
        UiMode::Search => handle_search_key(state, key),
        UiMode::NewOpportunity => handle_form_key(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table mode
// ─────────────────────────────────────────────────────────────────────────────

fn handle_table_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Char('n') => Some(Message::OpenNewOpportunity),

        InputKey::Char('r') => Some(Message::Refresh),

        InputKey::Char('/') => {
            state.ui_mode = UiMode::Search;
            None
        }

        // Previous/next page, clamped at the bounds: no-op presses at the
        // edges don't refetch.
        InputKey::Left | InputKey::Char('h') => {
            state.page.previous().then_some(Message::Refresh)
        }
        InputKey::Right | InputKey::Char('l') => state
            .page
            .next(state.table.total_records)
            .then_some(Message::Refresh),

        // Direct page selection from the strip
        InputKey::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).unwrap_or(1) as u64;
            state
                .page
                .goto_page(page, state.table.total_records)
                .then_some(Message::Refresh)
        }
        InputKey::Home => state
            .page
            .goto_page(1, state.table.total_records)
            .then_some(Message::Refresh),
        InputKey::End => {
            let last = state.page.total_pages(state.table.total_records);
            state
                .page
                .goto_page(last, state.table.total_records)
                .then_some(Message::Refresh)
        }

        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search mode
// ─────────────────────────────────────────────────────────────────────────────

/// Every edit rewinds to the first page and refetches, so the table tracks
/// the filter keystroke by keystroke.
fn handle_search_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        // Esc clears the filter
        InputKey::Esc => {
            state.ui_mode = UiMode::Table;
            if state.page.search_key.is_empty() {
                return None;
            }
            state.page.set_search_key("");
            Some(Message::Refresh)
        }

        // Enter keeps the filter and leaves input mode
        InputKey::Enter => {
            state.ui_mode = UiMode::Table;
            None
        }

        InputKey::Backspace => {
            if state.page.search_key.pop().is_none() {
                return None;
            }
            state.page.offset = 0;
            Some(Message::Refresh)
        }

        InputKey::Char(c) => {
            state.page.search_key.push(c);
            state.page.offset = 0;
            Some(Message::Refresh)
        }

        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// New-opportunity modal
// ─────────────────────────────────────────────────────────────────────────────

fn handle_form_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Cloned up front: the form borrow below locks out the rest of state
    let options = state.stage_options.clone();
    let option_count = options.len();
    let form = state.form.as_mut()?;

    match key {
        InputKey::Esc => Some(Message::CancelNewOpportunity),

        InputKey::Enter => {
            if form.submitting {
                return None;
            }
            let today = Local::now().date_naive();
            form.validate(&options, today)
                .map(|draft| Message::DraftSubmitted { draft })
        }

        InputKey::Tab => {
            form.focus_next();
            None
        }
        InputKey::BackTab => {
            form.focus_prev();
            None
        }

        // In the stage selector Up/Down pick an option; elsewhere they move
        // focus like Tab/BackTab.
        InputKey::Down => {
            if form.focus == FormField::Stage {
                form.stage_next(option_count);
            } else {
                form.focus_next();
            }
            None
        }
        InputKey::Up => {
            if form.focus == FormField::Stage {
                form.stage_prev(option_count);
            } else {
                form.focus_prev();
            }
            None
        }

        InputKey::Backspace => {
            form.backspace();
            None
        }

        InputKey::Char(c) => {
            form.input_char(c);
            None
        }

        _ => None,
    }
}
