//! New-opportunity form state
//!
//! Field edit buffers, focus, inline validation errors, and stage
//! selection. The draft only exists as typed text until submit-time
//! validation builds an [`OpportunityDraft`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use oppdeck_core::types::{OpportunityDraft, StageOption};
use oppdeck_core::validate::{validate_draft, FormField};

/// State of the modal creation form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Opportunity name edit buffer
    pub name: String,

    /// Amount edit buffer (validated as a number on submit)
    pub amount: String,

    /// Close date edit buffer, `YYYY-MM-DD`
    pub close_date: String,

    /// Index into the stage picklist; `None` until the user picks one
    pub stage_index: Option<usize>,

    /// Field that currently takes keystrokes
    pub focus: FormField,

    /// Inline validation messages, keyed by field
    pub errors: BTreeMap<FormField, String>,

    /// Whether a create request is in flight (blocks re-submit)
    pub submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            focus: FormField::Name,
            ..Self::default()
        }
    }

    /// The stage value the current selection resolves to ("" when none).
    pub fn stage_value<'a>(&self, options: &'a [StageOption]) -> &'a str {
        self.stage_index
            .and_then(|i| options.get(i))
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// The stage label for rendering ("" when none selected).
    pub fn stage_label<'a>(&self, options: &'a [StageOption]) -> &'a str {
        self.stage_index
            .and_then(|i| options.get(i))
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    /// Type a character into the focused buffer. The stage field is a
    /// selector, not a text input; typing there is ignored.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Amount => self.amount.push(c),
            FormField::CloseDate => self.close_date.push(c),
            FormField::Stage => {}
        }
        self.errors.remove(&self.focus);
    }

    /// Delete the last character of the focused buffer.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::CloseDate => {
                self.close_date.pop();
            }
            FormField::Stage => {}
        }
        self.errors.remove(&self.focus);
    }

    /// Select the next stage option (wraps).
    pub fn stage_next(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.stage_index = Some(match self.stage_index {
            Some(i) => (i + 1) % option_count,
            None => 0,
        });
        self.errors.remove(&FormField::Stage);
    }

    /// Select the previous stage option (wraps).
    pub fn stage_prev(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.stage_index = Some(match self.stage_index {
            Some(0) | None => option_count - 1,
            Some(i) => i - 1,
        });
        self.errors.remove(&FormField::Stage);
    }

    // ─────────────────────────────────────────────────────────
    // Submit
    // ─────────────────────────────────────────────────────────

    /// Validate every field against `today`.
    ///
    /// On failure, records an inline message for each failing field, moves
    /// focus to the first of them, and returns `None`. On success, clears
    /// the messages and returns the draft.
    pub fn validate(&mut self, options: &[StageOption], today: NaiveDate) -> Option<OpportunityDraft> {
        let stage_value = self.stage_value(options).to_string();
        match validate_draft(&self.name, &stage_value, &self.amount, &self.close_date, today) {
            Ok(draft) => {
                self.errors.clear();
                Some(draft)
            }
            Err(errors) => {
                // Errors arrive in field order; the first gets focus
                self.focus = errors[0].field;
                self.errors = errors
                    .into_iter()
                    .map(|e| (e.field, e.message))
                    .collect();
                None
            }
        }
    }

    /// Inline message for a field, if it failed the last submit.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
