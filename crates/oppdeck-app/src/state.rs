//! Application state (Model in TEA pattern)

use oppdeck_core::pagination::PageState;
use oppdeck_core::types::{AppPhase, Opportunity, StageOption, Toast};

use crate::config::Settings;
use crate::form::FormState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal table view with pagination strip
    #[default]
    Table,

    /// Search input mode - keystrokes edit the search filter
    Search,

    /// New-opportunity modal is open
    NewOpportunity,
}

/// Fetched table data plus the in-flight bookkeeping for it.
///
/// `generation` identifies the newest dispatched page load. Row and count
/// results are tagged with the generation that requested them and dropped
/// when a newer load has been dispatched since.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Read copies of the current page's records
    pub opportunities: Vec<Opportunity>,

    /// Total records matching the current search
    pub total_records: u64,

    /// Whether a count has arrived (or failed) so the strip can render
    pub pagination_ready: bool,

    /// Whether a row fetch for the current generation is in flight
    pub loading: bool,

    /// Generation of the newest dispatched page load
    pub generation: u64,
}

impl TableState {
    /// Bump and return the generation for a new page load.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a result tagged `generation` belongs to the newest load.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Maximum number of toasts kept on screen at once.
const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    remaining_ticks: u16,
}

/// Transient notifications with a tick-driven time to live.
///
/// The event loop ticks roughly every 50ms when idle; each toast lives
/// `ttl_ticks` ticks and then drops off.
#[derive(Debug, Clone)]
pub struct ToastStack {
    entries: Vec<ActiveToast>,
    ttl_ticks: u16,
}

impl ToastStack {
    pub fn new(ttl_ticks: u16) -> Self {
        Self {
            entries: Vec::new(),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    /// Push a toast, dropping the oldest when the stack is full.
    pub fn push(&mut self, toast: Toast) {
        if self.entries.len() >= MAX_VISIBLE_TOASTS {
            self.entries.remove(0);
        }
        self.entries.push(ActiveToast {
            toast,
            remaining_ticks: self.ttl_ticks,
        });
    }

    /// Advance TTLs and drop expired toasts.
    pub fn tick(&mut self) {
        for entry in &mut self.entries {
            entry.remaining_ticks = entry.remaining_ticks.saturating_sub(1);
        }
        self.entries.retain(|e| e.remaining_ticks > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|e| &e.toast)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase (used for quitting)
    pub phase: AppPhase,

    /// Owning account identifier all fetches/creates are keyed by
    pub account_id: String,

    /// Application settings from config file
    pub settings: Settings,

    /// Search filter + offset window
    pub page: PageState,

    /// Fetched rows, count, and in-flight bookkeeping
    pub table: TableState,

    /// New-opportunity form state; `Some` while the modal is open
    pub form: Option<FormState>,

    /// Stage picklist fetched from the service
    pub stage_options: Vec<StageOption>,

    /// Whether a stage picklist fetch is in flight
    pub stage_options_loading: bool,

    /// Transient notifications
    pub toasts: ToastStack,
}

impl AppState {
    pub fn new(settings: Settings, account_id: impl Into<String>) -> Self {
        let page = PageState::new(settings.records.page_size);
        let toasts = ToastStack::new(settings.ui.toast_ttl_ticks);
        Self {
            ui_mode: UiMode::Table,
            phase: AppPhase::Running,
            account_id: account_id.into(),
            settings,
            page,
            table: TableState::default(),
            form: None,
            stage_options: Vec::new(),
            stage_options_loading: false,
            toasts,
        }
    }

    // ─────────────────────────────────────────────────────────
    // UI Mode Helpers
    // ─────────────────────────────────────────────────────────

    /// Open the new-opportunity modal with a fresh, empty draft.
    pub fn open_new_opportunity(&mut self) {
        self.form = Some(FormState::new());
        self.ui_mode = UiMode::NewOpportunity;
    }

    /// Close the modal and discard whatever was typed.
    pub fn close_modal(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Table;
    }

    pub fn is_modal_open(&self) -> bool {
        self.form.is_some()
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
