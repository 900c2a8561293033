//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use oppdeck_core::types::{Opportunity, OpportunityDraft, StageOption};

/// All possible messages/actions in the application.
///
/// Fetch results carry the `generation` of the page load that requested
/// them; results from a superseded generation are discarded by the handler
/// so a slow stale response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast TTL)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Table Messages
    // ─────────────────────────────────────────────────────────
    /// Dispatch a page load (rows + count) for the current page state
    Refresh,

    /// One page of rows arrived
    PageLoaded {
        generation: u64,
        opportunities: Vec<Opportunity>,
    },
    /// The row fetch failed
    PageLoadFailed { generation: u64, message: String },

    /// The total matching count arrived
    CountLoaded { generation: u64, total: u64 },
    /// The count fetch failed
    CountLoadFailed { generation: u64, message: String },

    // ─────────────────────────────────────────────────────────
    // Stage Picklist Messages
    // ─────────────────────────────────────────────────────────
    /// Request the stage picklist from the service
    LoadStageOptions,
    /// Stage picklist arrived
    StageOptionsLoaded { options: Vec<StageOption> },
    /// Stage picklist fetch failed
    StageOptionsLoadFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Creation Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Open the new-opportunity modal
    OpenNewOpportunity,
    /// Close the modal and discard the draft (the form's `cancel` event)
    CancelNewOpportunity,
    /// The form validated and produced a draft (the form's `save` event)
    DraftSubmitted { draft: OpportunityDraft },

    /// The create request resolved; `created` is the service's answer
    SaveCompleted { created: bool },
    /// The create request failed
    SaveFailed { message: String },
}
