//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode
//! - `table`: Page load dispatch and fetch-result handlers
//! - `create`: Draft submission and create-result handlers

pub(crate) mod create;
pub(crate) mod keys;
pub(crate) mod table;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use oppdeck_core::types::NewOpportunity;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// Each action becomes one or more spawned tokio tasks in the spawn layer;
/// their outcomes come back as [`Message`]s.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch one page of rows and the matching count, concurrently.
    ///
    /// The two reads are independent: either may fail while the other
    /// succeeds, and no ordering between them is required.
    LoadPage {
        generation: u64,
        search_key: String,
        account_id: String,
        offset: u64,
        limit: u64,
    },

    /// Fetch the stage picklist
    LoadStageOptions,

    /// Create a new urgent opportunity
    SaveOpportunity { opportunity: NewOpportunity },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
