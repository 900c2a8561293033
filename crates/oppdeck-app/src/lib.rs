//! oppdeck-app - Application state and orchestration for oppdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] enum, the
//! [`handler::update`] function, and the spawn layer that executes
//! [`UpdateAction`]s as background tokio tasks against the records service.

pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod spawn;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, TableState, ToastStack, UiMode};
