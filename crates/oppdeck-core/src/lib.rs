//! # oppdeck-core - Core Domain Types
//!
//! Foundation crate for oppdeck. Provides the domain types, error handling,
//! form validation, and pagination state shared by the service client, the
//! application state machine, and the terminal UI.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Opportunity`] - A persisted urgent-opportunity record (read copy)
//! - [`OpportunityDraft`] - The validated output of the creation form
//! - [`NewOpportunity`] - A draft plus owning account and urgent flag
//! - [`StageOption`] - One entry of the remote stage picklist
//! - [`Toast`], [`ToastVariant`] - Transient user notifications
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Pagination (`pagination`)
//! - [`PageState`] - Search key + offset + page size, with pure page
//!   derivations and offset clamping
//!
//! ### Validation (`validate`)
//! - [`validate_draft()`] - Field-ordered form validation producing a draft
//! - [`FormField`], [`FieldError`] - Field identity and inline messages
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use oppdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod pagination;
pub mod types;
pub mod validate;

/// Prelude for common imports used throughout all oppdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use pagination::PageState;
pub use types::{
    AppPhase, NewOpportunity, Opportunity, OpportunityDraft, StageOption, Toast, ToastVariant,
};
pub use validate::{validate_draft, FieldError, FormField};
