//! # oppdeck-api - Remote Records Service Client
//!
//! Speaks HTTP/JSON to the records service that owns the urgent-opportunity
//! data. The service is an opaque external collaborator: this crate only
//! knows the four operations of its contract, not its storage or query
//! semantics.
//!
//! ## Public API
//!
//! - [`RecordService`] / [`LocalRecordService`] - the async trait seam the
//!   application layer is written against
//! - [`RecordsClient`] - the HTTP implementation
//!
//! The trait exists so the application's spawn layer can be exercised in
//! tests with a scripted in-memory service instead of a live endpoint.

pub mod client;
pub mod service;

pub use client::RecordsClient;
pub use service::{LocalRecordService, RecordService};
