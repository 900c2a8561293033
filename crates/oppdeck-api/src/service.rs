//! The records-service trait seam

use oppdeck_core::error::Result;
use oppdeck_core::types::{NewOpportunity, Opportunity, StageOption};

/// Remote operations over urgent-opportunity records.
///
/// `RecordService` is the `Send` variant used by spawned tasks;
/// `LocalRecordService` is the single-threaded variant.
#[trait_variant::make(RecordService: Send)]
pub trait LocalRecordService {
    /// Fetch one page of urgent opportunities for the account, filtered by
    /// the search key. `offset`/`limit` window the matching set.
    async fn fetch_urgent_opportunities(
        &self,
        search_key: &str,
        account_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Opportunity>>;

    /// Total number of records matching the search key for the account.
    async fn fetch_total_record_count(&self, search_key: &str, account_id: &str) -> Result<u64>;

    /// Persist a new urgent opportunity. The service answers `true` when the
    /// record was created.
    async fn save_new_opportunity(&self, opportunity: &NewOpportunity) -> Result<bool>;

    /// The stage picklist for the opportunity object.
    async fn fetch_stage_options(&self) -> Result<Vec<StageOption>>;
}
