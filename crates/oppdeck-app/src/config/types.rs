//! Settings type definitions

use serde::Deserialize;

use oppdeck_core::pagination::DEFAULT_PAGE_SIZE;

/// Application settings from config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub records: RecordSettings,
    pub ui: UiSettings,
}

/// Records service endpoint configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the records service
    pub base_url: String,

    /// Bearer token sent with every request, if the service requires one
    pub auth_token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8787/api".to_string(),
            auth_token: None,
        }
    }
}

/// Record-set configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordSettings {
    /// Owning account identifier (overridable with --account)
    pub account_id: Option<String>,

    /// Records per table page
    pub page_size: u64,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            account_id: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// UI behavior configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Toast lifetime in event-loop ticks (~50ms each)
    pub toast_ttl_ticks: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            // ~4 seconds at the 50ms poll cadence
            toast_ttl_ticks: 80,
        }
    }
}
