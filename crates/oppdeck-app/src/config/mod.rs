//! Configuration loading for oppdeck
//!
//! Settings come from `.oppdeck/config.toml` in the working directory,
//! falling back to the per-user config dir, falling back to defaults.

mod settings;
mod types;

pub use settings::{load_settings, load_settings_from};
pub use types::{ApiSettings, RecordSettings, Settings, UiSettings};
