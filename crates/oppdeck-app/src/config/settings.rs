//! Settings parser for .oppdeck/config.toml

use std::path::{Path, PathBuf};

use oppdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const OPPDECK_DIR: &str = ".oppdeck";

/// Load settings, first from `<base>/.oppdeck/config.toml`, then from the
/// per-user config dir, else defaults. A file that exists but fails to
/// parse is reported and skipped rather than aborting startup.
pub fn load_settings(base: &Path) -> Settings {
    let local = base.join(OPPDECK_DIR).join(CONFIG_FILENAME);
    if let Some(settings) = load_settings_from(&local) {
        info!("Loaded settings from {}", local.display());
        return settings;
    }

    if let Some(global) = global_config_path() {
        if let Some(settings) = load_settings_from(&global) {
            info!("Loaded settings from {}", global.display());
            return settings;
        }
    }

    debug!("No config file found, using defaults");
    Settings::default()
}

/// Parse one settings file. `None` when the file is absent or malformed.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Ignoring malformed config {}: {e}", path.display());
            None
        }
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("oppdeck").join(CONFIG_FILENAME))
}
