//! oppdeck - a terminal console for urgent-opportunity pipelines
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;

use oppdeck_api::RecordsClient;
use oppdeck_app::config::load_settings;
use oppdeck_core::prelude::*;

/// A terminal console for working an account's urgent opportunities
#[derive(Parser, Debug)]
#[command(name = "oppdeck")]
#[command(about = "Browse, search, and create urgent opportunities", long_about = None)]
struct Args {
    /// Account to work; overrides records.account_id from config
    #[arg(long, value_name = "ACCOUNT_ID")]
    account: Option<String>,

    /// Records service base URL; overrides api.base_url from config
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Directory to load .oppdeck/config.toml from (default: current dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    oppdeck_core::logging::init()?;

    let args = Args::parse();

    let base = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let mut settings = load_settings(&base);

    if let Some(endpoint) = args.endpoint {
        settings.api.base_url = endpoint;
    }

    let account_id = args
        .account
        .or_else(|| settings.records.account_id.clone())
        .ok_or(Error::NoAccount)?;

    info!(
        "Connecting to {} for account {}",
        settings.api.base_url, account_id
    );
    let client = RecordsClient::new(&settings.api.base_url, settings.api.auth_token.as_deref())?;

    oppdeck_tui::run(settings, account_id, client).await?;
    Ok(())
}
