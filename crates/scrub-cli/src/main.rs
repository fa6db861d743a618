mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use scrub_db::{DbConfig, UserStore};
use scrub_log::RedactingFormatter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = config::Config::load(cli.config.as_deref())?;

    let fields = if cli.fields.is_empty() {
        config.redact.fields
    } else {
        cli.fields
    };

    // Logger first, and fail the process if it cannot be built: nothing may
    // be emitted before redaction is in place.
    let formatter =
        RedactingFormatter::with_config(&fields, &config.redact.redaction, &config.redact.separator)?;
    scrub_log::init(formatter)?;

    let db_config = DbConfig::from_env()?;
    let store = UserStore::connect(&db_config).await?;

    for row in store.fetch_users().await? {
        tracing::info!(target: "user_data", "{}", row.to_message());
    }

    store.close().await;
    Ok(())
}
