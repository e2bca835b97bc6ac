// Seed colleges into Supabase
//
// Usage: SUPABASE_URL=... SUPABASE_SERVICE_ROLE_KEY=... seed-colleges
// Reads data/colleges-seed.json relative to the working directory.
//
// Exit status is 0 once every batch has been attempted, even if some failed.
// Missing credentials, an unreadable fixture or any other error exit with 1.

use anyhow::{Context, Result};
use campusboard_seeder::{run, SeederConfig, SupabaseTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Credentials are checked before the fixture is opened
    let config =
        SeederConfig::from_env().context("Set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY in .env")?;
    tracing::debug!(?config, "Loaded configuration");

    let table = SupabaseTable::new(&config.supabase_url, &config.service_role_key, &config.table);

    let summary = run(&config, &table).await.context("Seed failed")?;

    if !summary.report.is_complete() {
        tracing::warn!(
            failed_batches = ?summary.report.failed_batches,
            "Some batches were not seeded; re-run to retry them"
        );
    }

    Ok(())
}
