// Main entry point for the NHS Jobs watcher

use std::time::Duration;

use anyhow::{Context, Result};
use telegram::{TelegramOptions, TelegramService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watcher_core::config::Config;
use watcher_core::fanout::build_queries;
use watcher_core::fetcher::ListingFetcher;
use watcher_core::matcher::MatchCriteria;
use watcher_core::notifier::Notifier;
use watcher_core::pipeline::run_once;

/// Pause between pipeline passes
const CYCLE_DELAY: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,watcher_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NHS Jobs watcher");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        keywords = ?config.search_keywords,
        locations = ?config.search_locations,
        "Configuration loaded"
    );

    let fetcher = ListingFetcher::new().context("Failed to create fetcher")?;
    let queries = build_queries(&config.search_keywords, &config.search_locations);
    let criteria = MatchCriteria::new(config.target_titles, config.target_employers);

    let messenger = TelegramService::new(TelegramOptions {
        bot_token: config.telegram_token,
    });
    let mut notifier = Notifier::new(messenger, config.chat_id, config.admin_chat_id);

    loop {
        if let Err(e) = run_once(&fetcher, &queries, &criteria, &mut notifier).await {
            tracing::error!("Pipeline pass failed: {:#}", e);
        }

        tracing::info!(minutes = 15, "Sleeping until next check");
        tokio::time::sleep(CYCLE_DELAY).await;
    }
}
