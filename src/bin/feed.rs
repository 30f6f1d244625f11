// ============================================================================
// Wall Feed
// ============================================================================
//
// Terminal feed for the wall. Polls the server for the full message list,
// renders it, and posts lines read from stdin. `/delete <id>` removes a
// message. Exits on ctrl-c or end of input.
//
// ============================================================================

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wall_server::config::Config;
use wall_server::feed::{run_feed, FeedClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Feed connecting to {}", config.feed.server_url);

    let client =
        FeedClient::new(&config.feed.server_url).context("Failed to create feed client")?;
    let poll_interval = Duration::from_millis(config.feed.poll_interval_ms);

    run_feed(client, poll_interval).await
}
