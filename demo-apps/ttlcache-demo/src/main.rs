mod config;

use anyhow::Result;
use config::DemoConfig;
use tokio::time::{interval, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttlcache_core::Cache;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttlcache_demo=info,ttlcache_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env()?;

    let cache = Cache::new();
    cache.set(config.key.clone(), config.value, config.ttl_seconds);

    tracing::info!("⏱️  TTL cache demo");
    tracing::info!("   Key: {} = {}", config.key, config.value);
    tracing::info!("   TTL: {}s, polling every {:?}", config.ttl_seconds, config.poll_interval);

    poll(&cache, &config).await;

    tracing::info!("Demo finished");
    Ok(())
}

/// Reads the demo key on every tick until Ctrl-C or `max_polls` reads
async fn poll(cache: &Cache<i64>, config: &DemoConfig) {
    let mut ticker = interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0u64;

    loop {
        if config.max_polls.is_some_and(|max| polls >= max) {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {
                polls += 1;
                match cache.get(&config.key) {
                    Some(value) => tracing::info!(poll = polls, "{} -> ({}, true)", config.key, value),
                    None => tracing::info!(poll = polls, "{} -> (None, false)", config.key),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl-C, stopping");
                break;
            }
        }
    }
}
