//! Pokedex - An interactive PokeAPI client
//!
//! Browses location areas, catches Pokemon into an in-memory Pokedex, and
//! caches raw API responses in a time-bounded cache with background reaping.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::Repl;
use pokedex::{Cache, CommandRegistry, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client, session and command registry
/// 5. Run the REPL until `exit` or end of input
/// 6. Shut the cache down so the reaper exits cleanly
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs do not interleave with REPL output;
    // override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, http_timeout={}s, page_size={}",
        config.base_url, config.cache_interval, config.http_timeout, config.page_size
    );

    let cache = Arc::new(Cache::new(config.cache_interval()));
    info!("Response cache initialized");

    let client = PokeApiClient::from_config(&config, Arc::clone(&cache))
        .context("failed to build HTTP client")?;
    let session = Session::new(client, config.page_size);
    let registry = CommandRegistry::new();

    let repl = Repl::new(&registry, session).context("failed to start line editor")?;
    let session = repl.run().await?;

    // Release every other handle so the cache can be shut down by value.
    drop(session);
    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.shutdown().await,
        Err(_) => info!("Cache still shared at exit; reaper stops when it is dropped"),
    }

    info!("Pokedex shutdown complete");
    Ok(())
}
