//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, provider client construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::places::{GooglePlacesClient, PlacesProvider};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback)
/// - Google Places client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The provider client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;

    let provider: Arc<dyn PlacesProvider> = Arc::new(
        GooglePlacesClient::new(
            &config.places_base_url,
            config.places_api_key.clone(),
            config.upstream_timeout(),
        )
        .context("Failed to build places client")?,
    );

    let state = AppState::new(provider, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to Redis when configured, degrading to [`NullCache`] otherwise.
///
/// Caching is an optimization, so a Redis outage at startup is not fatal.
async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    match &config.redis_url {
        Some(redis_url) => match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        },
        _ => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
