//! sn-server: HTTP catalog and streaming services.
//!
//! This crate ties the store and the file streamer together into running
//! services. It provides:
//!
//! - The catalog API over a [`MovieInfoStore`](sn_db::MovieInfoStore)
//! - The streaming API over a [`FileStreamer`](streamer::FileStreamer)
//! - Service startup, either standalone or both in one process
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod lookup;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod streamer;

use std::sync::Arc;

use axum::Router;
use sn_core::config::{CatalogConfig, Config, StreamingConfig};
use sn_db::{MovieInfoStore, SqliteMovieInfoStore};
use tokio_util::sync::CancellationToken;

use crate::context::{CatalogContext, StreamingContext};
use crate::lookup::{HttpCatalogClient, PathLookup, StorePathLookup};
use crate::streamer::FileStreamer;

/// Which services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Services {
    Catalog,
    Streaming,
    /// Both in one process; streaming reads the store in-process. They get
    /// one listener when configured on the same address, two otherwise.
    Both,
}

/// Start the requested services and run until a shutdown signal arrives.
pub async fn start(config: Config, services: Services) -> sn_core::Result<()> {
    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone()));
    run(config, services, cancel).await
}

/// Run the requested services until `cancel` fires.
pub async fn run(
    config: Config,
    services: Services,
    cancel: CancellationToken,
) -> sn_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    match services {
        Services::Catalog => {
            let store = open_store(&config.catalog)?;
            let app = router::build_catalog_router(CatalogContext::new(store));
            serve("catalog", &config.catalog.host, config.catalog.port, app, cancel).await?;
        }
        Services::Streaming => {
            let paths = match config.streaming.catalog_url {
                Some(ref url) => {
                    tracing::info!("Resolving movie ids via catalog at {url}");
                    Some(Arc::new(HttpCatalogClient::new(url.clone())?) as Arc<dyn PathLookup>)
                }
                None => {
                    tracing::info!("No catalog_url configured; /stream/with-id is disabled");
                    None
                }
            };
            let app = router::build_streaming_router(streaming_context(&config.streaming, paths));
            serve(
                "streaming",
                &config.streaming.host,
                config.streaming.port,
                app,
                cancel,
            )
            .await?;
        }
        Services::Both => {
            let store = open_store(&config.catalog)?;
            let paths: Arc<dyn PathLookup> = Arc::new(StorePathLookup::new(store.clone()));
            let catalog = CatalogContext::new(store);
            let streaming = streaming_context(&config.streaming, Some(paths));

            if config.shares_address() {
                let app = router::build_combined_router(catalog, streaming);
                serve(
                    "catalog+streaming",
                    &config.catalog.host,
                    config.catalog.port,
                    app,
                    cancel,
                )
                .await?;
            } else {
                let catalog_app = router::build_catalog_router(catalog);
                let streaming_app = router::build_streaming_router(streaming);

                tokio::try_join!(
                    serve(
                        "catalog",
                        &config.catalog.host,
                        config.catalog.port,
                        catalog_app,
                        cancel.clone(),
                    ),
                    serve(
                        "streaming",
                        &config.streaming.host,
                        config.streaming.port,
                        streaming_app,
                        cancel.clone(),
                    ),
                )?;
            }
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Open (creating if needed) the SQLite catalog database.
pub fn open_store(config: &CatalogConfig) -> sn_core::Result<Arc<dyn MovieInfoStore>> {
    let db_path = &config.db_path;
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }

    let db_str = db_path.to_string_lossy();
    let pool = sn_db::pool::init_pool(&db_str)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }

    Ok(Arc::new(SqliteMovieInfoStore::new(pool)))
}

/// Build the streaming context from config, with an optional id lookup.
pub fn streaming_context(
    config: &StreamingConfig,
    paths: Option<Arc<dyn PathLookup>>,
) -> StreamingContext {
    if config.video_dir.is_dir() {
        tracing::info!("Serving videos from {}", config.video_dir.display());
    } else {
        tracing::warn!(
            "Video directory {} does not exist; every stream request will 404",
            config.video_dir.display()
        );
    }
    StreamingContext::new(FileStreamer::new(config.video_dir.clone()), paths)
}

/// Bind `host:port` and serve `app` until `cancel` fires.
pub async fn serve(
    name: &str,
    host: &str,
    port: u16,
    app: Router,
    cancel: CancellationToken,
) -> sn_core::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| sn_core::Error::Internal(format!("Failed to bind to {host}:{port}: {e}")))?;

    tracing::info!("Starting {name} service on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!("{name} service stopped");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM), then cancel `cancel`.
async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
        _ = cancel.cancelled() => {}
    }

    tracing::info!("Shutdown signal received");
    cancel.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_store_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            db_path: dir.path().join("nested/catalog.db"),
            ..CatalogConfig::default()
        };

        let store = open_store(&config).unwrap();
        assert!(config.db_path.exists());
        assert!(store.find_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn serve_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(serve(
            "test",
            "127.0.0.1",
            0,
            Router::new(),
            cancel.clone(),
        ));
        cancel.cancel();
        handle.await.unwrap().unwrap();
    }
}
