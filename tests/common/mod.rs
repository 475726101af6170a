//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory catalog store and a
//! temporary video directory, then starts each service's router on its own
//! random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use sn_core::MovieInfo;
use sn_db::pool::init_memory_pool;
use sn_db::{MovieInfoStore, SqliteMovieInfoStore};
use sn_server::context::{CatalogContext, StreamingContext};
use sn_server::lookup::{HttpCatalogClient, PathLookup, StorePathLookup};
use sn_server::router::{build_catalog_router, build_streaming_router};
use sn_server::streamer::FileStreamer;
use tempfile::TempDir;

/// Both services running on random ports over an in-memory store and a
/// temporary video directory.
pub struct TestHarness {
    pub store: Arc<dyn MovieInfoStore>,
    pub video_dir: TempDir,
    pub catalog_addr: SocketAddr,
    pub streaming_addr: SocketAddr,
}

impl TestHarness {
    /// Streaming resolves movie ids by reading the store in-process.
    pub async fn start() -> Self {
        let store = new_store();
        let video_dir = tempfile::tempdir().expect("failed to create video dir");
        let paths: Arc<dyn PathLookup> = Arc::new(StorePathLookup::new(store.clone()));

        Self::start_with(store, video_dir, Some(paths)).await
    }

    /// Streaming resolves movie ids over HTTP against the catalog server,
    /// as it does when the services run as separate processes.
    pub async fn start_remote() -> Self {
        let store = new_store();
        let video_dir = tempfile::tempdir().expect("failed to create video dir");

        let catalog_addr = spawn(build_catalog_router(CatalogContext::new(store.clone()))).await;
        let client = HttpCatalogClient::new(format!("http://{catalog_addr}"))
            .expect("failed to build catalog client");
        let streaming_ctx = StreamingContext::new(
            FileStreamer::new(video_dir.path()),
            Some(Arc::new(client) as Arc<dyn PathLookup>),
        );
        let streaming_addr = spawn(build_streaming_router(streaming_ctx)).await;

        Self {
            store,
            video_dir,
            catalog_addr,
            streaming_addr,
        }
    }

    /// Streaming has no catalog at all.
    pub async fn start_without_catalog() -> Self {
        Self::start_with(new_store(), tempfile::tempdir().unwrap(), None).await
    }

    async fn start_with(
        store: Arc<dyn MovieInfoStore>,
        video_dir: TempDir,
        paths: Option<Arc<dyn PathLookup>>,
    ) -> Self {
        let catalog_addr = spawn(build_catalog_router(CatalogContext::new(store.clone()))).await;
        let streaming_ctx = StreamingContext::new(FileStreamer::new(video_dir.path()), paths);
        let streaming_addr = spawn(build_streaming_router(streaming_ctx)).await;

        Self {
            store,
            video_dir,
            catalog_addr,
            streaming_addr,
        }
    }

    pub fn catalog_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.catalog_addr)
    }

    pub fn stream_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.streaming_addr)
    }

    /// Write a video file of `len` patterned bytes into the video directory.
    pub fn write_video(&self, name: &str, len: usize) -> Vec<u8> {
        let data: Vec<u8> = (0..=255u8).cycle().take(len).collect();
        let path = self.video_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, &data).unwrap();
        data
    }

    /// Save one catalog record directly through the store.
    pub fn add_movie(&self, name: &str, path: &str) -> MovieInfo {
        self.store
            .save_all(&[MovieInfo::new(name, path)])
            .expect("failed to save movie")
            .remove(0)
    }

    pub fn video_dir(&self) -> &Path {
        self.video_dir.path()
    }
}

fn new_store() -> Arc<dyn MovieInfoStore> {
    Arc::new(SqliteMovieInfoStore::new(
        init_memory_pool().expect("failed to create in-memory pool"),
    ))
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}
