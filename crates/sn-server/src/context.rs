//! Per-service application state.
//!
//! Each service gets its own context, shared across its route handlers via
//! Axum state. Both are cheaply cloneable because they only hold `Arc`s,
//! and every collaborator is passed in by the caller.

use std::sync::Arc;

use sn_db::MovieInfoStore;

use crate::lookup::PathLookup;
use crate::streamer::FileStreamer;

/// State for the catalog routes.
#[derive(Clone)]
pub struct CatalogContext {
    /// Movie-info record store.
    pub store: Arc<dyn MovieInfoStore>,
}

impl CatalogContext {
    pub fn new(store: Arc<dyn MovieInfoStore>) -> Self {
        Self { store }
    }
}

/// State for the streaming routes.
#[derive(Clone)]
pub struct StreamingContext {
    /// Serves files out of the configured video directory.
    pub streamer: Arc<FileStreamer>,
    /// Id-to-path resolution; `None` disables `/stream/with-id/{id}`.
    pub paths: Option<Arc<dyn PathLookup>>,
}

impl StreamingContext {
    pub fn new(streamer: FileStreamer, paths: Option<Arc<dyn PathLookup>>) -> Self {
        Self {
            streamer: Arc::new(streamer),
            paths,
        }
    }
}
