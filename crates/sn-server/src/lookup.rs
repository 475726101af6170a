//! Movie-id to file-path resolution for `/stream/with-id/{id}`.
//!
//! When both services run in one process the streaming side reads the
//! store directly ([`StorePathLookup`]). Run separately, it asks the
//! catalog service over HTTP ([`HttpCatalogClient`]).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use sn_core::{Error, MovieInfoId, Result};
use sn_db::MovieInfoStore;

const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a movie id to the relative path of its video file.
#[async_trait]
pub trait PathLookup: Send + Sync {
    async fn find_path(&self, id: MovieInfoId) -> Result<Option<String>>;
}

/// Lookup against an in-process [`MovieInfoStore`].
pub struct StorePathLookup {
    store: Arc<dyn MovieInfoStore>,
}

impl StorePathLookup {
    pub fn new(store: Arc<dyn MovieInfoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PathLookup for StorePathLookup {
    async fn find_path(&self, id: MovieInfoId) -> Result<Option<String>> {
        self.store.find_path_by_id(id)
    }
}

/// Lookup via the catalog service's `find-path-by-id` endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(CATALOG_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PathLookup for HttpCatalogClient {
    async fn find_path(&self, id: MovieInfoId) -> Result<Option<String>> {
        let url = format!("{}/movie-info/find-path-by-id/{id}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("catalog request failed: {e}")))?;

        match resp.status() {
            StatusCode::OK => {
                let path = resp
                    .text()
                    .await
                    .map_err(|e| Error::Upstream(format!("catalog response unreadable: {e}")))?;
                if path.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(path))
                }
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                tracing::warn!(%url, %status, "Catalog lookup failed");
                Err(Error::Upstream(format!("catalog returned {status}")))
            }
        }
    }
}
