//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! settings for the catalog and streaming services. Every section defaults
//! sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub streaming: StreamingConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file, failing if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Whether both services are configured on the same fixed host and port.
    pub fn shares_address(&self) -> bool {
        self.catalog.port != 0
            && self.catalog.port == self.streaming.port
            && self.catalog.host == self.streaming.host
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.catalog.port == 0 {
            warnings.push("catalog.port is 0; a random port will be assigned".into());
        }
        if self.streaming.port == 0 {
            warnings.push("streaming.port is 0; a random port will be assigned".into());
        }
        if self.shares_address() {
            warnings.push(format!(
                "catalog and streaming both bind {}:{}; `start` serves them from one listener, \
                 but separate `catalog` and `stream` processes will fail to bind",
                self.catalog.host, self.catalog.port
            ));
        }

        if self.streaming.video_dir.as_os_str().is_empty() {
            warnings.push("streaming.video_dir is empty".into());
        } else if !self.streaming.video_dir.is_dir() {
            warnings.push(format!(
                "streaming.video_dir {} does not exist or is not a directory",
                self.streaming.video_dir.display()
            ));
        }

        if let Some(ref url) = self.streaming.catalog_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                warnings.push(format!(
                    "streaming.catalog_url '{url}' is not an http(s) URL"
                ));
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Catalog service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8081,
            db_path: PathBuf::from("data/catalog.db"),
        }
    }
}

/// Streaming service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingConfig {
    pub host: String,
    pub port: u16,
    /// Base directory that `/stream/{path}` resolves against.
    pub video_dir: PathBuf,
    /// Catalog service used by `/stream/with-id/{id}` when the two services
    /// run as separate processes. `None` disables remote lookups.
    pub catalog_url: Option<String>,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8082,
            video_dir: PathBuf::from("videos"),
            catalog_url: Some("http://localhost:8081".into()),
        }
    }
}
