//! File streaming from the configured video directory.
//!
//! [`FileStreamer`] maps a caller-supplied relative path onto the base
//! directory, opens the file in a single step, and hands back a
//! [`VideoStream`] that owns the handle. The handle closes when the stream
//! is dropped, whether the body was fully sent or the client went away.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use sn_core::{Error, Result, VIDEO_MP4};

/// Read size for each body chunk.
const CHUNK_SIZE: usize = 64 * 1024;

/// Outcome of [`FileStreamer::serve`].
#[derive(Debug)]
pub enum StreamResult {
    Found(VideoStream),
    NotFound,
}

/// An open video file ready to be sent as a response body.
///
/// Single-pass: consuming it exhausts the handle. Call
/// [`FileStreamer::serve`] again for a second read.
#[derive(Debug)]
pub struct VideoStream {
    file: File,
    len: u64,
}

impl VideoStream {
    /// File size in bytes at open time.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always `video/mp4`, whatever the file's real container.
    pub fn media_type(&self) -> &'static str {
        VIDEO_MP4
    }

    /// Chunked byte stream over the file.
    pub fn into_reader_stream(self) -> ReaderStream<File> {
        ReaderStream::with_capacity(self.file, CHUNK_SIZE)
    }

    /// Wrap the file in an HTTP body.
    pub fn into_body(self) -> Body {
        Body::from_stream(self.into_reader_stream())
    }
}

/// Serves files from a fixed base directory.
#[derive(Debug, Clone)]
pub struct FileStreamer {
    base_dir: PathBuf,
}

impl FileStreamer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Join `relative_path` onto the base directory.
    ///
    /// Empty paths, absolute paths, and paths with `..` components are
    /// rejected rather than sandboxed.
    pub fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        if relative_path.is_empty() {
            return Err(Error::Validation("video path is empty".into()));
        }
        if relative_path.contains('\0') {
            return Err(Error::Validation("video path contains a NUL byte".into()));
        }

        let rel = Path::new(relative_path);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(Error::Validation(format!(
                "video path '{relative_path}' escapes the video directory"
            )));
        }

        Ok(self.base_dir.join(rel))
    }

    /// Open `relative_path` for streaming.
    ///
    /// A missing file (or a directory) yields [`StreamResult::NotFound`];
    /// any other open failure is an I/O error.
    pub async fn serve(&self, relative_path: &str) -> Result<StreamResult> {
        let path = self.resolve(relative_path)?;

        let file = match File::open(&path).await {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Video not found");
                return Ok(StreamResult::NotFound);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to open video");
                return Err(e.into());
            }
        };

        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            tracing::debug!(path = %path.display(), "Video path is not a regular file");
            return Ok(StreamResult::NotFound);
        }

        tracing::debug!(path = %path.display(), bytes = metadata.len(), "Streaming video");
        Ok(StreamResult::Found(VideoStream {
            file,
            len: metadata.len(),
        }))
    }
}
