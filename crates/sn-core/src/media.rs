//! Media-domain types: the movie-info record and the streamed content type.

use serde::{Deserialize, Serialize};

use crate::ids::MovieInfoId;

/// Content type attached to every streamed file, whatever its extension.
pub const VIDEO_MP4: &str = "video/mp4";

/// A catalog record describing one movie and where its video file lives.
///
/// `id` is `None` for records that have not been saved yet; the store
/// assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovieInfo {
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub id: Option<MovieInfoId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// File path relative to the streaming service's video directory.
    pub path: String,
}

impl MovieInfo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
