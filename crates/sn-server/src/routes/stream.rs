//! Streaming route handlers.
//!
//! A missing file is an empty-bodied 404, not a JSON error, so players see
//! a plain "not found" rather than a body they would try to decode.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use sn_core::MovieInfoId;

use crate::context::StreamingContext;
use crate::error::AppError;
use crate::streamer::StreamResult;

/// GET /stream/:video_path
#[utoipa::path(
    get,
    path = "/stream/{video_path}",
    params(("video_path" = String, Path, description = "File path relative to the video directory")),
    responses(
        (status = 200, description = "Video bytes", body = Vec<u8>, content_type = "video/mp4"),
        (status = 400, description = "Path escapes the video directory"),
        (status = 404, description = "No such file"),
        (status = 500, description = "File exists but could not be opened")
    )
)]
pub async fn stream_video(
    State(ctx): State<StreamingContext>,
    Path(video_path): Path<String>,
) -> Result<Response, AppError> {
    let result = ctx.streamer.serve(&video_path).await?;
    Ok(stream_response(result))
}

/// GET /stream/with-id/:movie_info_id
///
/// Resolves the path through the catalog, then streams it like
/// [`stream_video`].
#[utoipa::path(
    get,
    path = "/stream/with-id/{movie_info_id}",
    params(("movie_info_id" = i64, Path, description = "Movie info ID")),
    responses(
        (status = 200, description = "Video bytes", body = Vec<u8>, content_type = "video/mp4"),
        (status = 400, description = "Invalid id or stored path"),
        (status = 404, description = "Unknown id or missing file"),
        (status = 502, description = "Catalog unavailable")
    )
)]
pub async fn stream_by_id(
    State(ctx): State<StreamingContext>,
    Path(movie_info_id): Path<String>,
) -> Result<Response, AppError> {
    let id: MovieInfoId = movie_info_id
        .parse()
        .map_err(|_| sn_core::Error::Validation("Invalid movie_info_id".into()))?;

    let paths = ctx
        .paths
        .as_ref()
        .ok_or_else(|| sn_core::Error::Upstream("no catalog configured".into()))?;

    let Some(video_path) = paths.find_path(id).await? else {
        tracing::debug!(%id, "No catalog entry for movie id");
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let result = ctx.streamer.serve(&video_path).await?;
    Ok(stream_response(result))
}

fn stream_response(result: StreamResult) -> Response {
    match result {
        StreamResult::Found(stream) => {
            let headers = [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(stream.media_type()),
                ),
                (header::CONTENT_LENGTH, HeaderValue::from(stream.len())),
            ];
            (StatusCode::OK, headers, stream.into_body()).into_response()
        }
        StreamResult::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}
