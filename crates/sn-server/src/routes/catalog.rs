//! Movie-info catalog route handlers.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use sn_core::{MovieInfo, MovieInfoId};

use crate::context::CatalogContext;
use crate::error::AppError;

/// POST /movie-info/save
#[utoipa::path(
    post,
    path = "/movie-info/save",
    request_body = Vec<MovieInfo>,
    responses(
        (status = 200, description = "Records saved, ids assigned", body = Vec<MovieInfo>)
    )
)]
pub async fn save_all(
    State(ctx): State<CatalogContext>,
    Json(records): Json<Vec<MovieInfo>>,
) -> Result<Json<Vec<MovieInfo>>, AppError> {
    let saved = ctx.store.save_all(&records)?;
    tracing::info!(count = saved.len(), "Saved movie info records");
    Ok(Json(saved))
}

/// GET /movie-info/list
#[utoipa::path(
    get,
    path = "/movie-info/list",
    responses(
        (status = 200, description = "All movie info records", body = Vec<MovieInfo>)
    )
)]
pub async fn list_all(
    State(ctx): State<CatalogContext>,
) -> Result<Json<Vec<MovieInfo>>, AppError> {
    Ok(Json(ctx.store.find_all()?))
}

/// GET /movie-info/find-path-by-id/:movie_info_id
///
/// Responds with the bare path as `text/plain`.
#[utoipa::path(
    get,
    path = "/movie-info/find-path-by-id/{movie_info_id}",
    params(("movie_info_id" = i64, Path, description = "Movie info ID")),
    responses(
        (status = 200, description = "Relative video path", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn find_path_by_id(
    State(ctx): State<CatalogContext>,
    Path(movie_info_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: MovieInfoId = movie_info_id
        .parse()
        .map_err(|_| sn_core::Error::Validation("Invalid movie_info_id".into()))?;

    let path = ctx
        .store
        .find_path_by_id(id)?
        .ok_or_else(|| sn_core::Error::not_found("movie_info", id))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], path))
}
