//! Axum router construction.
//!
//! Each service has an explicit route table. The `build_*` functions wrap
//! a table with the shared layers (request id, CORS, tracing), the health
//! check, and the OpenAPI docs.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::context::{CatalogContext, StreamingContext};
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::catalog::save_all,
        routes::catalog::list_all,
        routes::catalog::find_path_by_id,
    ),
    components(schemas(sn_core::MovieInfo))
)]
struct CatalogApiDoc;

#[derive(OpenApi)]
#[openapi(paths(
    routes::health::health_check,
    routes::stream::stream_video,
    routes::stream::stream_by_id,
))]
struct StreamingApiDoc;

/// Catalog route table with state applied.
pub fn catalog_routes(ctx: CatalogContext) -> Router {
    Router::new()
        .route("/movie-info/save", post(routes::catalog::save_all))
        .route("/movie-info/list", get(routes::catalog::list_all))
        .route(
            "/movie-info/find-path-by-id/{movie_info_id}",
            get(routes::catalog::find_path_by_id),
        )
        .with_state(ctx)
}

/// Streaming route table with state applied.
pub fn streaming_routes(ctx: StreamingContext) -> Router {
    Router::new()
        .route(
            "/stream/with-id/{movie_info_id}",
            get(routes::stream::stream_by_id),
        )
        .route("/stream/{video_path}", get(routes::stream::stream_video))
        .with_state(ctx)
}

/// Full router for a standalone catalog service.
pub fn build_catalog_router(ctx: CatalogContext) -> Router {
    with_common_layers(catalog_routes(ctx), CatalogApiDoc::openapi())
}

/// Full router for a standalone streaming service.
pub fn build_streaming_router(ctx: StreamingContext) -> Router {
    with_common_layers(streaming_routes(ctx), StreamingApiDoc::openapi())
}

/// Both services behind one listener.
pub fn build_combined_router(catalog: CatalogContext, streaming: StreamingContext) -> Router {
    let mut doc = CatalogApiDoc::openapi();
    doc.merge(StreamingApiDoc::openapi());
    with_common_layers(
        catalog_routes(catalog).merge(streaming_routes(streaming)),
        doc,
    )
}

fn with_common_layers(app: Router, doc: utoipa::openapi::OpenApi) -> Router {
    // The browser frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app
        .route("/health", get(routes::health::health_check))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", doc))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
