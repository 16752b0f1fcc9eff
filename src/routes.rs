// src/routes.rs

use std::any::Any;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::posts, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the post routes under `/posts`.
/// * Applies global middleware (Trace, CORS, panic boundary).
/// * Injects global state (the post store).
pub fn create_router(state: AppState) -> Router {
    let post_routes = Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        );

    Router::new()
        .nest("/posts", post_routes)
        // Anything outside the surface is a JSON 404, wrong-method
        // requests included, matching the catch-all the API documents.
        .fallback(unmatched_route)
        .method_not_allowed_fallback(unmatched_route)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        // The web client may be served from any origin during development.
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// JSON 404 for any request outside the API surface.
async fn unmatched_route() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}

/// Outermost boundary: a panic inside a handler becomes a generic 500
/// without leaking internals. The store stays usable afterwards.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Unhandled panic while serving request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal server error" })),
    )
        .into_response()
}
