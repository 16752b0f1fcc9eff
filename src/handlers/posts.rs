use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    error::AppError,
    models::post::{CreatePostRequest, DeletePostRequest, UpdatePostRequest},
    store::PostStore,
};

/// List all posts, newest first.
pub async fn list_posts(
    State(store): State<Arc<PostStore>>,
) -> Result<impl IntoResponse, AppError> {
    let posts = store.list();
    tracing::debug!("Returning {} posts", posts.len());
    Ok(Json(posts))
}

/// Create a new post.
///
/// The failure modes are checked in a fixed order, each with its own
/// message: missing or blank content, missing author id, oversized
/// content.
pub async fn create_post(
    State(store): State<Arc<PostStore>>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = payload.content.as_deref().unwrap_or_default();
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let author_id = match payload.author_id.as_deref() {
        Some(author_id) if !author_id.is_empty() => author_id,
        _ => return Err(AppError::BadRequest("authorId is required".to_string())),
    };

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let post = store.create(content, author_id)?;
    tracing::info!(id = post.id, author = %post.author_id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a single post by ID.
pub async fn get_post(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = store.get(id)?;
    tracing::debug!(id, "Post found");
    Ok(Json(post))
}

/// Edit a post's content.
///
/// The store checks existence, then ownership, then the content rules, so
/// an oversized edit of a missing post is a 404 and an oversized edit of
/// someone else's post is a 403. A missing author id fails the ownership
/// comparison.
pub async fn update_post(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let author_id = payload.author_id.as_deref().unwrap_or_default();
    let content = payload.content.as_deref().unwrap_or_default();

    let post = store.update(id, author_id, content)?;
    tracing::info!(id = post.id, "Post updated");

    Ok(Json(post))
}

/// Delete a post permanently.
/// Requires the caller to be the post's author.
pub async fn delete_post(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<DeletePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let author_id = payload.author_id.as_deref().unwrap_or_default();

    store.delete(id, author_id)?;
    tracing::info!(id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
