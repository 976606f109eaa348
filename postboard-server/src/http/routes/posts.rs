//! Post endpoints
//!
//! - `GET    /api/posts`          list, optionally `?sort=title|content&direction=asc|desc`
//! - `POST   /api/posts`          create
//! - `GET    /api/posts/search`   `?title=&content=` substring search
//! - `PUT    /api/posts/{id}`     partial update
//! - `DELETE /api/posts/{id}`     delete

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use postboard_core::{Post, PostDraft, PostPatch, SearchQuery};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PostId, QueryParams};
use crate::state::AppState;

/// PUT response
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub post: Post,
}

/// DELETE response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/posts - list posts, optionally sorted
///
/// `sort` and `direction` are validated by the store; a repeated key uses
/// its first value.
async fn list_posts(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<Post>>, ApiError> {
    let store = state.store().read().await;
    let posts = store.list_sorted(params.first("sort"), params.first("direction"))?;
    Ok(Json(posts))
}

/// POST /api/posts - create a post
async fn create_post(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<PostDraft>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.store().write().await.create(draft)?;
    tracing::info!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id} - update title and/or content
async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonBody(patch): JsonBody<PostPatch>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let post = state.store().write().await.update(id, patch)?;
    Ok(Json(UpdateResponse {
        message: format!("Post {} updated successfully", id),
        post,
    }))
}

/// DELETE /api/posts/{id}
async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store().write().await.delete(id)?;
    tracing::info!(id, "post deleted");
    Ok(Json(DeleteResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// GET /api/posts/search - never fails; no match is an empty array
async fn search_posts(
    State(state): State<AppState>,
    params: QueryParams,
) -> Json<Vec<Post>> {
    let query = SearchQuery {
        title: params.first_owned("title"),
        content: params.first_owned("content"),
    };
    let posts = state.store().read().await.search(&query);
    Json(posts)
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/search", get(search_posts))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
}
