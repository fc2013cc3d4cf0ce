//! Post resource handlers. Each one makes a single repository call.

use actix_web::{HttpResponse, web};

use posts_core::domain::{NewPost, PostChanges, PostId};
use posts_shared::{DELETED_MESSAGE, PostEnvelope, PostInput, PostsEnvelope};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /posts
///
/// The body is decoded leniently: anything that does not decode becomes an
/// empty field, and the post is still created.
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let PostInput { title, body } = PostInput::from_body(&body);

    let post = state
        .posts
        .create(NewPost::new(title, body))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create post");
            AppError::Rejected
        })?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Ok().json(PostEnvelope { post }))
}

/// GET /posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(PostsEnvelope { posts }))
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let found = state.posts.find_by_id(id).await?;
    let post = state.not_found.resolve(id, found)?;

    Ok(HttpResponse::Ok().json(PostEnvelope { post }))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let PostInput { title, body } = PostInput::from_body(&body);

    let updated = state
        .posts
        .update(id, PostChanges::from_fields(title, body))
        .await?;
    if updated.is_some() {
        tracing::info!(post_id = id, "Post updated");
    }
    let post = state.not_found.resolve(id, updated)?;

    Ok(HttpResponse::Ok().json(PostEnvelope { post }))
}

/// DELETE /posts/{id}
///
/// Answers with the same confirmation whether or not the post existed.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let existed = state.posts.delete(id).await?;
    tracing::info!(post_id = id, existed, "Post deleted");

    Ok(HttpResponse::Ok().json(PostEnvelope {
        post: DELETED_MESSAGE,
    }))
}
