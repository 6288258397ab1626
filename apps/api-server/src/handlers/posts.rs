//! CRUD handlers for the posts resource.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostDraft;
use blog_shared::dto::{CreatedResponse, DeletedResponse, UpdatedResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Listing currently serves a fixed first page; the service still clamps.
const LIST_OFFSET: i64 = 0;
const LIST_LIMIT: i64 = 50;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list(LIST_OFFSET, LIST_LIMIT)
        .await
        .map_err(AppError::internal)?;

    // Vec serializes as `[]` when empty, never null.
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    draft: web::Json<PostDraft>,
) -> AppResult<HttpResponse> {
    let id = state
        .posts
        .create(draft.into_inner())
        .await
        .map_err(AppError::bad_request)?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.posts.get(id).await.map_err(AppError::internal)? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound),
    }
}

/// PUT /posts/{id} - full replace
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    draft: web::Json<PostDraft>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let updated = state
        .posts
        .update(id, draft.into_inner())
        .await
        .map_err(AppError::bad_request)?;
    if !updated {
        return Err(AppError::NotFound);
    }

    Ok(HttpResponse::Ok().json(UpdatedResponse { updated: true }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let deleted = state.posts.delete(id).await.map_err(AppError::internal)?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(HttpResponse::Ok().json(DeletedResponse { deleted: true }))
}

/// The id segment must parse as a positive integer; anything else is a 400
/// before the service is consulted.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidId),
    }
}
