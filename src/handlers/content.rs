use crate::errors::AppError;
use crate::models::{ContentItem, ContentItemUpdate, DeleteParams, DeleteResponse, NewContentItem};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentItem>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::content::list(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewContentItem>,
) -> Result<Json<ContentItem>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let conn = state.db.lock().await;
    Ok(Json(store::content::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ContentItemUpdate>,
) -> Result<Json<ContentItem>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::content::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::content::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
