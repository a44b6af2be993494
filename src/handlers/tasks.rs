use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, NewTask, Task, TaskUpdate};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::tasks::list(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<Json<Task>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let conn = state.db.lock().await;
    Ok(Json(store::tasks::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskUpdate>,
) -> Result<Json<Task>, AppError> {
    let mut conn = state.db.lock().await;
    Ok(Json(store::tasks::update(&mut conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::tasks::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
