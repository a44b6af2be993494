use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, Exercise, ExerciseUpdate, NewExercise};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Exercise>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::exercises::list(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewExercise>,
) -> Result<Json<Exercise>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let conn = state.db.lock().await;
    Ok(Json(store::exercises::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExerciseUpdate>,
) -> Result<Json<Exercise>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::exercises::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::exercises::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
