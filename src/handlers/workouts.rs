use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, NewWorkout, Workout, WorkoutUpdate};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::workouts::list_recent(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewWorkout>,
) -> Result<Json<Workout>, AppError> {
    let mut conn = state.db.lock().await;
    Ok(Json(store::workouts::create(&mut conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WorkoutUpdate>,
) -> Result<Json<Workout>, AppError> {
    let mut conn = state.db.lock().await;
    Ok(Json(store::workouts::update(&mut conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::workouts::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
