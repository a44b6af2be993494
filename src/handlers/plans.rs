use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, NewWeeklyPlan, WeeklyPlan, WeeklyPlanUpdate};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<WeeklyPlan>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::plans::list_recent(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewWeeklyPlan>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::plans::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WeeklyPlanUpdate>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::plans::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::plans::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
