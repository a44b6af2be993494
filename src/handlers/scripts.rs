use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, NewScriptIdea, ScriptIdea, ScriptIdeaUpdate};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ScriptIdea>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::scripts::list(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewScriptIdea>,
) -> Result<Json<ScriptIdea>, AppError> {
    if payload.topic.trim().is_empty() {
        return Err(AppError::bad_request("topic must not be empty"));
    }

    let conn = state.db.lock().await;
    Ok(Json(store::scripts::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ScriptIdeaUpdate>,
) -> Result<Json<ScriptIdea>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::scripts::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::scripts::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
