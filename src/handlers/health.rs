use crate::errors::AppError;
use crate::models::{DeleteParams, DeleteResponse, HealthMetric, HealthMetricUpdate, NewHealthMetric};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    date: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<HealthMetric>>, AppError> {
    let date = match &params.date {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?,
        ),
        None => None,
    };

    let conn = state.db.lock().await;
    Ok(Json(store::health::list(&conn, date)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewHealthMetric>,
) -> Result<Json<HealthMetric>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::health::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HealthMetricUpdate>,
) -> Result<Json<HealthMetric>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::health::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::health::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
