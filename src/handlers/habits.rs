use crate::errors::AppError;
use crate::models::{
    DeleteParams, DeleteResponse, Habit, HabitLogResult, HabitSummary, HabitUpdate, MarkHabitLog,
    NewHabit,
};
use crate::state::AppState;
use crate::store;
use crate::streak;
use axum::extract::{Path, Query, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<HabitSummary>>, AppError> {
    let conn = state.db.lock().await;
    let habits = store::habits::list(&conn)?;

    let mut summaries = Vec::with_capacity(habits.len());
    for habit in habits {
        let logs = store::habits::logs_for(&conn, habit.id)?;
        let dates = store::habits::completed_dates(&conn, habit.id)?;
        summaries.push(HabitSummary {
            id: habit.id,
            name: habit.name,
            color: habit.color,
            created_at: habit.created_at,
            streak: streak::current_streak_today(&dates),
            logs,
        });
    }
    Ok(Json(summaries))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<Json<Habit>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let conn = state.db.lock().await;
    Ok(Json(store::habits::create(&conn, &payload)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HabitUpdate>,
) -> Result<Json<Habit>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::habits::update(&conn, id, &payload)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = super::require_id(&params)?;
    let conn = state.db.lock().await;
    store::habits::delete(&conn, id)?;
    Ok(Json(DeleteResponse { success: true }))
}

/// `completed: true` upserts the day's log; `completed: false` deletes it
/// (a quiet success when there is nothing to delete).
pub async fn mark_log(
    State(state): State<AppState>,
    Json(payload): Json<MarkHabitLog>,
) -> Result<Json<HabitLogResult>, AppError> {
    let conn = state.db.lock().await;
    let log = store::habits::mark(&conn, payload.habit_id, payload.date, payload.completed)?;
    Ok(Json(HabitLogResult { success: true, log }))
}
