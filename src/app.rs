use crate::handlers::{content, dashboard, exercises, habits, health, plans, scripts, tasks, workouts};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route(
            "/api/tasks",
            get(tasks::list).post(tasks::create).delete(tasks::remove),
        )
        .route("/api/tasks/:id", put(tasks::update))
        .route(
            "/api/habits",
            get(habits::list)
                .post(habits::create)
                .delete(habits::remove),
        )
        .route("/api/habits/:id", put(habits::update))
        .route("/api/habit-logs", post(habits::mark_log))
        .route(
            "/api/health-metrics",
            get(health::list)
                .post(health::create)
                .delete(health::remove),
        )
        .route("/api/health-metrics/:id", put(health::update))
        .route(
            "/api/exercises",
            get(exercises::list)
                .post(exercises::create)
                .delete(exercises::remove),
        )
        .route("/api/exercises/:id", put(exercises::update))
        .route(
            "/api/workouts",
            get(workouts::list)
                .post(workouts::create)
                .delete(workouts::remove),
        )
        .route("/api/workouts/:id", put(workouts::update))
        .route(
            "/api/weekly-plans",
            get(plans::list).post(plans::create).delete(plans::remove),
        )
        .route("/api/weekly-plans/:id", put(plans::update))
        .route(
            "/api/content",
            get(content::list)
                .post(content::create)
                .delete(content::remove),
        )
        .route("/api/content/:id", put(content::update))
        .route(
            "/api/scripts",
            get(scripts::list)
                .post(scripts::create)
                .delete(scripts::remove),
        )
        .route("/api/scripts/:id", put(scripts::update))
        .with_state(state)
}
