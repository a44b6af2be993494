use crate::errors::AppError;
use crate::state::AppState;
use crate::store;
use crate::streak;
use crate::ui::{self, HabitCard};
use axum::extract::State;
use axum::response::Html;
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = Local::now().date_naive();
    let conn = state.db.lock().await;

    let mut cards = Vec::new();
    for habit in store::habits::list(&conn)? {
        let dates = store::habits::completed_dates(&conn, habit.id)?;
        cards.push(HabitCard {
            id: habit.id,
            name: habit.name,
            color: habit.color,
            streak: streak::current_streak(&dates, today),
            done_today: dates.contains(&today),
        });
    }

    let open_tasks: Vec<_> = store::tasks::list(&conn)?
        .into_iter()
        .filter(|task| !task.completed)
        .collect();

    Ok(Html(ui::render_dashboard(today, &cards, &open_tasks)))
}
