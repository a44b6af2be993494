use crate::timestamp::Timestamp;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Create/update payloads deliberately have no `id` field: identifiers are
// assigned by the database, and on update/delete the id comes from the
// request's addressing (path or query), never the body.

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<Timestamp>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub subtasks: Vec<Subtask>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Subtask {
    pub id: i64,
    pub task_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Deserialize)]
pub struct NewSubtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update: absent (or null) fields are left untouched. `subtasks`
/// is tri-state: omitted means "do not touch the children", `[]` removes
/// them all, and a list replaces the whole set.
#[derive(Debug, Default, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub subtasks: Option<Vec<NewSubtask>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitLog {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
}

/// What `GET /api/habits` returns: the habit, its logs, and the streak the
/// dashboard widget would show.
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub logs: Vec<HabitLog>,
    pub streak: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
    #[serde(default = "default_habit_color")]
    pub color: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn default_habit_color() -> String {
    "#4f9d69".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct HabitUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkHabitLog {
    pub habit_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitLogResult {
    pub success: bool,
    pub log: Option<HabitLog>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthMetric {
    pub id: i64,
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub mood: Option<i64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewHealthMetric {
    pub date: NaiveDate,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub mood: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthMetricUpdate {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub mood: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewExercise {
    pub name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i64,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub entries: Vec<WorkoutEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutEntry {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub position: i64,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub reps: i64,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NewWorkout {
    pub date: Timestamp,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub entries: Vec<NewWorkoutEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NewWorkoutEntry {
    pub exercise_id: i64,
    #[serde(default)]
    pub sets: Vec<NewWorkoutSet>,
}

#[derive(Debug, Deserialize)]
pub struct NewWorkoutSet {
    pub reps: i64,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

/// Same tri-state `entries` semantics as `TaskUpdate::subtasks`.
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutUpdate {
    #[serde(default)]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub entries: Option<Vec<NewWorkoutEntry>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlan {
    pub id: i64,
    pub week_of: Timestamp,
    pub focus: Option<String>,
    pub goals: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewWeeklyPlan {
    pub week_of: Timestamp,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeeklyPlanUpdate {
    #[serde(default)]
    pub week_of: Option<Timestamp>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub platform: String,
    pub status: String,
    pub publish_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewContentItem {
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default = "default_content_status")]
    pub status: String,
    #[serde(default)]
    pub publish_at: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn default_content_status() -> String {
    "idea".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentItemUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub publish_at: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScriptIdea {
    pub id: i64,
    pub topic: String,
    pub hook: Option<String>,
    pub body: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewScriptIdea {
    pub topic: String,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScriptIdeaUpdate {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
