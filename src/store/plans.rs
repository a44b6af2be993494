use super::{StoreError, StoreResult};
use crate::models::{NewWeeklyPlan, WeeklyPlan, WeeklyPlanUpdate};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PAGE_SIZE: i64 = 10;

/// Latest plans first, one page.
pub fn list_recent(conn: &Connection) -> StoreResult<Vec<WeeklyPlan>> {
    let mut stmt = conn.prepare(
        "SELECT id, week_of, focus, goals, created_at
         FROM weekly_plans
         ORDER BY week_of DESC, id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([PAGE_SIZE], map_plan)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<WeeklyPlan> {
    conn.query_row(
        "SELECT id, week_of, focus, goals, created_at FROM weekly_plans WHERE id = ?1",
        [id],
        map_plan,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewWeeklyPlan) -> StoreResult<WeeklyPlan> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO weekly_plans (week_of, focus, goals, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![new.week_of, new.focus, new.goals, created_at],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &WeeklyPlanUpdate) -> StoreResult<WeeklyPlan> {
    let changed = conn.execute(
        "UPDATE weekly_plans SET
            week_of = COALESCE(?2, week_of),
            focus = COALESCE(?3, focus),
            goals = COALESCE(?4, goals)
         WHERE id = ?1",
        params![id, update.week_of, update.focus, update.goals],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM weekly_plans WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn map_plan(row: &Row) -> rusqlite::Result<WeeklyPlan> {
    Ok(WeeklyPlan {
        id: row.get("id")?,
        week_of: row.get("week_of")?,
        focus: row.get("focus")?,
        goals: row.get("goals")?,
        created_at: row.get("created_at")?,
    })
}
