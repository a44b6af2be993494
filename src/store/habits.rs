use super::{date_from_row, date_str, parse_date, StoreError, StoreResult};
use crate::models::{Habit, HabitLog, HabitUpdate, NewHabit};
use crate::timestamp::Timestamp;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashSet;

pub fn list(conn: &Connection) -> StoreResult<Vec<Habit>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, color, created_at FROM habits ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_habit)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<Habit> {
    conn.query_row(
        "SELECT id, name, color, created_at FROM habits WHERE id = ?1",
        [id],
        map_habit,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewHabit) -> StoreResult<Habit> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO habits (name, color, created_at) VALUES (?1, ?2, ?3)",
        params![new.name, new.color, created_at],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &HabitUpdate) -> StoreResult<Habit> {
    let changed = conn.execute(
        "UPDATE habits SET
            name = COALESCE(?2, name),
            color = COALESCE(?3, color)
         WHERE id = ?1",
        params![id, update.name, update.color],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

/// Cascades to the habit's logs.
pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM habits WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

/// Mark or unmark one day. Marking is an atomic upsert keyed on
/// (habit_id, date); unmarking deletes the row and succeeds even when no
/// row exists. Absence of a row IS the not-completed state.
pub fn mark(
    conn: &Connection,
    habit_id: i64,
    date: NaiveDate,
    completed: bool,
) -> StoreResult<Option<HabitLog>> {
    let day = date_str(date);
    if completed {
        conn.execute(
            "INSERT INTO habit_logs (habit_id, date, completed) VALUES (?1, ?2, 1)
             ON CONFLICT(habit_id, date) DO UPDATE SET completed = 1",
            params![habit_id, day],
        )?;
        let log = conn.query_row(
            "SELECT id, habit_id, date, completed
             FROM habit_logs WHERE habit_id = ?1 AND date = ?2",
            params![habit_id, day],
            map_log,
        )?;
        Ok(Some(log))
    } else {
        conn.execute(
            "DELETE FROM habit_logs WHERE habit_id = ?1 AND date = ?2",
            params![habit_id, day],
        )?;
        Ok(None)
    }
}

pub fn logs_for(conn: &Connection, habit_id: i64) -> StoreResult<Vec<HabitLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, habit_id, date, completed
         FROM habit_logs WHERE habit_id = ?1
         ORDER BY date ASC",
    )?;
    let rows = stmt.query_map([habit_id], map_log)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// The streak input: only days whose row says completed. Rows with
/// `completed = 0` should never exist here (unmarking deletes instead),
/// but a foreign writer's rows must not inflate a streak.
pub fn completed_dates(conn: &Connection, habit_id: i64) -> StoreResult<HashSet<NaiveDate>> {
    let mut stmt =
        conn.prepare("SELECT date FROM habit_logs WHERE habit_id = ?1 AND completed = 1")?;
    let rows = stmt.query_map([habit_id], |row| row.get::<_, String>(0))?;

    let mut dates = HashSet::new();
    for raw in rows {
        dates.insert(parse_date(&raw?)?);
    }
    Ok(dates)
}

fn map_habit(row: &Row) -> rusqlite::Result<Habit> {
    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        created_at: row.get("created_at")?,
    })
}

fn map_log(row: &Row) -> rusqlite::Result<HabitLog> {
    let raw_date: String = row.get("date")?;
    Ok(HabitLog {
        id: row.get("id")?,
        habit_id: row.get("habit_id")?,
        date: date_from_row(raw_date)?,
        completed: row.get("completed")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn meditate(conn: &Connection) -> Habit {
        create(
            conn,
            &NewHabit {
                name: "Meditate".to_string(),
                color: "#4f9d69".to_string(),
                created_at: None,
            },
        )
        .unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn marking_twice_keeps_a_single_row() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);

        let first = mark(&conn, habit.id, day(5), true).unwrap().unwrap();
        let second = mark(&conn, habit.id, day(5), true).unwrap().unwrap();
        assert_eq!(first.id, second.id);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM habit_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unmarking_a_day_with_no_log_is_a_quiet_success() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);
        assert!(mark(&conn, habit.id, day(5), false).unwrap().is_none());
    }

    #[test]
    fn unmarking_deletes_the_row() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);

        mark(&conn, habit.id, day(5), true).unwrap();
        mark(&conn, habit.id, day(5), false).unwrap();
        assert!(logs_for(&conn, habit.id).unwrap().is_empty());
    }

    #[test]
    fn completed_dates_ignores_rows_marked_incomplete() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);
        mark(&conn, habit.id, day(4), true).unwrap();

        // A foreign writer that stores completed=0 instead of deleting.
        conn.execute(
            "INSERT INTO habit_logs (habit_id, date, completed) VALUES (?1, '2024-01-05', 0)",
            [habit.id],
        )
        .unwrap();

        let dates = completed_dates(&conn, habit.id).unwrap();
        assert!(dates.contains(&day(4)));
        assert!(!dates.contains(&day(5)));
    }

    #[test]
    fn deleting_a_habit_cascades_to_logs() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);
        mark(&conn, habit.id, day(1), true).unwrap();
        mark(&conn, habit.id, day(2), true).unwrap();

        delete(&conn, habit.id).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM habit_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn streak_over_stored_logs_matches_the_concrete_scenario() {
        let conn = db::open_in_memory();
        let habit = meditate(&conn);
        for d in 1..=5 {
            mark(&conn, habit.id, day(d), true).unwrap();
        }

        let dates = completed_dates(&conn, habit.id).unwrap();
        assert_eq!(crate::streak::current_streak(&dates, day(6)), 5);
        assert_eq!(crate::streak::current_streak(&dates, day(7)), 0);
    }
}
