use super::{StoreError, StoreResult};
use crate::models::{NewWorkout, NewWorkoutEntry, Workout, WorkoutEntry, WorkoutSet, WorkoutUpdate};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// The workout log page shows the latest page only.
const PAGE_SIZE: i64 = 10;

pub fn list_recent(conn: &Connection) -> StoreResult<Vec<Workout>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, notes, created_at
         FROM workouts
         ORDER BY date DESC, id DESC
         LIMIT ?1",
    )?;
    let mut workouts = stmt
        .query_map([PAGE_SIZE], map_workout)?
        .collect::<Result<Vec<_>, _>>()?;

    for workout in &mut workouts {
        workout.entries = entries_for(conn, workout.id)?;
    }
    Ok(workouts)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<Workout> {
    let mut workout = conn
        .query_row(
            "SELECT id, date, notes, created_at FROM workouts WHERE id = ?1",
            [id],
            map_workout,
        )
        .optional()?
        .ok_or(StoreError::Missing(id))?;

    workout.entries = entries_for(conn, id)?;
    Ok(workout)
}

/// The workout row and its entry/set rows land in one transaction; a bad
/// exercise reference aborts the whole write.
pub fn create(conn: &mut Connection, new: &NewWorkout) -> StoreResult<Workout> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO workouts (date, notes, created_at) VALUES (?1, ?2, ?3)",
        params![new.date, new.notes, created_at],
    )?;
    let id = tx.last_insert_rowid();
    insert_entries(&tx, id, &new.entries)?;
    tx.commit()?;

    get(conn, id)
}

pub fn update(conn: &mut Connection, id: i64, update: &WorkoutUpdate) -> StoreResult<Workout> {
    let tx = conn.transaction()?;

    let changed = tx.execute(
        "UPDATE workouts SET
            date = COALESCE(?2, date),
            notes = COALESCE(?3, notes)
         WHERE id = ?1",
        params![id, update.date, update.notes],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }

    if let Some(entries) = &update.entries {
        // Cascades take the old sets with the old entries.
        tx.execute("DELETE FROM workout_entries WHERE workout_id = ?1", [id])?;
        insert_entries(&tx, id, entries)?;
    }

    tx.commit()?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM workouts WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn insert_entries(conn: &Connection, workout_id: i64, entries: &[NewWorkoutEntry]) -> StoreResult<()> {
    for (position, entry) in entries.iter().enumerate() {
        conn.execute(
            "INSERT INTO workout_entries (workout_id, exercise_id, position)
             VALUES (?1, ?2, ?3)",
            params![workout_id, entry.exercise_id, position as i64],
        )?;
        let entry_id = conn.last_insert_rowid();

        for set in &entry.sets {
            conn.execute(
                "INSERT INTO workout_sets (entry_id, reps, weight_kg) VALUES (?1, ?2, ?3)",
                params![entry_id, set.reps, set.weight_kg],
            )?;
        }
    }
    Ok(())
}

fn entries_for(conn: &Connection, workout_id: i64) -> StoreResult<Vec<WorkoutEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, workout_id, exercise_id, position
         FROM workout_entries WHERE workout_id = ?1
         ORDER BY position ASC, id ASC",
    )?;
    let mut entries = stmt
        .query_map([workout_id], |row| {
            Ok(WorkoutEntry {
                id: row.get("id")?,
                workout_id: row.get("workout_id")?,
                exercise_id: row.get("exercise_id")?,
                position: row.get("position")?,
                sets: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    for entry in &mut entries {
        entry.sets = sets_for(conn, entry.id)?;
    }
    Ok(entries)
}

fn sets_for(conn: &Connection, entry_id: i64) -> StoreResult<Vec<WorkoutSet>> {
    let mut stmt = conn.prepare(
        "SELECT id, reps, weight_kg FROM workout_sets WHERE entry_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([entry_id], |row| {
        Ok(WorkoutSet {
            id: row.get("id")?,
            reps: row.get("reps")?,
            weight_kg: row.get("weight_kg")?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn map_workout(row: &Row) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get("id")?,
        date: row.get("date")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        entries: Vec::new(),
    })
}
