use super::{StoreError, StoreResult};
use crate::models::{Exercise, ExerciseUpdate, NewExercise};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub fn list(conn: &Connection) -> StoreResult<Vec<Exercise>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, muscle_group, created_at FROM exercises ORDER BY name ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_exercise)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<Exercise> {
    conn.query_row(
        "SELECT id, name, muscle_group, created_at FROM exercises WHERE id = ?1",
        [id],
        map_exercise,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewExercise) -> StoreResult<Exercise> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO exercises (name, muscle_group, created_at) VALUES (?1, ?2, ?3)",
        params![new.name, new.muscle_group, created_at],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &ExerciseUpdate) -> StoreResult<Exercise> {
    let changed = conn.execute(
        "UPDATE exercises SET
            name = COALESCE(?2, name),
            muscle_group = COALESCE(?3, muscle_group)
         WHERE id = ?1",
        params![id, update.name, update.muscle_group],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM exercises WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn map_exercise(row: &Row) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get("id")?,
        name: row.get("name")?,
        muscle_group: row.get("muscle_group")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn lists_alphabetically() {
        let conn = db::open_in_memory();
        for name in ["Squat", "Bench Press", "Deadlift"] {
            create(
                &conn,
                &NewExercise {
                    name: name.to_string(),
                    muscle_group: None,
                    created_at: None,
                },
            )
            .unwrap();
        }

        let names: Vec<String> = list(&conn).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Bench Press", "Deadlift", "Squat"]);
    }
}
