use super::{StoreError, StoreResult};
use crate::models::{NewSubtask, NewTask, Subtask, Task, TaskUpdate};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub fn list(conn: &Connection) -> StoreResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, notes, due_date, completed, created_at
         FROM tasks
         ORDER BY due_date IS NULL, due_date ASC, id ASC",
    )?;
    let mut tasks = stmt
        .query_map([], map_task)?
        .collect::<Result<Vec<_>, _>>()?;

    for task in &mut tasks {
        task.subtasks = subtasks_for(conn, task.id)?;
    }
    Ok(tasks)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<Task> {
    let mut task = conn
        .query_row(
            "SELECT id, title, notes, due_date, completed, created_at
             FROM tasks WHERE id = ?1",
            [id],
            map_task,
        )
        .optional()?
        .ok_or(StoreError::Missing(id))?;

    task.subtasks = subtasks_for(conn, id)?;
    Ok(task)
}

pub fn create(conn: &Connection, new: &NewTask) -> StoreResult<Task> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO tasks (title, notes, due_date, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![new.title, new.notes, new.due_date, new.completed, created_at],
    )?;
    get(conn, conn.last_insert_rowid())
}

/// Scalar fields update in place; a present `subtasks` list replaces the
/// whole child set atomically (delete-all, then bulk insert).
pub fn update(conn: &mut Connection, id: i64, update: &TaskUpdate) -> StoreResult<Task> {
    let tx = conn.transaction()?;

    let changed = tx.execute(
        "UPDATE tasks SET
            title = COALESCE(?2, title),
            notes = COALESCE(?3, notes),
            due_date = COALESCE(?4, due_date),
            completed = COALESCE(?5, completed)
         WHERE id = ?1",
        params![
            id,
            update.title,
            update.notes,
            update.due_date,
            update.completed
        ],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }

    if let Some(subtasks) = &update.subtasks {
        tx.execute("DELETE FROM subtasks WHERE task_id = ?1", [id])?;
        insert_subtasks(&tx, id, subtasks)?;
    }

    tx.commit()?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn insert_subtasks(conn: &Connection, task_id: i64, subtasks: &[NewSubtask]) -> StoreResult<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO subtasks (task_id, title, completed, position)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (position, subtask) in subtasks.iter().enumerate() {
        stmt.execute(params![
            task_id,
            subtask.title,
            subtask.completed,
            position as i64
        ])?;
    }
    Ok(())
}

fn subtasks_for(conn: &Connection, task_id: i64) -> StoreResult<Vec<Subtask>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_id, title, completed
         FROM subtasks WHERE task_id = ?1
         ORDER BY position ASC, id ASC",
    )?;
    let rows = stmt.query_map([task_id], |row| {
        Ok(Subtask {
            id: row.get("id")?,
            task_id: row.get("task_id")?,
            title: row.get("title")?,
            completed: row.get("completed")?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn map_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        notes: row.get("notes")?,
        due_date: row.get("due_date")?,
        completed: row.get("completed")?,
        created_at: row.get("created_at")?,
        subtasks: Vec::new(),
    })
}
