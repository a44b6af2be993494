use super::{StoreError, StoreResult};
use crate::models::{NewScriptIdea, ScriptIdea, ScriptIdeaUpdate};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Newest ideas first.
pub fn list(conn: &Connection) -> StoreResult<Vec<ScriptIdea>> {
    let mut stmt = conn.prepare(
        "SELECT id, topic, hook, body, created_at
         FROM script_ideas
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_idea)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<ScriptIdea> {
    conn.query_row(
        "SELECT id, topic, hook, body, created_at FROM script_ideas WHERE id = ?1",
        [id],
        map_idea,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewScriptIdea) -> StoreResult<ScriptIdea> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO script_ideas (topic, hook, body, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![new.topic, new.hook, new.body, created_at],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &ScriptIdeaUpdate) -> StoreResult<ScriptIdea> {
    let changed = conn.execute(
        "UPDATE script_ideas SET
            topic = COALESCE(?2, topic),
            hook = COALESCE(?3, hook),
            body = COALESCE(?4, body)
         WHERE id = ?1",
        params![id, update.topic, update.hook, update.body],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM script_ideas WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn map_idea(row: &Row) -> rusqlite::Result<ScriptIdea> {
    Ok(ScriptIdea {
        id: row.get("id")?,
        topic: row.get("topic")?,
        hook: row.get("hook")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn newest_ideas_come_first() {
        let conn = db::open_in_memory();
        for (topic, at) in [("old", 1_000), ("new", 2_000)] {
            create(
                &conn,
                &NewScriptIdea {
                    topic: topic.to_string(),
                    hook: None,
                    body: None,
                    created_at: Some(Timestamp::new(at)),
                },
            )
            .unwrap();
        }

        let topics: Vec<String> = list(&conn).unwrap().into_iter().map(|i| i.topic).collect();
        assert_eq!(topics, ["new", "old"]);
    }
}
