use super::{StoreError, StoreResult};
use crate::models::{ContentItem, ContentItemUpdate, NewContentItem};
use crate::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub fn list(conn: &Connection) -> StoreResult<Vec<ContentItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, platform, status, publish_at, notes, created_at
         FROM content_items
         ORDER BY publish_at IS NULL, publish_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_item)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<ContentItem> {
    conn.query_row(
        "SELECT id, title, platform, status, publish_at, notes, created_at
         FROM content_items WHERE id = ?1",
        [id],
        map_item,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewContentItem) -> StoreResult<ContentItem> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO content_items (title, platform, status, publish_at, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            new.title,
            new.platform,
            new.status,
            new.publish_at,
            new.notes,
            created_at
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &ContentItemUpdate) -> StoreResult<ContentItem> {
    let changed = conn.execute(
        "UPDATE content_items SET
            title = COALESCE(?2, title),
            platform = COALESCE(?3, platform),
            status = COALESCE(?4, status),
            publish_at = COALESCE(?5, publish_at),
            notes = COALESCE(?6, notes)
         WHERE id = ?1",
        params![
            id,
            update.title,
            update.platform,
            update.status,
            update.publish_at,
            update.notes
        ],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM content_items WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn map_item(row: &Row) -> rusqlite::Result<ContentItem> {
    Ok(ContentItem {
        id: row.get("id")?,
        title: row.get("title")?,
        platform: row.get("platform")?,
        status: row.get("status")?,
        publish_at: row.get("publish_at")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn unscheduled_items_sort_after_scheduled_ones() {
        let conn = db::open_in_memory();
        let scheduled = NewContentItem {
            title: "launch video".to_string(),
            platform: "youtube".to_string(),
            status: "scripted".to_string(),
            publish_at: Some(Timestamp::new(5_000)),
            notes: None,
            created_at: None,
        };
        let unscheduled = NewContentItem {
            title: "someday short".to_string(),
            platform: "tiktok".to_string(),
            status: "idea".to_string(),
            publish_at: None,
            notes: None,
            created_at: None,
        };

        create(&conn, &unscheduled).unwrap();
        create(&conn, &scheduled).unwrap();

        let titles: Vec<String> = list(&conn).unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, ["launch video", "someday short"]);
    }
}
