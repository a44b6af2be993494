use super::{date_from_row, date_str, StoreError, StoreResult};
use crate::models::{HealthMetric, HealthMetricUpdate, NewHealthMetric};
use crate::timestamp::Timestamp;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// All metrics, newest day first; `date` narrows to one calendar day.
pub fn list(conn: &Connection, date: Option<NaiveDate>) -> StoreResult<Vec<HealthMetric>> {
    let (sql, filter) = match date {
        Some(day) => (
            "SELECT id, date, weight_kg, sleep_hours, mood, notes, created_at
             FROM health_metrics WHERE date = ?1
             ORDER BY date DESC, id ASC",
            Some(date_str(day)),
        ),
        None => (
            "SELECT id, date, weight_kg, sleep_hours, mood, notes, created_at
             FROM health_metrics
             ORDER BY date DESC, id ASC",
            None,
        ),
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = match &filter {
        Some(day) => stmt.query_map([day], map_metric)?,
        None => stmt.query_map([], map_metric)?,
    };
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get(conn: &Connection, id: i64) -> StoreResult<HealthMetric> {
    conn.query_row(
        "SELECT id, date, weight_kg, sleep_hours, mood, notes, created_at
         FROM health_metrics WHERE id = ?1",
        [id],
        map_metric,
    )
    .optional()?
    .ok_or(StoreError::Missing(id))
}

pub fn create(conn: &Connection, new: &NewHealthMetric) -> StoreResult<HealthMetric> {
    let created_at = new.created_at.unwrap_or_else(Timestamp::now);
    conn.execute(
        "INSERT INTO health_metrics (date, weight_kg, sleep_hours, mood, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date_str(new.date),
            new.weight_kg,
            new.sleep_hours,
            new.mood,
            new.notes,
            created_at
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, update: &HealthMetricUpdate) -> StoreResult<HealthMetric> {
    let changed = conn.execute(
        "UPDATE health_metrics SET
            date = COALESCE(?2, date),
            weight_kg = COALESCE(?3, weight_kg),
            sleep_hours = COALESCE(?4, sleep_hours),
            mood = COALESCE(?5, mood),
            notes = COALESCE(?6, notes)
         WHERE id = ?1",
        params![
            id,
            update.date.map(date_str),
            update.weight_kg,
            update.sleep_hours,
            update.mood,
            update.notes
        ],
    )?;
    if changed == 0 {
        return Err(StoreError::Missing(id));
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM health_metrics WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(StoreError::Missing(id));
    }
    Ok(())
}

fn map_metric(row: &Row) -> rusqlite::Result<HealthMetric> {
    let raw_date: String = row.get("date")?;
    Ok(HealthMetric {
        id: row.get("id")?,
        date: date_from_row(raw_date)?,
        weight_kg: row.get("weight_kg")?,
        sleep_hours: row.get("sleep_hours")?,
        mood: row.get("mood")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn metric_on(day: u32) -> NewHealthMetric {
        NewHealthMetric {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            weight_kg: Some(80.0),
            sleep_hours: Some(7.5),
            mood: Some(4),
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn date_filter_returns_only_that_day() {
        let conn = db::open_in_memory();
        create(&conn, &metric_on(1)).unwrap();
        create(&conn, &metric_on(2)).unwrap();

        let day_two = list(&conn, NaiveDate::from_ymd_opt(2024, 6, 2)).unwrap();
        assert_eq!(day_two.len(), 1);
        assert_eq!(day_two[0].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

        assert_eq!(list(&conn, None).unwrap().len(), 2);
    }

    #[test]
    fn partial_update_keeps_unmentioned_fields() {
        let conn = db::open_in_memory();
        let metric = create(&conn, &metric_on(1)).unwrap();

        let updated = update(
            &conn,
            metric.id,
            &HealthMetricUpdate {
                sleep_hours: Some(6.0),
                ..HealthMetricUpdate::default()
            },
        )
        .unwrap();
        assert_eq!(updated.sleep_hours, Some(6.0));
        assert_eq!(updated.weight_kg, Some(80.0));
    }
}
