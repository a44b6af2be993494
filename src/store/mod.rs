//! Per-entity data access over the shared SQLite connection. Handlers lock
//! the `Db` handle and pass the guarded connection in; multi-statement
//! writes take `&mut Connection` and run inside a transaction.

pub mod content;
pub mod exercises;
pub mod habits;
pub mod health;
pub mod plans;
pub mod scripts;
pub mod tasks;
pub mod workouts;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no row with id {0}")]
    Missing(i64),

    #[error("invalid stored date {0:?}")]
    InvalidDate(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

pub(crate) fn date_str(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub(crate) fn parse_date(raw: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FMT).map_err(|_| StoreError::InvalidDate(raw.to_string()))
}

/// For row mappers: a TEXT date column that fails to parse becomes a
/// rusqlite conversion error so `query_map` call sites stay on plain `?`.
pub(crate) fn date_from_row(raw: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(StoreError::InvalidDate(raw)),
        )
    })
}
