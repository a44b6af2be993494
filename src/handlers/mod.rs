//! Route handlers: parse the request, make one store call, return the
//! result as JSON. All normalization (id stripping, timestamp coercion)
//! happens in the payload types themselves.

pub mod content;
pub mod dashboard;
pub mod exercises;
pub mod habits;
pub mod health;
pub mod plans;
pub mod scripts;
pub mod tasks;
pub mod workouts;

use crate::errors::AppError;
use crate::models::DeleteParams;

pub(crate) fn require_id(params: &DeleteParams) -> Result<i64, AppError> {
    params
        .id
        .ok_or_else(|| AppError::bad_request("id query parameter is required"))
}
