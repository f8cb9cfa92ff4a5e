//! # Route Handlers
//!
//! One module per resource. Handlers do three things, in order: validate
//! and translate input (400 with a localized message on failure), call
//! the repository, and translate the result (storage failures become a
//! localized 500, not-found included).

pub mod cash_register;
pub mod health;
pub mod production;
pub mod products;
pub mod sales;

use chrono::NaiveDate;

use masa_core::day;

use crate::error::ApiError;

/// Parses an optional client-supplied date; absence stays absent.
pub(crate) fn parse_optional_day(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        Some(raw) => day::parse_day(raw)
            .map(Some)
            .map_err(|_| ApiError::validation("Fecha inválida")),
        None => Ok(None),
    }
}

/// Parses an optional client-supplied date, defaulting to today.
pub(crate) fn resolve_day(value: Option<&str>) -> Result<NaiveDate, ApiError> {
    Ok(parse_optional_day(value)?.unwrap_or_else(day::today))
}
