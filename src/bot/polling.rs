//! One status query, from request to chat text.
//!
//! Functions here are plain functions over a [`StatusSource`] rather than
//! methods on [`Bot`](super::Bot), so the `check` command can run a query
//! without a Telegram client.

use crate::error::Result;
use crate::practicum::{check_response, parse_status, response_cursor, StatusSource};

/// Outcome of a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Chat text for the first homework, `None` if the list was empty.
    pub message: Option<String>,
    /// `current_date` of the reply; the next query starts here.
    pub next_cursor: i64,
}

/// Fetches, validates and formats the first homework since `cursor`.
///
/// Nothing is returned until every step has succeeded, so a caller that only
/// advances its cursor on `Ok` re-queries the same window after a fault.
pub fn poll_status<S: StatusSource>(source: &S, cursor: i64) -> Result<PollReport> {
    let response = source.fetch_status(cursor)?;
    let homeworks = check_response(&response)?;
    let next_cursor = response_cursor(&response)?;

    let message = match homeworks.first() {
        Some(homework) => Some(parse_status(homework)?),
        None => None,
    };

    Ok(PollReport {
        message,
        next_cursor,
    })
}
