//! Resolution of numbered menu picks into ingredient tokens.
//!
//! Menus number the sorted ingredient list from 1. These functions are pure so the
//! picker logic can be exercised without a terminal.

use crate::error::{CatalogueError, Result};

/// Parses raw user text and resolves it against `sorted`.
///
/// Fails with [`CatalogueError::InvalidArgument`] when `raw` is not an integer, and
/// with [`CatalogueError::OutOfRange`] when it is outside `1..=sorted.len()`.
pub fn select_ingredient<'a, S: AsRef<str>>(raw: &str, sorted: &'a [S]) -> Result<&'a str> {
    resolve_selection(parse_selection(raw)?, sorted)
}

/// Resolves a 1-based position into `sorted`.
pub fn resolve_selection<S: AsRef<str>>(n: i64, sorted: &[S]) -> Result<&str> {
    let position = selection_position(n, sorted.len())?;
    Ok(sorted[position].as_ref())
}

pub(crate) fn parse_selection(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| CatalogueError::invalid(format!("'{}' is not a valid number", trimmed)))
}

/// Maps a 1-based pick onto a 0-based position in a list of `len` items.
pub(crate) fn selection_position(n: i64, len: usize) -> Result<usize> {
    match usize::try_from(n) {
        Ok(position) if (1..=len).contains(&position) => Ok(position - 1),
        _ => Err(CatalogueError::OutOfRange { index: n, len }),
    }
}
