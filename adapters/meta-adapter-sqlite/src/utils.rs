//! Shared utilities for the SQLite adapter
//!
//! Error mapping helpers used across all domain modules.

use homedash::prelude::*;
use sqlx::sqlite::SqliteRow;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a query result to a value using a closure
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> ClResult<T>
where
	F: FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(ref row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Collect result iterator into a vector
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> ClResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

/// Map a write error, turning foreign key violations into validation errors
pub(crate) fn map_write_err(err: sqlx::Error, what: &str) -> Error {
	if let Some(db_err) = err.as_database_error() {
		if db_err.kind() == sqlx::error::ErrorKind::ForeignKeyViolation {
			return Error::ValidationError(format!("{} refers to a missing group", what));
		}
	}
	inspect(&err);
	Error::DbError
}

/// Require that a statement touched at least one row
pub(crate) fn require_affected(rows: u64) -> ClResult<()> {
	if rows == 0 { Err(Error::NotFound) } else { Ok(()) }
}

// vim: ts=4
