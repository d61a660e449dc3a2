//! Settings key-value store
//!
//! Plain string values. Writes are single `INSERT OR REPLACE` statements, so
//! concurrent writers to the same key never lose an update halfway: the last
//! statement to commit wins.

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use homedash::prelude::*;

/// Read a single setting
pub(crate) async fn read(db: &SqlitePool, key: &str) -> ClResult<Option<Box<str>>> {
	let row = sqlx::query("SELECT value FROM settings WHERE key = ?1")
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => {
			let value: Option<String> =
				row.try_get("value").inspect_err(inspect).map_err(|_| Error::DbError)?;
			Ok(value.map(String::into_boxed_str))
		}
		None => Ok(None),
	}
}

/// Create or overwrite a setting
pub(crate) async fn update(db: &SqlitePool, key: &str, value: &str) -> ClResult<()> {
	sqlx::query(
		"INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, unixepoch())",
	)
	.bind(key)
	.bind(value)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;
	Ok(())
}

// vim: ts=4
