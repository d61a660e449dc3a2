//! Database schema initialization

use sqlx::SqlitePool;

/// Name of the group seeded on first start
pub const NAS_GROUP_NAME: &str = "NAS Services";

/// Initialize the database schema and seed the default group
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		key text NOT NULL,
		value text,
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Groups
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS groups (
		id integer PRIMARY KEY AUTOINCREMENT,
		name text NOT NULL,
		order_num integer DEFAULT 999,
		is_nas_service boolean DEFAULT 0,
		created_at INTEGER DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Services
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS services (
		id integer PRIMARY KEY AUTOINCREMENT,
		group_id integer NOT NULL,
		name text NOT NULL,
		url_public text,
		url_local text,
		icon text,
		order_num integer DEFAULT 999,
		created_at INTEGER DEFAULT (unixepoch()),
		FOREIGN KEY(group_id) REFERENCES groups(id) ON DELETE CASCADE
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_services_group_id ON services(group_id)")
		.execute(&mut *tx)
		.await?;

	// Seed
	//******
	let nas_groups: i64 =
		sqlx::query_scalar("SELECT count(*) FROM groups WHERE is_nas_service = 1")
			.fetch_one(&mut *tx)
			.await?;
	if nas_groups == 0 {
		sqlx::query("INSERT INTO groups (name, order_num, is_nas_service) VALUES (?1, 1, 1)")
			.bind(NAS_GROUP_NAME)
			.execute(&mut *tx)
			.await?;
	}

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
