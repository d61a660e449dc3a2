//! SQLite implementation of the Homedash `MetaAdapter`.
//!
//! One pooled database file (`dashboard.db`) holds settings, groups and
//! services. Each domain lives in its own module; this file only wires them
//! into the trait.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use homedash::{
	meta_adapter::{self, CreateGroup, CreateService, Group, UpdateGroup, UpdateService},
	prelude::*,
};

mod group;
mod schema;
mod service;
mod setting;
mod utils;

pub use schema::NAS_GROUP_NAME;

/// Database file name inside the data directory
pub const DB_FILE: &str = "dashboard.db";

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	/// Opens (or creates) `dashboard.db` inside `dir`.
	pub async fn new(dir: impl AsRef<Path>) -> ClResult<Self> {
		let dir = dir.as_ref();
		tokio::fs::create_dir_all(dir).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.join(DB_FILE))
			.create_if_missing(true)
			.foreign_keys(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		info!("Opened metadata database in {}", dir.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl meta_adapter::MetaAdapter for MetaAdapterSqlite {
	// Settings
	//**********
	async fn read_setting(&self, key: &str) -> ClResult<Option<Box<str>>> {
		setting::read(&self.db, key).await
	}

	async fn update_setting(&self, key: &str, value: &str) -> ClResult<()> {
		setting::update(&self.db, key, value).await
	}

	// Groups
	//********
	async fn list_groups(&self) -> ClResult<Vec<Group>> {
		group::list(&self.db).await
	}

	async fn create_group(&self, group: &CreateGroup) -> ClResult<i64> {
		group::create(&self.db, group).await
	}

	async fn update_group(&self, group_id: i64, group: &UpdateGroup) -> ClResult<()> {
		group::update(&self.db, group_id, group).await
	}

	async fn delete_group(&self, group_id: i64) -> ClResult<()> {
		group::delete(&self.db, group_id).await
	}

	// Services
	//**********
	async fn create_service(&self, service: &CreateService) -> ClResult<i64> {
		service::create(&self.db, service).await
	}

	async fn update_service(&self, service_id: i64, service: &UpdateService) -> ClResult<()> {
		service::update(&self.db, service_id, service).await
	}

	async fn delete_service(&self, service_id: i64) -> ClResult<()> {
		service::delete(&self.db, service_id).await
	}
}

// vim: ts=4
