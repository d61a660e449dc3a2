//! Group management

use std::collections::HashMap;

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::utils::*;
use homedash::meta_adapter::{CreateGroup, Group, Service, UpdateGroup};
use homedash::prelude::*;

fn service_from_row(row: &SqliteRow) -> Result<(i64, Service), sqlx::Error> {
	Ok((
		row.try_get("group_id")?,
		Service {
			id: row.try_get("id")?,
			name: row.try_get::<String, _>("name")?.into(),
			url_public: row.try_get::<Option<String>, _>("url_public")?.map(Into::into),
			url_local: row.try_get::<Option<String>, _>("url_local")?.map(Into::into),
			icon: row.try_get::<Option<String>, _>("icon")?.map(Into::into),
			order_num: row.try_get("order_num")?,
		},
	))
}

/// List all groups with their services, both ordered by `(order_num, id)`
pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<Group>> {
	let group_rows = sqlx::query(
		"SELECT id, name, order_num, is_nas_service FROM groups ORDER BY order_num, id",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let service_rows = sqlx::query(
		"SELECT id, group_id, name, url_public, url_local, icon, order_num
		FROM services ORDER BY order_num, id",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut services: HashMap<i64, Vec<Service>> = HashMap::new();
	for (group_id, service) in collect_res(service_rows.iter().map(service_from_row))? {
		services.entry(group_id).or_default().push(service);
	}

	collect_res(group_rows.iter().map(|row| {
		let id: i64 = row.try_get("id")?;
		Ok(Group {
			id,
			name: row.try_get::<String, _>("name")?.into(),
			order_num: row.try_get("order_num")?,
			is_nas_service: row.try_get("is_nas_service")?,
			services: services.remove(&id).unwrap_or_default(),
		})
	}))
}

pub(crate) async fn create(db: &SqlitePool, group: &CreateGroup) -> ClResult<i64> {
	let res = sqlx::query(
		"INSERT INTO groups (name, order_num, is_nas_service) VALUES (?1, ?2, ?3) RETURNING id",
	)
	.bind(group.name.as_ref())
	.bind(group.order)
	.bind(group.is_nas_service)
	.fetch_one(db)
	.await;

	map_res(res, |row| row.try_get("id"))
}

pub(crate) async fn update(db: &SqlitePool, group_id: i64, group: &UpdateGroup) -> ClResult<()> {
	let res = sqlx::query(
		"UPDATE groups SET name = ?1, order_num = coalesce(?2, order_num) WHERE id = ?3",
	)
	.bind(group.name.as_ref())
	.bind(group.order)
	.bind(group_id)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	require_affected(res.rows_affected())
}

/// Delete a group. Its services go with it via `ON DELETE CASCADE`.
pub(crate) async fn delete(db: &SqlitePool, group_id: i64) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM groups WHERE id = ?1")
		.bind(group_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res.rows_affected())
}

// vim: ts=4
