//! Service management

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use homedash::meta_adapter::{CreateService, UpdateService};
use homedash::prelude::*;

pub(crate) async fn create(db: &SqlitePool, service: &CreateService) -> ClResult<i64> {
	let row = sqlx::query(
		"INSERT INTO services (group_id, name, url_public, url_local, icon, order_num)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
	)
	.bind(service.group_id)
	.bind(service.name.as_ref())
	.bind(service.url_public.as_ref())
	.bind(service.url_local.as_ref())
	.bind(service.icon.as_ref())
	.bind(service.order)
	.fetch_one(db)
	.await
	.map_err(|err| map_write_err(err, "Service"))?;

	row.try_get("id").inspect_err(inspect).map_err(|_| Error::DbError)
}

/// Update a service. Only the name is mandatory, other columns are written
/// when present.
pub(crate) async fn update(
	db: &SqlitePool,
	service_id: i64,
	service: &UpdateService,
) -> ClResult<()> {
	let mut query = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE services SET name = ");
	query.push_bind(service.name.as_ref());
	if let Some(url_public) = &service.url_public {
		query.push(", url_public = ").push_bind(url_public.as_ref());
	}
	if let Some(url_local) = &service.url_local {
		query.push(", url_local = ").push_bind(url_local.as_ref());
	}
	if let Some(icon) = &service.icon {
		query.push(", icon = ").push_bind(icon.as_ref());
	}
	if let Some(order) = service.order {
		query.push(", order_num = ").push_bind(order);
	}
	query.push(" WHERE id = ").push_bind(service_id);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res.rows_affected())
}

pub(crate) async fn delete(db: &SqlitePool, service_id: i64) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM services WHERE id = ?1")
		.bind(service_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res.rows_affected())
}

// vim: ts=4
