use axum::extract::State;
use serde::Serialize;

use crate::extract::{Json, Path};
use crate::meta_adapter::{CreateGroup, CreateService, Group, UpdateGroup, UpdateService};
use crate::prelude::*;
use crate::types::{ack, Ack};

fn require_name(name: &str) -> ClResult<()> {
	if name.trim().is_empty() {
		return Err(Error::ValidationError("Name must not be empty".into()));
	}
	Ok(())
}

// Groups
//********

/// # GET /api/groups
pub async fn list_groups(State(app): State<App>) -> ClResult<Json<Vec<Group>>> {
	let groups = app.meta_adapter.list_groups().await?;

	Ok(Json(groups))
}

#[derive(Serialize)]
pub struct CreateGroupRes {
	success: bool,
	group_id: i64,
}

/// # POST /api/groups
pub async fn post_group(State(app): State<App>, Json(group): Json<CreateGroup>) -> ClResult<Json<CreateGroupRes>> {
	require_name(&group.name)?;
	let group_id = app.meta_adapter.create_group(&group).await?;
	info!("Created group {} ({})", group_id, group.name);

	Ok(Json(CreateGroupRes { success: true, group_id }))
}

/// # PUT /api/groups/{id}
pub async fn put_group(
	State(app): State<App>,
	Path(group_id): Path<i64>,
	Json(group): Json<UpdateGroup>,
) -> ClResult<Json<Ack>> {
	require_name(&group.name)?;
	app.meta_adapter.update_group(group_id, &group).await?;

	Ok(ack())
}

/// # DELETE /api/groups/{id}
pub async fn delete_group(State(app): State<App>, Path(group_id): Path<i64>) -> ClResult<Json<Ack>> {
	app.meta_adapter.delete_group(group_id).await?;
	info!("Deleted group {}", group_id);

	Ok(ack())
}

// Services
//**********

#[derive(Serialize)]
pub struct CreateServiceRes {
	success: bool,
	service_id: i64,
}

/// # POST /api/services
pub async fn post_service(State(app): State<App>, Json(service): Json<CreateService>) -> ClResult<Json<CreateServiceRes>> {
	require_name(&service.name)?;
	let service_id = app.meta_adapter.create_service(&service).await?;
	info!("Created service {} ({}) in group {}", service_id, service.name, service.group_id);

	Ok(Json(CreateServiceRes { success: true, service_id }))
}

/// # PUT /api/services/{id}
pub async fn put_service(
	State(app): State<App>,
	Path(service_id): Path<i64>,
	Json(service): Json<UpdateService>,
) -> ClResult<Json<Ack>> {
	require_name(&service.name)?;
	app.meta_adapter.update_service(service_id, &service).await?;

	Ok(ack())
}

/// # DELETE /api/services/{id}
pub async fn delete_service(State(app): State<App>, Path(service_id): Path<i64>) -> ClResult<Json<Ack>> {
	app.meta_adapter.delete_service(service_id).await?;

	Ok(ack())
}

// vim: ts=4
