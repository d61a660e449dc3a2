use super::info::{self, SystemInfo};
use crate::extract::Json;
use crate::prelude::*;

/// # GET /api/system-info
pub async fn get_system_info() -> ClResult<Json<SystemInfo>> {
	let info = info::collect().await?;

	Ok(Json(info))
}

// vim: ts=4
