use axum::{
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::{normalize, FaviconOutcome};
use crate::extract::Json;
use crate::prelude::*;
use crate::types::failure;

#[derive(Serialize)]
pub struct IconRes {
	success: bool,
	icon: String,
}

#[derive(Deserialize)]
pub struct FetchIconReq {
	#[serde(default)]
	url: String,
}

/// # POST /api/fetch-icon
pub async fn post_fetch_icon(State(app): State<App>, Json(req): Json<FetchIconReq>) -> ClResult<Response> {
	match app.favicon.resolve(&req.url).await? {
		FaviconOutcome::Found(icon) => Ok(Json(IconRes { success: true, icon }).into_response()),
		FaviconOutcome::Exhausted => Ok(failure(StatusCode::NOT_FOUND, "Could not fetch icon")),
	}
}

#[derive(Deserialize)]
pub struct UploadIconReq {
	#[serde(default)]
	image: String,
}

/// # POST /api/upload-icon
pub async fn post_upload_icon(State(app): State<App>, Json(req): Json<UploadIconReq>) -> ClResult<Json<IconRes>> {
	let icon = normalize::normalize_icon(&app, req.image).await?;

	Ok(Json(IconRes { success: true, icon }))
}

// vim: ts=4
