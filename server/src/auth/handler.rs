use axum::{
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::extract::Json;
use crate::prelude::*;
use crate::types::failure;

#[derive(Deserialize)]
pub struct AuthReq {
	#[serde(default)]
	auth_key: String,
}

#[derive(Serialize)]
pub struct AuthRes {
	success: bool,
	token: String,
}

/// # POST /api/auth
pub async fn post_auth(State(app): State<App>, Json(req): Json<AuthReq>) -> ClResult<Response> {
	match app.session.authenticate(&req.auth_key).await {
		Ok(token) => Ok(Json(AuthRes { success: true, token }).into_response()),
		Err(Error::Unauthorized) => Ok(failure(StatusCode::UNAUTHORIZED, "Authentication failed")),
		Err(err) => Err(err),
	}
}

#[derive(Deserialize)]
pub struct VerifyReq {
	#[serde(default)]
	token: String,
}

#[derive(Serialize)]
pub struct VerifyRes {
	success: bool,
}

/// # POST /api/verify
pub async fn post_verify(State(app): State<App>, Json(req): Json<VerifyReq>) -> ClResult<(StatusCode, Json<VerifyRes>)> {
	let success = app.session.verify(&req.token).await?;
	let status = if success { StatusCode::OK } else { StatusCode::UNAUTHORIZED };

	Ok((status, Json(VerifyRes { success })))
}

// vim: ts=4
