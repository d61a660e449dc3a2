//! Response bodies shared by several handlers.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::extract::Json;

/// `{"success": true}`
#[derive(Debug, Serialize)]
pub struct Ack {
	pub success: bool,
}

pub fn ack() -> Json<Ack> {
	Json(Ack { success: true })
}

/// `{"success": false, "message": ...}` for expected, non-error outcomes
/// such as a rejected secret or an icon that could not be found.
#[derive(Debug, Serialize)]
pub struct Failure {
	pub success: bool,
	pub message: &'static str,
}

pub fn failure(status: StatusCode, message: &'static str) -> Response {
	(status, Json(Failure { success: false, message })).into_response()
}

// vim: ts=4
