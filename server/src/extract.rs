//! Extractors whose rejections use the JSON error body

use axum::{
	extract::{FromRequest, FromRequestParts, Request},
	http::request::Parts,
	response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::prelude::*;

// Json //
//******//
/// JSON body extractor and response. A malformed or missing body is reported
/// as `{"success": false, "message": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
		Ok(Json(value))
	}
}

impl<T: Serialize> IntoResponse for Json<T> {
	fn into_response(self) -> Response {
		axum::Json(self.0).into_response()
	}
}

// Path //
//******//
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state).await?;
		Ok(Path(value))
	}
}

// vim: ts=4
