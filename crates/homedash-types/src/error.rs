//! Error type shared by the server and the adapters.
//!
//! Every failure that can reach an HTTP boundary is expressed as an [`Error`]
//! variant. The [`IntoResponse`] impl turns it into the dashboard's JSON error
//! body (`{"success": false, "message": ...}`) with the matching status code.

use axum::{
	extract::rejection::{JsonRejection, PathRejection},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use serde::Serialize;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	// Access
	Unauthorized,

	// Lookup / input
	NotFound,
	ValidationError(String),
	PayloadTooLarge,

	// Backend
	DbError,
	NetworkError(String),
	Timeout,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
			Error::DbError
			| Error::NetworkError(_)
			| Error::Timeout
			| Error::Internal(_)
			| Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Message returned to the client. Storage and I/O details stay in the log.
	fn public_message(&self) -> String {
		match self {
			Error::Unauthorized => "Unauthorized".into(),
			Error::NotFound => "Not found".into(),
			Error::ValidationError(msg) | Error::NetworkError(msg) | Error::Internal(msg) => {
				msg.clone()
			}
			Error::PayloadTooLarge => "Request body too large".into(),
			Error::Timeout => "Timed out".into(),
			Error::DbError | Error::Io(_) => "Internal server error".into(),
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::NetworkError(msg) => write!(f, "network error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
			_ => write!(f, "{:?}", self),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ValidationError(err.to_string())
	}
}

impl From<base64::DecodeError> for Error {
	fn from(err: base64::DecodeError) -> Self {
		Self::ValidationError(format!("Invalid base64 data: {}", err))
	}
}

impl From<JsonRejection> for Error {
	fn from(rejection: JsonRejection) -> Self {
		if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
			Self::PayloadTooLarge
		} else {
			Self::ValidationError(rejection.body_text())
		}
	}
}

impl From<PathRejection> for Error {
	fn from(rejection: PathRejection) -> Self {
		Self::ValidationError(rejection.body_text())
	}
}

#[cfg(feature = "server")]
impl From<image::ImageError> for Error {
	fn from(err: image::ImageError) -> Self {
		use image::ImageError;
		match err {
			ImageError::Decoding(_) | ImageError::Unsupported(_) | ImageError::Limits(_) => {
				Self::ValidationError(format!("Unsupported image: {}", err))
			}
			ImageError::IoError(err) => Self::Io(err),
			_ => Self::Internal(format!("Image processing failed: {}", err)),
		}
	}
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout
		} else {
			Self::NetworkError(err.to_string())
		}
	}
}

#[derive(Serialize)]
struct ErrorBody {
	success: bool,
	message: String,
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status_code();
		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::warn!("request failed: {}", self);
		}
		let body = ErrorBody { success: false, message: self.public_message() };
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
