//! Access guard for protected routes

use axum::{
	body::Body,
	extract::State,
	http::{header, Request, Response},
	middleware::Next,
};

use crate::prelude::*;

/// Extracts the bearer token. A missing or non-UTF-8 header yields "".
fn bearer_token(req: &Request<Body>) -> &str {
	let auth_header =
		req.headers().get(header::AUTHORIZATION).and_then(|h| h.to_str().ok()).unwrap_or_default();
	auth_header.strip_prefix("Bearer ").unwrap_or(auth_header).trim()
}

pub async fn require_auth(State(app): State<App>, req: Request<Body>, next: Next) -> ClResult<Response<Body>> {
	let token = bearer_token(&req).to_owned();
	if !app.session.verify(&token).await? {
		debug!("Rejected request to {}: invalid token", req.uri().path());
		return Err(Error::Unauthorized);
	}

	Ok(next.run(req).await)
}


// vim: ts=4
