//! Shared setup for the HTTP level tests
//!
//! Every test gets its own SQLite file and dist directory, both removed when
//! the returned [`TestApp`] is dropped.

#![allow(dead_code)]

use axum::{
	body::Body,
	http::{header, Method, Request, StatusCode},
	Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::ServiceExt;

use homedash::{routes, worker::WorkerPool, App, AppBuilder};
use homedash_meta_adapter_sqlite::MetaAdapterSqlite;

pub const AUTH_KEY: &str = "correct horse battery staple";
pub const INDEX_HTML: &str = "<!doctype html><title>homedash</title>";

pub struct TestApp {
	pub app: App,
	pub router: Router,
	_data_dir: TempDir,
	_dist_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
	let data_dir = TempDir::new().expect("Failed to create temp directory");
	let dist_dir = TempDir::new().expect("Failed to create temp directory");
	std::fs::write(dist_dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");

	let meta_adapter = MetaAdapterSqlite::new(data_dir.path()).await.expect("Failed to create adapter");

	let mut builder = AppBuilder::new();
	builder
		.auth_key(AUTH_KEY)
		.dist_dir(dist_dir.path())
		.probe_timeout(Duration::from_secs(2))
		.worker(Arc::new(WorkerPool::new(1)))
		.meta_adapter(Arc::new(meta_adapter));
	let app = builder.build().expect("Failed to build app");
	let router = routes::init(app.clone());

	TestApp { app, router, _data_dir: data_dir, _dist_dir: dist_dir }
}

impl TestApp {
	/// Sends a request and returns the status with the raw body.
	pub async fn call_raw(&self, method: Method, uri: &str, token: Option<&str>, body: Option<String>) -> (StatusCode, Vec<u8>) {
		let mut req = Request::builder().method(method).uri(uri);
		if let Some(token) = token {
			req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
		}
		let req = match body {
			Some(body) => req.header(header::CONTENT_TYPE, "application/json").body(Body::from(body)),
			None => req.body(Body::empty()),
		}
		.unwrap();

		let res = self.router.clone().oneshot(req).await.unwrap();
		let status = res.status();
		let bytes = res.into_body().collect().await.unwrap().to_bytes();
		(status, bytes.to_vec())
	}

	/// Sends a JSON request and parses the JSON response (`Null` when empty).
	pub async fn call(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
		let (status, bytes) = self.call_raw(method, uri, token, body.map(|b| b.to_string())).await;
		let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
		(status, json)
	}

	pub async fn login(&self) -> String {
		let (status, body) =
			self.call(Method::POST, "/api/auth", None, Some(serde_json::json!({ "auth_key": AUTH_KEY }))).await;
		assert_eq!(status, StatusCode::OK);
		body["token"].as_str().unwrap().to_string()
	}
}

// vim: ts=4
