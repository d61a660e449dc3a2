use axum::{
	extract::DefaultBodyLimit,
	middleware,
	routing::{get, post, put},
	Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth::{self, middleware::require_auth};
use crate::prelude::*;
use crate::{dashboard, icon, settings, system};

fn init_api(app: App) -> Router {
	let protected_router = Router::new()
		.route("/api/system-info", get(system::handler::get_system_info))
		.route("/api/groups", get(dashboard::handler::list_groups).post(dashboard::handler::post_group))
		.route("/api/groups/{id}", put(dashboard::handler::put_group).delete(dashboard::handler::delete_group))
		.route("/api/services", post(dashboard::handler::post_service))
		.route("/api/services/{id}", put(dashboard::handler::put_service).delete(dashboard::handler::delete_service))
		.route("/api/fetch-icon", post(icon::handler::post_fetch_icon))
		.route("/api/upload-icon", post(icon::handler::post_upload_icon))
		.route("/api/settings", get(settings::handler::get_settings).post(settings::handler::post_settings))
		.route_layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let public_router = Router::new()
		.route("/api/auth", post(auth::handler::post_auth))
		.route("/api/verify", post(auth::handler::post_verify));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.with_state(app)
}

pub fn init(app: App) -> Router {
	let max_body_size = app.opts.max_body_size;
	let static_files = ServeDir::new(&*app.opts.dist_dir);

	init_api(app)
		.fallback_service(static_files)
		.layer(DefaultBodyLimit::max(max_body_size))
		.layer(TraceLayer::new_for_http())
}

// vim: ts=4
