//! App state type

use std::{
	path::{Path, PathBuf},
	sync::Arc,
	time::Duration,
};

use crate::auth::SessionManager;
use crate::icon::FaviconResolver;
use crate::meta_adapter::MetaAdapter;
use crate::prelude::*;
use crate::routes;
use crate::worker::WorkerPool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Secret used when none is configured. Only suitable for local testing.
pub const DEFAULT_AUTH_KEY: &str = "12345";

/// Request body limit. Uploaded icons arrive base64-encoded inside JSON.
pub const DEFAULT_MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Per-candidate timeout while probing for a favicon.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AppState {
	pub worker: Arc<WorkerPool>,
	pub opts: AppBuilderOpts,
	pub session: SessionManager,
	pub favicon: FaviconResolver,

	pub meta_adapter: Arc<dyn MetaAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	auth_key: Option<Box<str>>,
	pub dist_dir: Box<Path>,
	pub max_body_size: usize,
	pub probe_timeout: Duration,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	worker: Option<Arc<WorkerPool>>,
	meta_adapter: Option<Arc<dyn MetaAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "0.0.0.0:5000".into(),
				auth_key: None,
				dist_dir: PathBuf::from("./dist").into(),
				max_body_size: DEFAULT_MAX_BODY_SIZE,
				probe_timeout: PROBE_TIMEOUT,
			},
			worker: None,
			meta_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn auth_key(&mut self, auth_key: impl Into<Box<str>>) -> &mut Self { self.opts.auth_key = Some(auth_key.into()); self }
	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<Path>>) -> &mut Self { self.opts.dist_dir = dist_dir.into(); self }
	pub fn max_body_size(&mut self, max_body_size: usize) -> &mut Self { self.opts.max_body_size = max_body_size; self }
	pub fn probe_timeout(&mut self, probe_timeout: Duration) -> &mut Self { self.opts.probe_timeout = probe_timeout; self }
	pub fn worker(&mut self, worker: Arc<WorkerPool>) -> &mut Self { self.worker = Some(worker); self }

	// Adapters
	pub fn meta_adapter(&mut self, meta_adapter: Arc<dyn MetaAdapter>) -> &mut Self { self.meta_adapter = Some(meta_adapter); self }

	/// Assemble the shared state without binding a socket.
	pub fn build(self) -> ClResult<App> {
		let meta_adapter =
			self.meta_adapter.ok_or_else(|| Error::Internal("no meta adapter configured".into()))?;
		let worker = self.worker.unwrap_or_else(|| Arc::new(WorkerPool::new(2)));

		let auth_key = match self.opts.auth_key.clone() {
			Some(key) if !key.is_empty() => key,
			_ => {
				warn!("No auth key configured, falling back to the default one. Do not expose this instance!");
				DEFAULT_AUTH_KEY.into()
			}
		};

		let session = SessionManager::new(meta_adapter.clone(), auth_key);
		let favicon = FaviconResolver::new(self.opts.probe_timeout)?;

		Ok(Arc::new(AppState { worker, opts: self.opts, session, favicon, meta_adapter }))
	}

	pub async fn run(self) -> ClResult<()> {
		let _ignore = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		info!(" _                              _           _");
		info!("| |__   ___  _ __ ___   ___  __| | __ _ ___| |__");
		info!("| '_ \\ / _ \\| '_ ` _ \\ / _ \\/ _` |/ _` / __| '_ \\");
		info!("| | | | (_) | | | | | |  __/ (_| | (_| \\__ \\ | | |");
		info!("|_| |_|\\___/|_| |_| |_|\\___|\\__,_|\\__,_|___/_| |_|");
		info!("V{}", VERSION);
		info!("");

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on HTTP {}", app.opts.listen);
		info!("Serving static files from {}", app.opts.dist_dir.display());
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
