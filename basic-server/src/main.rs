use std::{env, path, process::ExitCode, sync::Arc};
use tracing::error;

use homedash::{worker::WorkerPool, AppBuilder};
use homedash_meta_adapter_sqlite::MetaAdapterSqlite;

pub struct Config {
	pub auth_key: Option<String>,
	pub listen: String,
	pub db_dir: path::PathBuf,
	pub dist_dir: path::PathBuf,
	pub workers: usize,
}

impl Config {
	fn from_env() -> Self {
		Config {
			auth_key: env::var("AUTH_KEY").ok(),
			listen: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
			db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			dist_dir: path::PathBuf::from(env::var("DIST_DIR").unwrap_or_else(|_| "./dist".to_string())),
			workers: env::var("WORKERS").ok().and_then(|w| w.parse().ok()).unwrap_or(2),
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let config = Config::from_env();

	let meta_adapter = match MetaAdapterSqlite::new(&config.db_dir).await {
		Ok(adapter) => Arc::new(adapter),
		Err(err) => {
			eprintln!("FATAL: Cannot open database in {}: {}", config.db_dir.display(), err);
			return ExitCode::FAILURE;
		}
	};

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.dist_dir(config.dist_dir)
		.worker(Arc::new(WorkerPool::new(config.workers)))
		.meta_adapter(meta_adapter);
	if let Some(auth_key) = config.auth_key {
		builder.auth_key(auth_key);
	}

	if let Err(err) = builder.run().await {
		error!("FATAL: {}", err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}

// vim: ts=4
