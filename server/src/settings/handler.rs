use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{DEFAULT_NETWORK_MODE, FORCE_NETWORK_MODE_KEY};
use crate::extract::Json;
use crate::prelude::*;
use crate::types::{ack, Ack};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
	force_network_mode: Option<Box<str>>,
}

/// # GET /api/settings
pub async fn get_settings(State(app): State<App>) -> ClResult<Json<Settings>> {
	let mode = app.meta_adapter.read_setting(FORCE_NETWORK_MODE_KEY).await?;
	let mode = mode.filter(|m| !m.is_empty()).unwrap_or_else(|| DEFAULT_NETWORK_MODE.into());

	Ok(Json(Settings { force_network_mode: Some(mode) }))
}

/// # POST /api/settings
///
/// Only the keys present in the body are written.
pub async fn post_settings(State(app): State<App>, Json(settings): Json<Settings>) -> ClResult<Json<Ack>> {
	if let Some(mode) = settings.force_network_mode {
		app.meta_adapter.update_setting(FORCE_NETWORK_MODE_KEY, &mode).await?;
		info!("Network mode set to {}", mode);
	}

	Ok(ack())
}

// vim: ts=4
