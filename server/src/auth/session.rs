//! Session manager: secret check, token issue and token verification.

use std::sync::Arc;

use crate::meta_adapter::{MetaAdapter, ACCESS_TOKEN_KEY};
use crate::prelude::*;
use crate::utils::{constant_time_eq, random_token};

pub struct SessionManager {
	meta_adapter: Arc<dyn MetaAdapter>,
	auth_key: Box<str>,
}

impl SessionManager {
	pub fn new(meta_adapter: Arc<dyn MetaAdapter>, auth_key: impl Into<Box<str>>) -> Self {
		Self { meta_adapter, auth_key: auth_key.into() }
	}

	/// Checks the submitted secret and issues a fresh token.
	///
	/// The new token replaces the stored one, so any previously issued token
	/// stops verifying. There is no lockout or attempt counting.
	pub async fn authenticate(&self, secret: &str) -> ClResult<String> {
		if !constant_time_eq(secret, &self.auth_key) {
			warn!("Authentication failed: invalid auth key");
			return Err(Error::Unauthorized);
		}

		let token = random_token();
		self.meta_adapter.update_setting(ACCESS_TOKEN_KEY, &token).await?;
		info!("New session token issued");

		Ok(token)
	}

	/// True iff `token` is non-empty and equals the stored token.
	pub async fn verify(&self, token: &str) -> ClResult<bool> {
		if token.is_empty() {
			return Ok(false);
		}

		let stored = self.meta_adapter.read_setting(ACCESS_TOKEN_KEY).await?;
		Ok(stored.is_some_and(|stored| constant_time_eq(token, &stored)))
	}
}

impl std::fmt::Debug for SessionManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionManager").field("meta_adapter", &self.meta_adapter).finish_non_exhaustive()
	}
}


// vim: ts=4
