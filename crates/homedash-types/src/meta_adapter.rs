//! Adapter that stores the dashboard's metadata: settings, groups and services.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// Reserved settings key holding the single valid session token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Default ordering weight for groups and services created without one.
pub const DEFAULT_ORDER: i64 = 999;

/// A service (link) on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
	pub id: i64,
	pub name: Box<str>,
	pub url_public: Option<Box<str>>,
	pub url_local: Option<Box<str>>,
	pub icon: Option<Box<str>>,
	#[serde(rename = "order")]
	pub order_num: i64,
}

/// A group of services, as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
	pub id: i64,
	pub name: Box<str>,
	#[serde(rename = "order")]
	pub order_num: i64,
	pub is_nas_service: bool,
	pub services: Vec<Service>,
}

fn default_order() -> i64 {
	DEFAULT_ORDER
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroup {
	pub name: Box<str>,
	#[serde(default = "default_order")]
	pub order: i64,
	#[serde(default)]
	pub is_nas_service: bool,
}

/// Group update. A missing `order` keeps the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroup {
	pub name: Box<str>,
	#[serde(default)]
	pub order: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
	pub group_id: i64,
	pub name: Box<str>,
	#[serde(default)]
	pub url_public: Box<str>,
	#[serde(default)]
	pub url_local: Box<str>,
	#[serde(default)]
	pub icon: Box<str>,
	#[serde(default = "default_order")]
	pub order: i64,
}

/// Service update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
	pub name: Box<str>,
	#[serde(default)]
	pub url_public: Option<Box<str>>,
	#[serde(default)]
	pub url_local: Option<Box<str>>,
	#[serde(default)]
	pub icon: Option<Box<str>>,
	#[serde(default)]
	pub order: Option<i64>,
}

#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	// Settings
	//**********
	/// Reads a setting. Returns `None` if it was never written.
	async fn read_setting(&self, key: &str) -> ClResult<Option<Box<str>>>;

	/// Creates or overwrites a setting in a single statement.
	async fn update_setting(&self, key: &str, value: &str) -> ClResult<()>;

	// Groups
	//********
	/// Lists all groups ordered by `(order, id)`, with their services nested.
	async fn list_groups(&self) -> ClResult<Vec<Group>>;
	async fn create_group(&self, group: &CreateGroup) -> ClResult<i64>;
	async fn update_group(&self, group_id: i64, group: &UpdateGroup) -> ClResult<()>;
	/// Deletes a group together with all of its services.
	async fn delete_group(&self, group_id: i64) -> ClResult<()>;

	// Services
	//**********
	async fn create_service(&self, service: &CreateService) -> ClResult<i64>;
	async fn update_service(&self, service_id: i64, service: &UpdateService) -> ClResult<()>;
	async fn delete_service(&self, service_id: i64) -> ClResult<()>;
}


// vim: ts=4
