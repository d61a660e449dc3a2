//! Favicon resolver.
//!
//! Derives a fixed, ordered list of candidate locations from a site URL and
//! probes them one by one. The first candidate answering `200 OK` wins.

use reqwest::{header, StatusCode};
use std::time::Duration;
use url::Url;

use crate::prelude::*;
use crate::utils::to_data_uri;

/// Content type assumed when the icon response does not send one.
pub const DEFAULT_ICON_MIME: &str = "image/x-icon";

const ROOT_PATHS: [&str; 5] = [
	"/favicon.ico",
	"/favicon.png",
	"/apple-touch-icon.png",
	"/apple-touch-icon-precomposed.png",
	"/static/favicon.ico",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaviconOutcome {
	/// `data:` URI of the first icon that resolved
	Found(String),
	/// Every candidate failed
	Exhausted,
}

/// Builds the ordered candidate list for `input`.
///
/// The last candidate appends `/favicon.ico` to the input verbatim, without
/// normalizing trailing slashes.
pub fn candidate_urls(input: &str) -> ClResult<Vec<String>> {
	let url = Url::parse(input).map_err(|err| Error::ValidationError(format!("Invalid URL: {}", err)))?;
	let host = url.host_str().ok_or_else(|| Error::ValidationError("URL has no host".into()))?;

	let base = match url.port() {
		Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
		None => format!("{}://{}", url.scheme(), host),
	};

	let mut candidates: Vec<String> = ROOT_PATHS.iter().map(|path| format!("{}{}", base, path)).collect();
	candidates.push(format!("{}/favicon.ico", input));
	Ok(candidates)
}

#[derive(Debug, Clone)]
pub struct FaviconResolver {
	client: reqwest::Client,
}

impl FaviconResolver {
	pub fn new(timeout: Duration) -> ClResult<Self> {
		warn!("Favicon fetching does not verify TLS certificates of probed sites");
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.danger_accept_invalid_certs(true)
			.build()
			.map_err(|err| Error::Internal(format!("Failed to build HTTP client: {}", err)))?;

		Ok(Self { client })
	}

	/// Probes the candidates of `url` sequentially.
	pub async fn resolve(&self, url: &str) -> ClResult<FaviconOutcome> {
		// No scheme or no host (e.g. "example.com") is a 400, nothing is probed
		for candidate in candidate_urls(url)? {
			match self.probe(&candidate).await {
				Ok(Some(icon)) => {
					info!("Found favicon at {}", candidate);
					return Ok(FaviconOutcome::Found(icon));
				}
				Ok(None) => {}
				Err(err) => debug!("Favicon probe {} failed: {}", candidate, err),
			}
		}

		info!("No favicon found for {}", url);
		Ok(FaviconOutcome::Exhausted)
	}

	async fn probe(&self, candidate: &str) -> ClResult<Option<String>> {
		let res = self.client.get(candidate).send().await?;
		if res.status() != StatusCode::OK {
			debug!("Favicon probe {} returned {}", candidate, res.status());
			return Ok(None);
		}

		let mime = res
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.unwrap_or(DEFAULT_ICON_MIME)
			.to_string();
		let body = res.bytes().await?;

		Ok(Some(to_data_uri(&mime, body)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_candidate_order() {
		let candidates = candidate_urls("https://example.com/app").unwrap();
		assert_eq!(
			candidates,
			[
				"https://example.com/favicon.ico",
				"https://example.com/favicon.png",
				"https://example.com/apple-touch-icon.png",
				"https://example.com/apple-touch-icon-precomposed.png",
				"https://example.com/static/favicon.ico",
				"https://example.com/app/favicon.ico",
			]
		);
	}

	#[test]
	fn test_candidate_keeps_explicit_port() {
		let candidates = candidate_urls("http://192.168.1.10:8096").unwrap();
		assert_eq!(candidates[0], "http://192.168.1.10:8096/favicon.ico");
	}

	#[test]
	fn test_last_candidate_is_literal() {
		let candidates = candidate_urls("http://nas.local/").unwrap();
		assert_eq!(candidates[5], "http://nas.local//favicon.ico");
	}

	#[test]
	fn test_invalid_urls_are_rejected() {
		assert!(matches!(candidate_urls("not a url"), Err(Error::ValidationError(_))));
		assert!(matches!(candidate_urls(""), Err(Error::ValidationError(_))));
		assert!(matches!(candidate_urls("mailto:someone@example.com"), Err(Error::ValidationError(_))));
		// scheme-less inputs
		assert!(matches!(candidate_urls("example.com"), Err(Error::ValidationError(_))));
		assert!(matches!(candidate_urls("localhost:8080"), Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
