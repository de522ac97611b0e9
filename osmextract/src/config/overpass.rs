use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OverpassConfig {
	/// Interpreter endpoint queries are POSTed to.
	pub url: String,

	/// Server side timeout written into the query, also used for the HTTP request.
	pub timeout_seconds: u32,

	/// How often a request is repeated after HTTP 429 or 504.
	pub max_retries: u32,

	/// Fixed pause between two attempts.
	pub retry_delay_seconds: u64,
}

impl OverpassConfig {
	#[must_use]
	pub fn retry_delay(&self) -> Duration {
		Duration::from_secs(self.retry_delay_seconds)
	}

	/// The HTTP timeout leaves the server some headroom beyond its own query timeout.
	#[must_use]
	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(u64::from(self.timeout_seconds) + 30)
	}
}

impl Default for OverpassConfig {
	fn default() -> Self {
		OverpassConfig {
			url: DEFAULT_OVERPASS_URL.to_string(),
			timeout_seconds: 180,
			max_retries: 3,
			retry_delay_seconds: 5,
		}
	}
}
