use super::OverpassQuery;
use crate::{config::Config, query::HttpClient};
use anyhow::{Result, bail};
use osmextract_geometry::osm::{OsmElement, OsmResponse};
use std::time::Duration;

/// 429: over the slot quota, 504: server overloaded.
fn is_retryable(status: u16) -> bool {
	status == 429 || status == 504
}

/// Sends [`OverpassQuery`]s to an Overpass interpreter.
#[derive(Clone, Debug)]
pub struct OverpassClient {
	http: HttpClient,
	url: String,
	max_retries: u32,
	retry_delay: Duration,
}

impl OverpassClient {
	pub fn new(config: &Config) -> Result<OverpassClient> {
		let overpass = &config.overpass;
		Ok(OverpassClient {
			http: HttpClient::new(&config.user_agent, overpass.request_timeout())?,
			url: overpass.url.clone(),
			max_retries: overpass.max_retries,
			retry_delay: overpass.retry_delay(),
		})
	}

	/// Runs the query and returns the raw elements.
	///
	/// A `remark` in the response is an error ([`QueryError::Remark`](osmextract_geometry::osm::QueryError)),
	/// never an empty result.
	pub async fn fetch(&self, query: &OverpassQuery) -> Result<Vec<OsmElement>> {
		log::debug!("overpass query: {query}");
		let body = query.to_form_body();
		let mut attempt = 0;

		loop {
			let response = self.http.post_form(&self.url, body.clone()).await?;

			if response.is_success() {
				let parsed = OsmResponse::from_json_str(&response.body)?;
				if let Some(osm3s) = &parsed.osm3s {
					log::debug!("overpass data timestamp: {:?}", osm3s.timestamp_osm_base);
				}
				let elements = parsed.into_elements()?;
				log::info!("received {} elements", elements.len());
				return Ok(elements);
			}

			if is_retryable(response.status) && attempt < self.max_retries {
				attempt += 1;
				log::warn!(
					"overpass answered HTTP {}, retrying in {}s ({attempt}/{})",
					response.status,
					self.retry_delay.as_secs(),
					self.max_retries
				);
				tokio::time::sleep(self.retry_delay).await;
				continue;
			}

			bail!(
				"overpass request failed with HTTP {}: {}",
				response.status,
				response.body_excerpt()
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(429, true)]
	#[case(504, true)]
	#[case(400, false)]
	#[case(500, false)]
	#[case(200, false)]
	fn retry_classification(#[case] status: u16, #[case] expected: bool) {
		assert_eq!(is_retryable(status), expected);
	}

	#[test]
	fn new_from_config() {
		let client = OverpassClient::new(&Config::default()).unwrap();
		assert_eq!(client.url, "https://overpass-api.de/api/interpreter");
		assert_eq!(client.max_retries, 3);
		assert_eq!(client.retry_delay, Duration::from_secs(5));
	}
}
