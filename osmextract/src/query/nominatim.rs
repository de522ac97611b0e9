//! Place search: turns a free text place name into candidate bounding boxes.

use anyhow::{Context, Result, ensure};
use osmextract_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// One search hit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Place {
	pub display_name: String,
	pub lat: f64,
	pub lon: f64,
	pub bbox: BoundingBox,
}

/// Nominatim sends numbers as strings and the bounding box as `[south, north, west, east]`.
#[derive(Deserialize)]
struct RawPlace {
	display_name: String,
	lat: String,
	lon: String,
	boundingbox: Vec<String>,
}

impl TryFrom<RawPlace> for Place {
	type Error = anyhow::Error;

	fn try_from(raw: RawPlace) -> Result<Place> {
		let number = |text: &str| {
			text.trim()
				.parse::<f64>()
				.with_context(|| format!("{text:?} is not a number"))
		};
		ensure!(
			raw.boundingbox.len() == 4,
			"boundingbox of {:?} must have 4 values",
			raw.display_name
		);
		let [south, north, west, east] = [
			number(&raw.boundingbox[0])?,
			number(&raw.boundingbox[1])?,
			number(&raw.boundingbox[2])?,
			number(&raw.boundingbox[3])?,
		];
		Ok(Place {
			lat: number(&raw.lat)?,
			lon: number(&raw.lon)?,
			bbox: BoundingBox::new(west, south, east, north)
				.with_context(|| format!("invalid bounding box for {:?}", raw.display_name))?,
			display_name: raw.display_name,
		})
	}
}

/// Parses a Nominatim `format=jsonv2` search response. Hits that cannot be used are skipped.
pub fn parse_places(json: &str) -> Result<Vec<Place>> {
	let raw: Vec<RawPlace> = serde_json::from_str(json).context("failed to parse Nominatim response")?;
	Ok(raw
		.into_iter()
		.filter_map(|raw| {
			Place::try_from(raw)
				.map_err(|e| log::debug!("skipping search result: {e:#}"))
				.ok()
		})
		.collect())
}

/// The search URL for `place`.
#[must_use]
pub fn search_url(base_url: &str, place: &str, limit: u32) -> String {
	use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
	format!(
		"{base_url}?q={}&format=jsonv2&limit={limit}",
		utf8_percent_encode(place, NON_ALPHANUMERIC)
	)
}

#[cfg(feature = "http")]
pub use client::NominatimClient;

#[cfg(feature = "http")]
mod client {
	use super::*;
	use crate::{config::Config, query::HttpClient};
	use anyhow::{anyhow, bail};
	use std::time::Duration;

	#[derive(Clone, Debug)]
	pub struct NominatimClient {
		http: HttpClient,
		url: String,
		limit: u32,
	}

	impl NominatimClient {
		pub fn new(config: &Config) -> Result<NominatimClient> {
			Ok(NominatimClient {
				http: HttpClient::new(&config.user_agent, Duration::from_secs(30))?,
				url: config.nominatim.url.clone(),
				limit: config.nominatim.limit,
			})
		}

		pub async fn search(&self, place: &str) -> Result<Vec<Place>> {
			let response = self.http.get(&search_url(&self.url, place, self.limit)).await?;
			if !response.is_success() {
				bail!(
					"place search failed with HTTP {}: {}",
					response.status,
					response.body_excerpt()
				);
			}
			parse_places(&response.body)
		}

		/// The best hit for `place`.
		pub async fn search_first(&self, place: &str) -> Result<Place> {
			self.search(place)
				.await?
				.into_iter()
				.next()
				.ok_or_else(|| anyhow!("no place found for {place:?}"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	const RESPONSE: &str = r#"[
		{
			"place_id": 1,
			"lat": "52.5170365",
			"lon": "13.3888599",
			"display_name": "Berlin, Deutschland",
			"boundingbox": ["52.3382448", "52.6755087", "13.0883450", "13.7611609"]
		},
		{
			"place_id": 2,
			"lat": "x",
			"lon": "13.0",
			"display_name": "Broken",
			"boundingbox": ["1", "2", "3", "4"]
		}
	]"#;

	#[test]
	fn parses_places_and_skips_broken_ones() {
		let places = parse_places(RESPONSE).unwrap();
		assert_eq!(
			places,
			[Place {
				display_name: "Berlin, Deutschland".to_string(),
				lat: 52.5170365,
				lon: 13.3888599,
				bbox: BoundingBox::new(13.0883450, 52.3382448, 13.7611609, 52.6755087).unwrap(),
			}]
		);
	}

	#[test]
	fn empty_result() {
		assert!(parse_places("[]").unwrap().is_empty());
	}

	#[test]
	fn not_json() {
		assert!(parse_places("<html>").is_err());
	}

	#[test]
	fn url() {
		assert_eq!(
			search_url("https://nominatim.openstreetmap.org/search", "Köln Deutz", 3),
			"https://nominatim.openstreetmap.org/search?q=K%C3%B6ln%20Deutz&format=jsonv2&limit=3"
		);
	}
}
