use super::OsmElement;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// Failures reported by the query service itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
	#[error("query service reported an error: {0}")]
	Remark(String),
}

/// The JSON document returned by an Overpass query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub version: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub generator: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub osm3s: Option<Osm3s>,
	/// Unreadable entries become [`OsmElement::Malformed`]; `null` means no elements.
	#[serde(default, deserialize_with = "deserialize_elements")]
	pub elements: Vec<OsmElement>,
	/// Set by the server when the query failed, e.g. on timeout.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Osm3s {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timestamp_osm_base: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub copyright: Option<String>,
}

fn deserialize_elements<'de, D>(deserializer: D) -> std::result::Result<Vec<OsmElement>, D::Error>
where
	D: Deserializer<'de>,
{
	let entries: Option<Vec<Value>> = Option::deserialize(deserializer)?;
	Ok(entries
		.unwrap_or_default()
		.into_iter()
		.enumerate()
		.map(|(index, entry)| {
			OsmElement::deserialize(entry).unwrap_or_else(|e| {
				log::trace!("skipping malformed element {index}: {e}");
				OsmElement::Malformed
			})
		})
		.collect())
}

impl OsmResponse {
	/// Number of entries that could not be read.
	#[must_use]
	pub fn malformed(&self) -> usize {
		self.elements.iter().filter(|e| matches!(e, OsmElement::Malformed)).count()
	}

	pub fn from_json_str(json: &str) -> Result<OsmResponse> {
		serde_json::from_str(json).context("failed to parse Overpass JSON response")
	}

	pub fn from_reader(reader: impl Read) -> Result<OsmResponse> {
		serde_json::from_reader(reader).context("failed to parse Overpass JSON response")
	}

	/// Returns the elements, or fails with [`QueryError::Remark`] if the server reported an error.
	pub fn into_elements(self) -> Result<Vec<OsmElement>> {
		if let Some(remark) = self.remark {
			return Err(QueryError::Remark(remark).into());
		}
		Ok(self.elements)
	}
}
