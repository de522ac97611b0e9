use super::GeoFeature;
use crate::geojson::parse_geojson;
use anyhow::Result;
use serde_json::{Value, json};

/// The coordinate reference system every collection is expressed in.
pub const CRS_NAME: &str = "EPSG:4326";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn new() -> Self {
		Self { features: Vec::new() }
	}

	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// Parses a GeoJSON `FeatureCollection` or a single `Feature`.
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// Serialises the collection as GeoJSON, including the fixed `crs` member.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>(),
			"crs": {"type": "name", "properties": {"name": CRS_NAME}},
		})
	}

	pub fn to_json_string(&self, precision: Option<u8>) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.to_json(precision))?)
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;
	use pretty_assertions::assert_eq;

	#[test]
	fn output_contract() {
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point(1.0, 2.0))]);
		assert_eq!(
			collection.to_json(None),
			json!({
				"type": "FeatureCollection",
				"features": [{
					"type": "Feature",
					"geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
					"properties": {}
				}],
				"crs": {"type": "name", "properties": {"name": "EPSG:4326"}}
			})
		);
	}

	#[test]
	fn empty_collection() {
		let collection = GeoCollection::new();
		assert!(collection.is_empty());
		assert_eq!(collection.to_json(None)["features"], json!([]));
	}

	#[test]
	fn json_string_round_trips() {
		let collection: GeoCollection = vec![GeoFeature::new(Geometry::new_point(1.0, 2.0))].into_iter().collect();
		let text = collection.to_json_string(Some(3)).unwrap();
		assert_eq!(GeoCollection::from_json_str(&text).unwrap(), collection);
	}
}
