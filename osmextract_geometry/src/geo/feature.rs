use super::*;
use serde_json::{Map, Value};

/// A geometry with its properties, the unit of a [`GeoCollection`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<String>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn with_properties(mut self, properties: GeoProperties) -> Self {
		self.properties = properties;
		self
	}

	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.properties.insert(key, value);
	}

	/// Serialises the feature as a GeoJSON `Feature` object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".into(), Value::from("Feature"));
		if let Some(id) = &self.id {
			obj.insert("id".into(), Value::from(id.as_str()));
		}
		obj.insert("geometry".into(), self.geometry.to_json(precision));
		obj.insert(
			"properties".into(),
			Value::Object(
				self
					.properties
					.iter()
					.map(|(k, v)| (k.clone(), Value::from(v.as_str())))
					.collect(),
			),
		);
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some("node/13".to_string()),
			geometry: Geometry::new_point(13.4, 52.5),
			properties: GeoProperties::from(vec![("name", "Nice"), ("amenity", "cafe")]),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn to_json() {
		assert_eq!(
			GeoFeature::new_example().to_json(None),
			json!({
				"type": "Feature",
				"id": "node/13",
				"geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
				"properties": {"amenity": "cafe", "name": "Nice"}
			})
		);
	}

	#[test]
	fn without_id() {
		let mut feature = GeoFeature::new(Geometry::new_point(0.0, 0.0));
		feature.set_property("k", "v");
		let json = feature.to_json(None);
		assert!(json.get("id").is_none());
		assert_eq!(json["properties"], json!({"k": "v"}));
	}
}
