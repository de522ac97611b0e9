use anyhow::Result;
use osmextract_geometry::GeoCollection;

pub fn encode_geojson(collection: &GeoCollection, precision: Option<u8>) -> Result<Vec<u8>> {
	let mut text = collection.to_json_string(precision)?;
	text.push('\n');
	Ok(text.into_bytes())
}

#[cfg(test)]
mod tests {
	use super::*;
	use osmextract_geometry::{GeoFeature, Geometry};
	use pretty_assertions::assert_eq;
	use serde_json::{Value, json};

	#[test]
	fn feature_collection_with_crs() {
		let mut feature = GeoFeature::new(Geometry::new_point(13.123456789, 52.5));
		feature.set_property("name", "Mitte");
		let bytes = encode_geojson(&GeoCollection::from(vec![feature]), Some(3)).unwrap();
		let value: Value = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(
			value,
			json!({
				"type": "FeatureCollection",
				"features": [{
					"type": "Feature",
					"geometry": {"type": "Point", "coordinates": [13.123, 52.5]},
					"properties": {"name": "Mitte"}
				}],
				"crs": {"type": "name", "properties": {"name": "EPSG:4326"}}
			})
		);
	}
}
