use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
	/// Decimal places kept in GeoJSON, KML and GPX coordinates. `null` keeps full precision.
	pub precision: Option<u8>,

	/// Adds `osm_type` and `osm_id` properties to every converted feature.
	pub include_osm_ids: bool,
}

impl Default for ExportConfig {
	fn default() -> Self {
		ExportConfig {
			precision: Some(7),
			include_osm_ids: true,
		}
	}
}
