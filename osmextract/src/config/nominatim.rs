use serde::Deserialize;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NominatimConfig {
	/// Search endpoint.
	pub url: String,

	/// Maximum number of places returned for one search.
	pub limit: u32,
}

impl Default for NominatimConfig {
	fn default() -> Self {
		NominatimConfig {
			url: DEFAULT_NOMINATIM_URL.to_string(),
			limit: 5,
		}
	}
}
