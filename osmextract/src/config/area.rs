use osmextract_core::math::DANGER_AREA_KM2;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AreaConfig {
	/// Boxes larger than this (km²) are refused by `fetch` unless `--force` is given.
	pub max_km2: f64,
}

impl AreaConfig {
	#[must_use]
	pub fn allows(&self, area_km2: f64) -> bool {
		area_km2 < self.max_km2
	}
}

impl Default for AreaConfig {
	fn default() -> Self {
		AreaConfig {
			max_km2: DANGER_AREA_KM2,
		}
	}
}
