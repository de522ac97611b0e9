use crate::BoundingBox;
use serde::Serialize;
use std::fmt::Display;

/// Kilometres per degree of latitude used by the equirectangular approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Boxes at or above this area (km²) are reported as [`AreaSeverity::Warn`].
pub const WARN_AREA_KM2: f64 = 25.0;

/// Boxes at or above this area (km²) are reported as [`AreaSeverity::Danger`].
pub const DANGER_AREA_KM2: f64 = 75.0;

/// Approximates the surface area of a bounding box in km².
///
/// The latitude span is scaled by 111 km per degree; the longitude span additionally by the
/// cosine of the mean latitude. The error grows near the poles and for very large boxes.
#[must_use]
pub fn area_km2(bbox: &BoundingBox) -> f64 {
	let lat_span_km = (bbox.north - bbox.south) * KM_PER_DEGREE;
	let mean_lat = (bbox.north + bbox.south) / 2.0;
	let lng_span_km = (bbox.east - bbox.west) * KM_PER_DEGREE * mean_lat.to_radians().cos();
	(lat_span_km * lng_span_km).abs()
}

/// Formats an area given in km² using m², ha or km², whichever reads best.
#[must_use]
pub fn format_area(area_km2: f64) -> String {
	if area_km2 < 0.01 {
		format!("{:.0} m²", area_km2 * 1_000_000.0)
	} else if area_km2 < 1.0 {
		format!("{:.2} ha", area_km2 * 100.0)
	} else {
		format!("{area_km2:.2} km²")
	}
}

/// How risky it is to request data for an area of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaSeverity {
	Ok,
	Warn,
	Danger,
}

impl AreaSeverity {
	#[must_use]
	pub fn from_area(area_km2: f64) -> Self {
		if area_km2 < WARN_AREA_KM2 {
			AreaSeverity::Ok
		} else if area_km2 < DANGER_AREA_KM2 {
			AreaSeverity::Warn
		} else {
			AreaSeverity::Danger
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			AreaSeverity::Ok => "ok",
			AreaSeverity::Warn => "warn",
			AreaSeverity::Danger => "danger",
		}
	}
}

impl Display for AreaSeverity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	fn bbox(west: f64, south: f64, east: f64, north: f64) -> BoundingBox {
		BoundingBox {
			north,
			south,
			east,
			west,
		}
	}

	#[test]
	fn one_degree_at_equator() {
		assert_relative_eq!(area_km2(&bbox(0.0, 0.0, 1.0, 1.0)), 12320.531, epsilon = 0.001);
	}

	#[test]
	fn shrinks_with_latitude() {
		let equator = area_km2(&bbox(0.0, 0.0, 0.1, 0.1));
		let north = area_km2(&bbox(0.0, 60.0, 0.1, 60.1));
		assert!(north < equator);
		assert_relative_eq!(north / equator, 60.05f64.to_radians().cos() / 0.05f64.to_radians().cos(), epsilon = 1e-9);
	}

	#[rstest]
	#[case(bbox(13.0, 52.0, 13.0, 53.0))]
	#[case(bbox(13.0, 52.0, 14.0, 52.0))]
	#[case(bbox(0.0, 0.0, 0.0, 0.0))]
	fn zero_span_is_zero(#[case] b: BoundingBox) {
		assert_eq!(area_km2(&b), 0.0);
	}

	#[test]
	fn never_negative() {
		assert!(area_km2(&bbox(14.0, 52.0, 13.0, 53.0)) > 0.0);
		assert!(area_km2(&bbox(-10.0, -80.0, 10.0, 80.0)) > 0.0);
	}

	#[rstest]
	#[case(0.0, "0 m²")]
	#[case(0.005, "5000 m²")]
	#[case(0.01, "1.00 ha")]
	#[case(0.5, "50.00 ha")]
	#[case(1.0, "1.00 km²")]
	#[case(123.456, "123.46 km²")]
	fn format(#[case] area: f64, #[case] expected: &str) {
		assert_eq!(format_area(area), expected);
	}

	#[rstest]
	#[case(0.0, AreaSeverity::Ok)]
	#[case(24.99, AreaSeverity::Ok)]
	#[case(25.0, AreaSeverity::Warn)]
	#[case(74.99, AreaSeverity::Warn)]
	#[case(75.0, AreaSeverity::Danger)]
	#[case(10_000.0, AreaSeverity::Danger)]
	fn severity(#[case] area: f64, #[case] expected: AreaSeverity) {
		assert_eq!(AreaSeverity::from_area(area), expected);
	}

	#[test]
	fn severity_display() {
		assert_eq!(AreaSeverity::Warn.to_string(), "warn");
	}
}
