use crate::GeoProperties;

/// Tag keys whose presence turns a closed way into an area.
pub const AREA_TAG_KEYS: [&str; 13] = [
	"building",
	"landuse",
	"amenity",
	"leisure",
	"tourism",
	"aeroway",
	"natural",
	"place",
	"shop",
	"office",
	"craft",
	"military",
	"public_transport",
];

const AREA_NATURAL_VALUES: [&str; 4] = ["water", "wood", "scrub", "wetland"];
const AREA_WATERWAY_VALUES: [&str; 2] = ["riverbank", "dock"];

/// Decides whether a way is rendered as a polygon or as a line.
///
/// Open ways and rings with fewer than 4 vertices are never areas. An explicit `area=yes|no`
/// wins over every other rule.
#[must_use]
pub fn is_area(tags: &GeoProperties, is_closed: bool, vertex_count: usize) -> bool {
	if !is_closed || vertex_count < 4 {
		return false;
	}

	match tags.get("area") {
		Some("yes") => return true,
		Some("no") => return false,
		_ => {}
	}

	if AREA_TAG_KEYS.iter().any(|key| tags.contains_key(key)) {
		return true;
	}

	if tags.get("natural").is_some_and(|v| AREA_NATURAL_VALUES.contains(&v)) {
		return true;
	}

	tags.get("waterway").is_some_and(|v| AREA_WATERWAY_VALUES.contains(&v))
}
