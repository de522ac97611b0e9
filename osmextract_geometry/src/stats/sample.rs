use crate::{GeoCollection, GeoFeature, Geometry};

/// Picks up to `limit` features, taking `ceil(limit / 3)` each of Points, LineStrings and
/// Polygons (in collection order) so that small previews show every kind present.
#[must_use]
pub fn sample(collection: &GeoCollection, limit: usize) -> Vec<GeoFeature> {
	let per_kind = limit.div_ceil(3);
	let kinds: [fn(&Geometry) -> bool; 3] = [
		|g| matches!(g, Geometry::Point(_)),
		|g| matches!(g, Geometry::LineString(_)),
		|g| matches!(g, Geometry::Polygon(_)),
	];

	let mut result: Vec<GeoFeature> = kinds
		.iter()
		.flat_map(|is_kind| collection.iter().filter(move |f| is_kind(&f.geometry)).take(per_kind))
		.cloned()
		.collect();
	result.truncate(limit);
	result
}
