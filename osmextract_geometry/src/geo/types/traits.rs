use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of all geometry primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks structural validity, e.g. enough points or closed rings.
	fn verify(&self) -> Result<()>;

	/// The GeoJSON `coordinates` member, optionally rounded to `precision` decimals.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// `[min_lon, min_lat, max_lon, max_lat]` over all coordinates, `None` when empty.
	fn compute_bounds(&self) -> Option<[f64; 4]>;

	/// Number of coordinates, including repeated closing points of rings.
	fn coord_count(&self) -> usize;
}

/// Geometries that are collections of simpler elements, e.g. a polygon made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges two optional bounds.
pub(crate) fn merge_bounds(a: Option<[f64; 4]>, b: Option<[f64; 4]>) -> Option<[f64; 4]> {
	match (a, b) {
		(Some(a), Some(b)) => Some([a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]),
		(a, None) => a,
		(None, b) => b,
	}
}

/// Bounds over a list of parts.
pub(crate) fn bounds_of<'a, G: GeometryTrait + 'a>(parts: impl IntoIterator<Item = &'a G>) -> Option<[f64; 4]> {
	parts
		.into_iter()
		.fold(None, |acc, part| merge_bounds(acc, part.compute_bounds()))
}
