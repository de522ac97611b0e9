use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered sequence of connected positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// A line needs at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		ensure!(self.0.iter().all(Coordinates::is_finite), "LineString must have finite coordinates");
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coords_bounds(&self.0)
	}

	fn coord_count(&self) -> usize {
		self.0.len()
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<&LineStringGeometry> for geo::LineString<f64> {
	fn from(value: &LineStringGeometry) -> Self {
		geo::LineString::new(value.0.iter().copied().map(geo::Coord::from).collect())
	}
}

super::macros::impl_from_parts!(LineStringGeometry => Coordinates);

pub(crate) fn coords_bounds(coords: &[Coordinates]) -> Option<[f64; 4]> {
	let first = coords.first()?;
	let mut bounds = [first.x(), first.y(), first.x(), first.y()];
	for c in &coords[1..] {
		bounds[0] = bounds[0].min(c.x());
		bounds[1] = bounds[1].min(c.y());
		bounds[2] = bounds[2].max(c.x());
		bounds[3] = bounds[3].max(c.y());
	}
	Some(bounds)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn verify() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());
		assert!(LineStringGeometry::from(&[[0, 0]]).verify().is_err());
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn bounds() {
		let line = LineStringGeometry::from(&[[3, 1], [-2, 5], [4, 0]]);
		assert_eq!(line.compute_bounds(), Some([-2.0, 0.0, 4.0, 5.0]));
		assert_eq!(LineStringGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn coord_json() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 2]]);
		assert_eq!(line.to_coord_json(None), json!([[0.0, 0.0], [1.0, 2.0]]));
		assert_eq!(line.coord_count(), 2);
	}
}
