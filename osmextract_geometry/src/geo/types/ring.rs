use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, linestring::coords_bounds};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A closed sequence of positions bounding a polygon; the first and last point are identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Appends the first point if the ring is not closed yet.
	pub fn close(&mut self) {
		if let Some(first) = self.0.first().copied()
			&& self.0.last() != Some(&first)
		{
			self.0.push(first);
		}
	}
}

impl GeometryTrait for RingGeometry {
	/// A ring needs at least 4 points (3 distinct plus the closing one) and must be closed.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.is_closed(), "Ring must be closed");
		ensure!(self.0.iter().all(Coordinates::is_finite), "Ring must have finite coordinates");
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

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(value: &RingGeometry) -> Self {
		geo::LineString::new(value.0.iter().copied().map(geo::Coord::from).collect())
	}
}

super::macros::impl_from_parts!(RingGeometry => Coordinates);
