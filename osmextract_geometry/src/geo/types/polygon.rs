use super::{CompositeGeometryTrait, GeometryTrait, RingGeometry, traits::bounds_of};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// An outer ring followed by optional holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|r| r.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	fn coord_count(&self) -> usize {
		self.0.iter().map(GeometryTrait::coord_count).sum()
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(value: &PolygonGeometry) -> Self {
		let mut rings = value.0.iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
		geo::Polygon::new(exterior, rings.collect())
	}
}

super::macros::impl_from_parts!(PolygonGeometry => RingGeometry);
