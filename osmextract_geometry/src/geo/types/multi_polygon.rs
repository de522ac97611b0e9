use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, traits::bounds_of};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "MultiPolygon must have at least one polygon");
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|p| p.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	fn coord_count(&self) -> usize {
		self.0.iter().map(GeometryTrait::coord_count).sum()
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_parts!(MultiPolygonGeometry => PolygonGeometry);
