use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry, traits::bounds_of};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "MultiPoint must have at least one point");
		for point in &self.0 {
			point.verify()?;
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
		self.0.len()
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_parts!(MultiPointGeometry => PointGeometry);
