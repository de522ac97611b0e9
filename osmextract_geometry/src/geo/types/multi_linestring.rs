use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, traits::bounds_of};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// Several independent lines, e.g. the member ways of a relation.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "MultiLineString must have at least one line");
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|l| l.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	fn coord_count(&self) -> usize {
		self.0.iter().map(GeometryTrait::coord_count).sum()
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_from_parts!(MultiLineStringGeometry => LineStringGeometry);
