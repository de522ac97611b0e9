use super::*;
use anyhow::Result;
use serde_json::{Value, json};
use std::fmt::Debug;

/// Closed set of geometry shapes a feature can carry.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	#[must_use]
	pub fn new_point(lon: f64, lat: f64) -> Self {
		Self::Point(PointGeometry::from([lon, lat]))
	}
	pub fn new_line_string(value: Vec<[f64; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point(value: Vec<[f64; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	/// The GeoJSON type name.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	/// `[min_lon, min_lat, max_lon, max_lat]`, `None` if the geometry has no coordinates.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}

	#[must_use]
	pub fn coord_count(&self) -> usize {
		match self {
			Geometry::Point(g) => g.coord_count(),
			Geometry::LineString(g) => g.coord_count(),
			Geometry::Polygon(g) => g.coord_count(),
			Geometry::MultiPoint(g) => g.coord_count(),
			Geometry::MultiLineString(g) => g.coord_count(),
			Geometry::MultiPolygon(g) => g.coord_count(),
		}
	}

	#[must_use]
	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		}
	}

	/// `{"type": ..., "coordinates": ...}`
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		json!({
			"type": self.type_name(),
			"coordinates": self.to_coord_json(precision),
		})
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn type_names() {
		assert_eq!(Geometry::new_point(0.0, 0.0).type_name(), "Point");
		assert_eq!(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]).type_name(), "LineString");
		assert_eq!(Geometry::new_multi_polygon(vec![]).type_name(), "MultiPolygon");
	}

	#[test]
	fn to_json() {
		let geometry = Geometry::new_line_string(vec![[0.0, 0.0], [1.5, 2.25]]);
		assert_eq!(
			geometry.to_json(None),
			json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.5, 2.25]]})
		);
	}

	#[test]
	fn debug() {
		let geometry = Geometry::new_point(1.0, 2.0);
		assert_eq!(format!("{geometry:?}"), "Point([1.0, 2.0])");
	}

	#[test]
	fn bounds_of_nested() {
		let geometry = Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 3.0]], vec![[-2.0, 1.0], [0.5, 0.5]]]);
		assert_eq!(geometry.compute_bounds(), Some([-2.0, 0.0, 1.0, 3.0]));
		assert_eq!(geometry.coord_count(), 4);
		assert_eq!(Geometry::new_multi_point(vec![]).compute_bounds(), None);
	}
}
