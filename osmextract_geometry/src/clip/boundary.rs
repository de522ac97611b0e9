use crate::Coordinates;
use osmextract_core::BoundingBox;

/// An axis-aligned rectangle features are clipped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipBoundary {
	pub min_lon: f64,
	pub min_lat: f64,
	pub max_lon: f64,
	pub max_lat: f64,
}

impl ClipBoundary {
	/// Inclusive containment test.
	#[must_use]
	pub fn contains(&self, c: &Coordinates) -> bool {
		c.x() >= self.min_lon && c.x() <= self.max_lon && c.y() >= self.min_lat && c.y() <= self.max_lat
	}

	/// Coordinate-wise clamp onto the rectangle.
	#[must_use]
	pub fn clamp(&self, c: &Coordinates) -> Coordinates {
		Coordinates::new(
			c.x().clamp(self.min_lon, self.max_lon),
			c.y().clamp(self.min_lat, self.max_lat),
		)
	}

	#[must_use]
	pub fn to_bbox(&self) -> BoundingBox {
		BoundingBox {
			north: self.max_lat,
			south: self.min_lat,
			east: self.max_lon,
			west: self.min_lon,
		}
	}
}

impl From<BoundingBox> for ClipBoundary {
	fn from(bbox: BoundingBox) -> Self {
		ClipBoundary {
			min_lon: bbox.west,
			min_lat: bbox.south,
			max_lon: bbox.east,
			max_lat: bbox.north,
		}
	}
}

impl From<&BoundingBox> for ClipBoundary {
	fn from(bbox: &BoundingBox) -> Self {
		ClipBoundary::from(*bbox)
	}
}
