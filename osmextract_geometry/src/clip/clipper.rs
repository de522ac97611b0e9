use super::ClipBoundary;
use crate::{
	Coordinates, GeoCollection, GeoFeature, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, ensure};

/// Clips features to an optional [`ClipBoundary`].
///
/// The clipper owns its boundary; it stays in effect until it is replaced or cleared. Without a
/// boundary every feature passes through unchanged.
///
/// ```
/// use osmextract_core::BoundingBox;
/// use osmextract_geometry::{GeoFeature, Geometry, clip::{BoundaryClipper, ClipBoundary}};
///
/// let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
/// let clipper = BoundaryClipper::with_boundary(Some(ClipBoundary::from(bbox)));
/// assert!(clipper.clip_feature(GeoFeature::new(Geometry::new_point(2.0, 0.5))).is_none());
/// assert!(clipper.clip_feature(GeoFeature::new(Geometry::new_point(0.5, 0.5))).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoundaryClipper {
	boundary: Option<ClipBoundary>,
}

impl BoundaryClipper {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_boundary(boundary: Option<ClipBoundary>) -> Self {
		Self { boundary }
	}

	pub fn set_boundary(&mut self, boundary: Option<ClipBoundary>) {
		self.boundary = boundary;
	}

	pub fn clear(&mut self) {
		self.boundary = None;
	}

	#[must_use]
	pub fn boundary(&self) -> Option<&ClipBoundary> {
		self.boundary.as_ref()
	}

	/// Returns the clipped feature, or `None` if nothing of it survives.
	///
	/// Clipping never fails: internal errors drop the feature.
	#[must_use]
	pub fn clip_feature(&self, feature: GeoFeature) -> Option<GeoFeature> {
		let Some(boundary) = &self.boundary else {
			return Some(feature);
		};

		match clip_geometry(boundary, &feature.geometry) {
			Ok(Some(geometry)) => {
				if let Err(error) = geometry.verify() {
					log::trace!("dropping feature {:?} after clipping: {error}", feature.id);
					return None;
				}
				Some(GeoFeature { geometry, ..feature })
			}
			Ok(None) => {
				log::trace!("feature {:?} lies outside the clip boundary", feature.id);
				None
			}
			Err(error) => {
				log::trace!("failed to clip feature {:?}: {error}", feature.id);
				None
			}
		}
	}

	/// Clips every feature, keeping the survivors in their original order.
	#[must_use]
	pub fn clip_collection(&self, collection: GeoCollection) -> GeoCollection {
		if self.boundary.is_none() {
			return collection;
		}
		collection.into_iter().filter_map(|f| self.clip_feature(f)).collect()
	}
}

fn clip_geometry(boundary: &ClipBoundary, geometry: &Geometry) -> Result<Option<Geometry>> {
	Ok(match geometry {
		Geometry::Point(point) => {
			check_finite(&point.0)?;
			boundary.contains(&point.0).then(|| geometry.clone())
		}
		Geometry::LineString(line) => clip_line(boundary, line)?.map(Geometry::LineString),
		Geometry::Polygon(polygon) => clip_polygon(boundary, polygon)?.map(Geometry::Polygon),
		Geometry::MultiPoint(points) => {
			let mut kept = Vec::new();
			for point in &points.0 {
				check_finite(&point.0)?;
				if boundary.contains(&point.0) {
					kept.push(point.clone());
				}
			}
			(!kept.is_empty()).then(|| Geometry::MultiPoint(MultiPointGeometry(kept)))
		}
		Geometry::MultiLineString(lines) => {
			let mut kept = Vec::new();
			for line in &lines.0 {
				if let Some(line) = clip_line(boundary, line)? {
					kept.push(line);
				}
			}
			(!kept.is_empty()).then(|| Geometry::MultiLineString(MultiLineStringGeometry(kept)))
		}
		Geometry::MultiPolygon(polygons) => {
			let mut kept = Vec::new();
			for polygon in &polygons.0 {
				if let Some(polygon) = clip_polygon(boundary, polygon)? {
					kept.push(polygon);
				}
			}
			(!kept.is_empty()).then(|| Geometry::MultiPolygon(MultiPolygonGeometry(kept)))
		}
	})
}

fn check_finite(c: &Coordinates) -> Result<()> {
	ensure!(c.is_finite(), "non-finite coordinate {c:?}");
	Ok(())
}

/// Keeps inside vertices; an outside vertex followed by an inside one is clamped onto the boundary.
fn clip_line(boundary: &ClipBoundary, line: &LineStringGeometry) -> Result<Option<LineStringGeometry>> {
	let coords = &line.0;
	let mut kept = Vec::with_capacity(coords.len());
	for (index, c) in coords.iter().enumerate() {
		check_finite(c)?;
		if boundary.contains(c) {
			kept.push(*c);
		} else if coords.get(index + 1).is_some_and(|next| boundary.contains(next)) {
			kept.push(boundary.clamp(c));
		}
	}
	Ok((kept.len() >= 2).then_some(LineStringGeometry(kept)))
}

/// Filters each ring to its inside vertices and re-closes it; the polygon survives only with its outer ring.
fn clip_polygon(boundary: &ClipBoundary, polygon: &PolygonGeometry) -> Result<Option<PolygonGeometry>> {
	let mut rings = Vec::with_capacity(polygon.0.len());
	for (index, ring) in polygon.0.iter().enumerate() {
		let mut kept = Vec::with_capacity(ring.0.len());
		for c in &ring.0 {
			check_finite(c)?;
			if boundary.contains(c) {
				kept.push(*c);
			}
		}
		let mut ring = RingGeometry(kept);
		ring.close();
		if ring.0.len() >= 4 {
			rings.push(ring);
		} else if index == 0 {
			return Ok(None);
		}
	}
	Ok((!rings.is_empty()).then_some(PolygonGeometry(rings)))
}
