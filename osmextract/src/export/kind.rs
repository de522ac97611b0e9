use super::ExportError;
use anyhow::{Result, bail};
use osmextract_geometry::{GeoCollection, Geometry};
use std::{fmt::Display, str::FromStr};

/// Coarse geometry kinds used for filtering and for splitting shapefile layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryKind {
	Point,
	LineString,
	Polygon,
}

impl GeometryKind {
	pub const ALL: [GeometryKind; 3] = [GeometryKind::Point, GeometryKind::LineString, GeometryKind::Polygon];

	/// The kind a geometry falls into; multi geometries map onto their single counterpart.
	#[must_use]
	pub fn of(geometry: &Geometry) -> GeometryKind {
		match geometry {
			Geometry::Point(_) | Geometry::MultiPoint(_) => GeometryKind::Point,
			Geometry::LineString(_) | Geometry::MultiLineString(_) => GeometryKind::LineString,
			Geometry::Polygon(_) | Geometry::MultiPolygon(_) => GeometryKind::Polygon,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::LineString => "LineString",
			GeometryKind::Polygon => "Polygon",
		}
	}

	/// Suffix of the shapefile layer holding this kind.
	#[must_use]
	pub fn layer_suffix(&self) -> &'static str {
		match self {
			GeometryKind::Point => "points",
			GeometryKind::LineString => "lines",
			GeometryKind::Polygon => "polygons",
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeometryKind {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> Result<Self> {
		Ok(match text.trim().to_ascii_lowercase().as_str() {
			"point" | "points" | "multipoint" => GeometryKind::Point,
			"line" | "lines" | "linestring" | "linestrings" | "multilinestring" => GeometryKind::LineString,
			"polygon" | "polygons" | "area" | "areas" | "multipolygon" => GeometryKind::Polygon,
			_ => bail!("unknown geometry type {text:?}, expected point, line or polygon"),
		})
	}
}

/// Keeps only the features whose geometry falls into one of `kinds`.
///
/// An empty `kinds` list disables the filter. Otherwise an empty result is an
/// [`ExportError::EmptyResult`].
pub fn filter_by_geometry(collection: GeoCollection, kinds: &[GeometryKind]) -> Result<GeoCollection> {
	if kinds.is_empty() {
		return Ok(collection);
	}

	let before = collection.len();
	let filtered: GeoCollection = collection
		.into_iter()
		.filter(|feature| kinds.contains(&GeometryKind::of(&feature.geometry)))
		.collect();
	log::debug!("geometry filter {kinds:?} kept {} of {before} features", filtered.len());

	if filtered.is_empty() {
		let requested = kinds.iter().map(GeometryKind::as_str).collect::<Vec<_>>().join(", ");
		return Err(ExportError::EmptyResult { requested }.into());
	}
	Ok(filtered)
}

#[cfg(test)]
mod tests {
	use super::*;
	use osmextract_geometry::GeoFeature;
	use rstest::rstest;

	fn collection() -> GeoCollection {
		GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_point(1.0, 1.0)),
			GeoFeature::new(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]])),
			GeoFeature::new(Geometry::new_multi_point(vec![[2.0, 2.0], [3.0, 3.0]])),
			GeoFeature::new(Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 0.0]]])),
		])
	}

	#[rstest]
	#[case("point", GeometryKind::Point)]
	#[case("Points", GeometryKind::Point)]
	#[case("LineString", GeometryKind::LineString)]
	#[case("lines", GeometryKind::LineString)]
	#[case(" POLYGON ", GeometryKind::Polygon)]
	#[case("multipolygon", GeometryKind::Polygon)]
	fn parse(#[case] text: &str, #[case] expected: GeometryKind) {
		assert_eq!(text.parse::<GeometryKind>().unwrap(), expected);
	}

	#[test]
	fn parse_unknown() {
		assert!("circle".parse::<GeometryKind>().is_err());
	}

	#[test]
	fn no_filter_keeps_everything() {
		assert_eq!(filter_by_geometry(collection(), &[]).unwrap().len(), 4);
	}

	#[test]
	fn multi_geometries_map_to_coarse_kinds() {
		let points = filter_by_geometry(collection(), &[GeometryKind::Point]).unwrap();
		let types: Vec<&str> = points.iter().map(|f| f.geometry.type_name()).collect();
		assert_eq!(types, ["Point", "MultiPoint"]);

		let lines = filter_by_geometry(collection(), &[GeometryKind::LineString, GeometryKind::Point]).unwrap();
		assert_eq!(lines.len(), 4);
	}

	#[test]
	fn empty_result() {
		let err = filter_by_geometry(collection(), &[GeometryKind::Polygon]).unwrap_err();
		assert_eq!(
			err.downcast_ref::<ExportError>(),
			Some(&ExportError::EmptyResult {
				requested: "Polygon".to_string()
			})
		);
	}

	#[test]
	fn empty_collection_without_filter_is_fine() {
		assert!(filter_by_geometry(GeoCollection::new(), &[]).unwrap().is_empty());
		assert!(filter_by_geometry(GeoCollection::new(), &[GeometryKind::Point]).is_err());
	}
}
