use thiserror::Error;

/// Failures of a whole export call. They travel inside `anyhow::Error`; use `downcast_ref` to
/// tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
	#[error("no features left after filtering for geometry types: {requested}")]
	EmptyResult { requested: String },

	#[error("unsupported export format {0:?}, expected one of: geojson, shapefile, kml, gpx, osm")]
	UnsupportedFormat(String),

	#[error("OSM XML export needs the raw elements of an Overpass response")]
	MissingRawElements,
}
