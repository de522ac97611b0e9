//! The steps between raw input and an encoded file: convert, clip, filter, export.

use crate::export::{ExportFormat, ExportOptions, ExportOutput, GeometryKind, export, filter_by_geometry};
use anyhow::{Context, Result, bail};
use osmextract_core::{BoundingBox, progress::ProgressSink};
use osmextract_geometry::{
	GeoCollection,
	clip::{BoundaryClipper, ClipBoundary},
	geojson::parse_geojson_value,
	osm::{ConvertOptions, OsmConverter, OsmElement, OsmResponse},
};
use serde_json::Value;
use std::{fs, path::Path};

/// Data the pipeline can start from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
	/// Raw elements of an Overpass response.
	Osm(Vec<OsmElement>),
	/// An uploaded GeoJSON `FeatureCollection` or `Feature`.
	GeoJson(GeoCollection),
}

impl Input {
	/// Detects the kind of document by its top level keys.
	pub fn from_json_str(text: &str) -> Result<Input> {
		let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
		let Some(object) = value.as_object() else {
			bail!("input must be a JSON object");
		};

		if object.contains_key("elements") || object.contains_key("osm3s") || object.contains_key("remark") {
			let response: OsmResponse =
				serde_json::from_value(value).context("failed to parse Overpass JSON response")?;
			Ok(Input::Osm(response.into_elements()?))
		} else if object.contains_key("type") {
			Ok(Input::GeoJson(parse_geojson_value(&value)?))
		} else {
			bail!("input is neither an Overpass JSON response nor GeoJSON")
		}
	}

	pub fn from_path(path: &Path) -> Result<Input> {
		let text = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
		Input::from_json_str(&text).with_context(|| format!("failed to load {path:?}"))
	}

	/// Turns the input into a clipped collection; raw elements are handed back for OSM XML.
	pub fn into_collection(
		self,
		options: ConvertOptions,
		progress: &mut dyn ProgressSink,
	) -> (GeoCollection, Option<Vec<OsmElement>>) {
		match self {
			Input::Osm(elements) => {
				let mut converter = OsmConverter::new(options);
				let collection = converter.convert(&elements, progress);
				let summary = converter.summary();
				log::info!(
					"converted {} elements into {} features ({} skipped, {} clipped)",
					elements.len(),
					collection.len(),
					summary.skipped,
					summary.clipped
				);
				(collection, Some(elements))
			}
			Input::GeoJson(collection) => {
				let before = collection.len();
				let collection = BoundaryClipper::with_boundary(options.clip).clip_collection(collection);
				log::info!("{} of {before} features kept after clipping", collection.len());
				(collection, None)
			}
		}
	}
}

/// What to produce from an [`Input`].
#[derive(Clone, Debug)]
pub struct ExtractSettings {
	pub format: ExportFormat,
	/// Coarse kinds to keep; empty keeps everything.
	pub geometry: Vec<GeometryKind>,
	pub clip: Option<ClipBoundary>,
	pub include_osm_ids: bool,
	pub precision: Option<u8>,
	/// The requested area, reported in metadata.
	pub bbox: Option<BoundingBox>,
	/// File name stem, sanitized by the exporter.
	pub name: String,
}

/// Converts, clips, filters and encodes `input`.
pub fn extract(input: Input, settings: &ExtractSettings, progress: &mut dyn ProgressSink) -> Result<ExportOutput> {
	let options = ConvertOptions {
		clip: settings.clip,
		include_osm_ids: settings.include_osm_ids,
	};
	let (collection, elements) = input.into_collection(options, progress);
	let collection = filter_by_geometry(collection, &settings.geometry)?;

	export(
		settings.format,
		&collection,
		elements.as_deref(),
		&settings.name,
		&ExportOptions {
			precision: settings.precision,
			bbox: settings.bbox,
		},
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::export::ExportError;
	use osmextract_core::progress::ProgressDrain;
	use osmextract_geometry::osm::QueryError;

	const OVERPASS: &str = r#"{
		"version": 0.6,
		"elements": [
			{"type": "node", "id": 1, "lat": 0.0, "lon": 0.0},
			{"type": "node", "id": 2, "lat": 0.0, "lon": 1.0},
			{"type": "node", "id": 3, "lat": 1.0, "lon": 1.0},
			{"type": "node", "id": 4, "lat": 1.0, "lon": 0.0},
			{"type": "node", "id": 5, "lat": 0.5, "lon": 0.5, "tags": {"amenity": "bench"}},
			{"type": "way", "id": 10, "nodes": [1, 2, 3, 4, 1], "tags": {"building": "yes"}}
		]
	}"#;

	fn settings(format: ExportFormat) -> ExtractSettings {
		ExtractSettings {
			format,
			geometry: vec![],
			clip: None,
			include_osm_ids: true,
			precision: None,
			bbox: None,
			name: "test".to_string(),
		}
	}

	#[test]
	fn detects_overpass_response() {
		let Input::Osm(elements) = Input::from_json_str(OVERPASS).unwrap() else {
			panic!("expected OSM input");
		};
		assert_eq!(elements.len(), 6);
	}

	#[test]
	fn detects_geojson() {
		let input = Input::from_json_str(r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": {}}"#).unwrap();
		let Input::GeoJson(collection) = input else {
			panic!("expected GeoJSON input");
		};
		assert_eq!(collection.len(), 1);
	}

	#[test]
	fn remark_is_an_error() {
		let err = Input::from_json_str(r#"{"elements": [], "remark": "runtime error: Query timed out"}"#).unwrap_err();
		assert_eq!(
			err.downcast_ref::<QueryError>(),
			Some(&QueryError::Remark("runtime error: Query timed out".to_string()))
		);
	}

	#[test]
	fn rejects_other_documents() {
		assert!(Input::from_json_str("[]").is_err());
		assert!(Input::from_json_str("{\"foo\": 1}").is_err());
		assert!(Input::from_json_str("not json").is_err());
	}

	#[test]
	fn extract_geojson() {
		let input = Input::from_json_str(OVERPASS).unwrap();
		let output = extract(input, &settings(ExportFormat::GeoJson), &mut ProgressDrain).unwrap();
		assert_eq!(output.filename, "test.geojson");
		assert_eq!(output.metadata.statistics.total_features, 2);
		assert_eq!(output.metadata.statistics.geometry_types.polygons, 1);
		assert!(output.metadata.polygon_area_km2 > 12_000.0);

		let json: Value = serde_json::from_slice(&output.bytes).unwrap();
		assert_eq!(json["features"][0]["id"], "node/5");
		assert_eq!(json["features"][1]["geometry"]["type"], "Polygon");
	}

	#[test]
	fn extract_filters_and_clips() {
		let mut settings = settings(ExportFormat::GeoJson);
		settings.geometry = vec![GeometryKind::Point];
		settings.clip = Some(ClipBoundary::from(BoundingBox::new(0.6, 0.6, 2.0, 2.0).unwrap()));
		let err = extract(Input::from_json_str(OVERPASS).unwrap(), &settings, &mut ProgressDrain).unwrap_err();
		assert!(matches!(err.downcast_ref::<ExportError>(), Some(ExportError::EmptyResult { .. })));
	}

	#[test]
	fn osm_xml_from_geojson_input_fails() {
		let input = Input::from_json_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
		let err = extract(input, &settings(ExportFormat::OsmXml), &mut ProgressDrain).unwrap_err();
		assert_eq!(err.downcast_ref::<ExportError>(), Some(&ExportError::MissingRawElements));
	}
}
