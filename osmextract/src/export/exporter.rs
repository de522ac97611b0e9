use super::{ExportError, ExportFormat, ExportMetadata, encode::*, sanitize_filename_stem};
use anyhow::{Context, Result};
use osmextract_core::BoundingBox;
use osmextract_geometry::{GeoCollection, osm::OsmElement};

/// Settings shared by all encoders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportOptions {
	/// Decimal places of written coordinates; `None` keeps full precision. Shapefiles always
	/// keep full precision.
	pub precision: Option<u8>,
	/// The requested area. Used for metadata and the OSM XML `bounds`; without it the extent of
	/// the data is reported.
	pub bbox: Option<BoundingBox>,
}

/// An encoded export, ready to be written.
#[derive(Clone, Debug)]
pub struct ExportOutput {
	pub filename: String,
	pub byte_size: usize,
	pub bytes: Vec<u8>,
	pub metadata: ExportMetadata,
}

/// Encodes `collection` as `format`.
///
/// `collection` must already be clipped and filtered. The OSM XML format instead writes the raw
/// `elements` and fails with [`ExportError::MissingRawElements`] without them. `filename_stem` is
/// sanitized before use.
pub fn export(
	format: ExportFormat,
	collection: &GeoCollection,
	elements: Option<&[OsmElement]>,
	filename_stem: &str,
	options: &ExportOptions,
) -> Result<ExportOutput> {
	let stem = sanitize_filename_stem(filename_stem);
	let filename = format!("{stem}.{}", format.extension());
	let metadata = ExportMetadata::new(format, &filename, collection, options.bbox)?;
	log::debug!("exporting {} features as {format} to {filename:?}", collection.len());

	let bytes = match format {
		ExportFormat::GeoJson => encode_geojson(collection, options.precision),
		ExportFormat::Shapefile => encode_shapefile(collection, &stem, &metadata),
		ExportFormat::Kml => encode_kml(collection, &stem, options.precision),
		ExportFormat::Gpx => encode_gpx(collection, &stem, options.precision),
		ExportFormat::OsmXml => {
			let elements = elements.ok_or(ExportError::MissingRawElements)?;
			encode_osm_xml(elements, options.bbox.as_ref())
		}
	}
	.with_context(|| format!("failed to encode {filename:?}"))?;

	Ok(ExportOutput {
		filename,
		byte_size: bytes.len(),
		bytes,
		metadata,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use osmextract_geometry::{GeoFeature, Geometry, osm::OsmResponse};
	use rstest::rstest;

	fn collection() -> GeoCollection {
		let mut point = GeoFeature::new(Geometry::new_point(13.4, 52.5));
		point.set_property("name", "Mitte");
		GeoCollection::from(vec![
			point,
			GeoFeature::new(Geometry::new_line_string(vec![[13.0, 52.0], [13.1, 52.1]])),
		])
	}

	#[rstest]
	#[case(ExportFormat::GeoJson, "my_area.geojson", "\"FeatureCollection\"")]
	#[case(ExportFormat::Kml, "my_area.kml", "<kml")]
	#[case(ExportFormat::Gpx, "my_area.gpx", "<gpx")]
	fn text_formats(#[case] format: ExportFormat, #[case] filename: &str, #[case] marker: &str) {
		let output = export(format, &collection(), None, "my area", &ExportOptions::default()).unwrap();
		assert_eq!(output.filename, filename);
		assert_eq!(output.byte_size, output.bytes.len());
		assert_eq!(output.metadata.filename, filename);
		assert_eq!(output.metadata.format, format.to_string());
		assert!(String::from_utf8(output.bytes).unwrap().contains(marker));
	}

	#[test]
	fn shapefile_is_a_zip() {
		let output = export(
			ExportFormat::Shapefile,
			&collection(),
			None,
			"",
			&ExportOptions::default(),
		)
		.unwrap();
		assert_eq!(output.filename, "osm_export.zip");
		assert_eq!(&output.bytes[..2], b"PK");
	}

	#[test]
	fn osm_xml_needs_raw_elements() {
		let err = export(
			ExportFormat::OsmXml,
			&collection(),
			None,
			"x",
			&ExportOptions::default(),
		)
		.unwrap_err();
		assert_eq!(
			err.downcast_ref::<ExportError>(),
			Some(&ExportError::MissingRawElements)
		);
	}

	#[test]
	fn osm_xml_writes_raw_elements() {
		let elements = OsmResponse::from_json_str(r#"{"elements": [{"type": "node", "id": 1, "lat": 1.0, "lon": 2.0}]}"#)
			.unwrap()
			.into_elements()
			.unwrap();
		let output = export(
			ExportFormat::OsmXml,
			&GeoCollection::new(),
			Some(&elements),
			"raw",
			&ExportOptions::default(),
		)
		.unwrap();
		assert_eq!(output.filename, "raw.osm");
		assert!(String::from_utf8(output.bytes).unwrap().contains("<node id=\"1\" lat=\"1\" lon=\"2\"/>"));
	}
}
