use crate::export::{ExportMetadata, GeometryKind};
use anyhow::{Context, Result, anyhow};
use osmextract_geometry::{Coordinates, GeoCollection, GeoFeature, Geometry, PolygonGeometry};
use shapefile::{
	Point, Polygon, PolygonRing, Polyline, Writer,
	dbase::{FieldName, FieldValue, Record, TableWriterBuilder},
};
use std::{
	collections::{BTreeSet, HashSet},
	fs,
	io::{Cursor, Write},
	path::Path,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

const WGS84_PRJ: &str = r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["Degree",0.0174532925199433]]"#;
const CODE_PAGE: &str = "UTF-8";

const FID_FIELD: &str = "fid";
const DBF_NAME_LENGTH: usize = 10;
const DBF_MAX_VALUE_LENGTH: usize = 254;
const DBF_MAX_FIELDS: usize = 254;

/// A ZIP archive with one shapefile set per geometry kind present in `collection`, named
/// `<stem>_points`, `<stem>_lines` and `<stem>_polygons`, plus `<stem>_metadata.json`.
pub fn encode_shapefile(collection: &GeoCollection, stem: &str, metadata: &ExportMetadata) -> Result<Vec<u8>> {
	let dir = tempfile::tempdir().context("failed to create temporary directory for shapefiles")?;
	let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

	for kind in GeometryKind::ALL {
		let features: Vec<&GeoFeature> = collection
			.iter()
			.filter(|f| GeometryKind::of(&f.geometry) == kind)
			.collect();
		if features.is_empty() {
			continue;
		}

		let layer = format!("{stem}_{}", kind.layer_suffix());
		let written = write_layer(&dir.path().join(format!("{layer}.shp")), kind, &features)
			.with_context(|| format!("failed to write shapefile layer {layer:?}"))?;
		log::debug!("shapefile layer {layer:?}: {written} records");

		for extension in ["shp", "shx", "dbf"] {
			let name = format!("{layer}.{extension}");
			let bytes = fs::read(dir.path().join(&name)).with_context(|| format!("failed to read back {name:?}"))?;
			add_file(&mut zip, &name, &bytes)?;
		}
		add_file(&mut zip, &format!("{layer}.prj"), WGS84_PRJ.as_bytes())?;
		add_file(&mut zip, &format!("{layer}.cpg"), CODE_PAGE.as_bytes())?;
	}

	add_file(
		&mut zip,
		&format!("{stem}_metadata.json"),
		metadata.to_json_string()?.as_bytes(),
	)?;

	Ok(zip.finish().context("failed to finish ZIP archive")?.into_inner())
}

fn add_file(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, bytes: &[u8]) -> Result<()> {
	let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
	zip.start_file(name, options)
		.with_context(|| format!("failed to add {name:?} to ZIP archive"))?;
	zip.write_all(bytes)?;
	Ok(())
}

/// Writes `.shp`, `.shx` and `.dbf` next to `path` and returns the number of records.
fn write_layer(path: &Path, kind: GeometryKind, features: &[&GeoFeature]) -> Result<usize> {
	let columns = dbf_columns(features);

	let mut builder = TableWriterBuilder::new().add_numeric_field(field_name(FID_FIELD)?, 10, 0);
	for column in &columns {
		builder = builder.add_character_field(field_name(&column.name)?, column.length);
	}

	let mut writer = Writer::from_path(path, builder)?;
	let mut written = 0;

	for (index, feature) in features.iter().enumerate() {
		let mut record = Record::default();
		record.insert(FID_FIELD.to_string(), FieldValue::Numeric(Some(index as f64)));
		for column in &columns {
			let value = feature
				.properties
				.get(&column.key)
				.map(|v| truncate(v, DBF_MAX_VALUE_LENGTH).to_string());
			record.insert(column.name.clone(), FieldValue::Character(value));
		}

		match (kind, &feature.geometry) {
			(GeometryKind::Point, Geometry::Point(point)) => {
				writer.write_shape_and_record(&to_point(&point.0), &record)?;
				written += 1;
			}
			(GeometryKind::Point, Geometry::MultiPoint(points)) => {
				for point in &points.0 {
					writer.write_shape_and_record(&to_point(&point.0), &record)?;
					written += 1;
				}
			}
			(GeometryKind::LineString, geometry) => {
				let parts: Vec<Vec<Point>> = match geometry {
					Geometry::LineString(line) => vec![to_points(&line.0)],
					Geometry::MultiLineString(lines) => lines.0.iter().map(|l| to_points(&l.0)).collect(),
					_ => Vec::new(),
				};
				let parts: Vec<Vec<Point>> = parts.into_iter().filter(|p| p.len() >= 2).collect();
				if parts.is_empty() {
					log::trace!("line feature {index} has no part with 2 points, left out of shapefile");
					continue;
				}
				writer.write_shape_and_record(&Polyline::with_parts(parts), &record)?;
				written += 1;
			}
			(GeometryKind::Polygon, geometry) => {
				let rings: Vec<PolygonRing<Point>> = match geometry {
					Geometry::Polygon(polygon) => to_rings(polygon),
					Geometry::MultiPolygon(polygons) => polygons.0.iter().flat_map(to_rings).collect(),
					_ => Vec::new(),
				};
				if rings.is_empty() {
					log::trace!("polygon feature {index} has no valid ring, left out of shapefile");
					continue;
				}
				writer.write_shape_and_record(&Polygon::with_rings(rings), &record)?;
				written += 1;
			}
			(_, geometry) => log::trace!("{} does not belong to the {kind} layer", geometry.type_name()),
		}
	}

	// headers of .shp, .shx and .dbf are completed when the writer is dropped
	drop(writer);
	Ok(written)
}

fn to_point(c: &Coordinates) -> Point {
	Point::new(c.x(), c.y())
}

fn to_points(coords: &[Coordinates]) -> Vec<Point> {
	coords.iter().map(to_point).collect()
}

/// The first ring is the outer ring, all following rings are holes.
fn to_rings(polygon: &PolygonGeometry) -> Vec<PolygonRing<Point>> {
	polygon
		.0
		.iter()
		.filter(|ring| ring.0.len() >= 4)
		.enumerate()
		.map(|(index, ring)| {
			if index == 0 {
				PolygonRing::Outer(to_points(&ring.0))
			} else {
				PolygonRing::Inner(to_points(&ring.0))
			}
		})
		.collect()
}

#[derive(Debug, PartialEq)]
struct DbfColumn {
	/// property key
	key: String,
	/// dBase field name, at most 10 characters, unique ignoring case
	name: String,
	length: u8,
}

fn dbf_columns(features: &[&GeoFeature]) -> Vec<DbfColumn> {
	let keys: BTreeSet<&String> = features.iter().flat_map(|f| f.properties.keys()).collect();
	if keys.len() >= DBF_MAX_FIELDS {
		log::warn!(
			"{} attribute columns exceed the dBase limit, only the first {} are kept",
			keys.len(),
			DBF_MAX_FIELDS - 1
		);
	}

	let mut used = HashSet::from([FID_FIELD.to_string()]);
	keys.into_iter()
		.take(DBF_MAX_FIELDS - 1)
		.map(|key| {
			let length = features
				.iter()
				.filter_map(|f| f.properties.get(key))
				.map(|v| truncate(v, DBF_MAX_VALUE_LENGTH).len())
				.max()
				.unwrap_or(1)
				.max(1);
			DbfColumn {
				key: key.clone(),
				name: dbf_field_name(key, &mut used),
				length: length as u8,
			}
		})
		.collect()
}

/// Maps a property key to a unique dBase field name: ASCII alphanumerics and `_`, at most 10
/// characters, clashes resolved with a numeric suffix.
fn dbf_field_name(key: &str, used: &mut HashSet<String>) -> String {
	let mut base: String = key
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
		.take(DBF_NAME_LENGTH)
		.collect();
	if base.is_empty() {
		base = "field".to_string();
	}

	let mut name = base.clone();
	let mut counter = 1;
	while used.contains(&name.to_ascii_lowercase()) {
		let suffix = format!("_{counter}");
		let prefix: String = base.chars().take(DBF_NAME_LENGTH - suffix.len()).collect();
		name = format!("{prefix}{suffix}");
		counter += 1;
	}
	used.insert(name.to_ascii_lowercase());
	name
}

fn field_name(name: &str) -> Result<FieldName> {
	FieldName::try_from(name).map_err(|e| anyhow!("invalid dBase field name {name:?}: {e:?}"))
}

/// Cuts `text` to at most `max` bytes without splitting a character.
fn truncate(text: &str, max: usize) -> &str {
	if text.len() <= max {
		return text;
	}
	let mut end = max;
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	&text[..end]
}
