use crate::export::{metadata::GENERATOR, xml::XmlWriter};
use anyhow::Result;
use osmextract_geometry::{Coordinates, GeoCollection, GeoFeature, Geometry};

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

/// GPX 1.1: points become waypoints, lines and polygon rings become tracks.
///
/// The schema requires all `wpt` elements before the first `trk`, so features are written in two
/// passes.
pub fn encode_gpx(collection: &GeoCollection, name: &str, precision: Option<u8>) -> Result<Vec<u8>> {
	let mut xml = XmlWriter::new()?;
	xml.start(
		"gpx",
		&[("version", "1.1"), ("creator", GENERATOR), ("xmlns", GPX_NAMESPACE)],
	)?;
	xml.start("metadata", &[])?;
	xml.text_element("name", name)?;
	xml.end("metadata")?;

	for feature in collection.iter() {
		match &feature.geometry {
			Geometry::Point(point) => write_waypoint(&mut xml, feature, &point.0, precision)?,
			Geometry::MultiPoint(points) => {
				for point in &points.0 {
					write_waypoint(&mut xml, feature, &point.0, precision)?;
				}
			}
			_ => {}
		}
	}

	for feature in collection.iter() {
		let segments: Vec<&[Coordinates]> = match &feature.geometry {
			Geometry::Point(_) | Geometry::MultiPoint(_) => continue,
			Geometry::LineString(line) => vec![line.0.as_slice()],
			Geometry::MultiLineString(lines) => lines.0.iter().map(|l| l.0.as_slice()).collect(),
			Geometry::Polygon(polygon) => polygon.0.iter().map(|r| r.0.as_slice()).collect(),
			Geometry::MultiPolygon(polygons) => polygons
				.0
				.iter()
				.flat_map(|p| p.0.iter().map(|r| r.0.as_slice()))
				.collect(),
		};
		write_track(&mut xml, feature, &segments, precision)?;
	}

	xml.end("gpx")?;
	Ok(xml.finish())
}

fn write_waypoint(xml: &mut XmlWriter, feature: &GeoFeature, point: &Coordinates, precision: Option<u8>) -> Result<()> {
	let [lon, lat] = point.rounded(precision);
	let (lat, lon) = (lat.to_string(), lon.to_string());
	xml.start("wpt", &[("lat", lat.as_str()), ("lon", lon.as_str())])?;
	write_description(xml, feature)?;
	xml.end("wpt")
}

fn write_track(
	xml: &mut XmlWriter,
	feature: &GeoFeature,
	segments: &[&[Coordinates]],
	precision: Option<u8>,
) -> Result<()> {
	xml.start("trk", &[])?;
	write_description(xml, feature)?;
	for segment in segments {
		xml.start("trkseg", &[])?;
		for point in *segment {
			let [lon, lat] = point.rounded(precision);
			xml.empty("trkpt", &[("lat", lat.to_string().as_str()), ("lon", lon.to_string().as_str())])?;
		}
		xml.end("trkseg")?;
	}
	xml.end("trk")
}

/// `name` and `desc` children; `desc` lists all properties as `key=value` pairs.
fn write_description(xml: &mut XmlWriter, feature: &GeoFeature) -> Result<()> {
	if let Some(name) = feature.properties.get("name").or(feature.id.as_deref()) {
		xml.text_element("name", name)?;
	}
	if !feature.properties.is_empty() {
		let desc = feature
			.properties
			.iter()
			.map(|(key, value)| format!("{key}={value}"))
			.collect::<Vec<_>>()
			.join("; ");
		xml.text_element("desc", &desc)?;
	}
	Ok(())
}
