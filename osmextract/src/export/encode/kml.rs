use crate::export::xml::XmlWriter;
use anyhow::Result;
use osmextract_geometry::{Coordinates, GeoCollection, GeoFeature, Geometry, PolygonGeometry};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// KML 2.2 document with one `Placemark` per feature.
pub fn encode_kml(collection: &GeoCollection, name: &str, precision: Option<u8>) -> Result<Vec<u8>> {
	let mut xml = XmlWriter::new()?;
	xml.start("kml", &[("xmlns", KML_NAMESPACE)])?;
	xml.start("Document", &[])?;
	xml.text_element("name", name)?;

	for feature in collection.iter() {
		write_placemark(&mut xml, feature, precision)?;
	}

	xml.end("Document")?;
	xml.end("kml")?;
	Ok(xml.finish())
}

fn write_placemark(xml: &mut XmlWriter, feature: &GeoFeature, precision: Option<u8>) -> Result<()> {
	xml.start("Placemark", &[])?;

	if let Some(name) = feature.properties.get("name").or(feature.id.as_deref()) {
		xml.text_element("name", name)?;
	}

	if !feature.properties.is_empty() {
		xml.start("ExtendedData", &[])?;
		for (key, value) in &feature.properties {
			xml.start("Data", &[("name", key.as_str())])?;
			xml.text_element("value", value)?;
			xml.end("Data")?;
		}
		xml.end("ExtendedData")?;
	}

	write_geometry(xml, &feature.geometry, precision)?;
	xml.end("Placemark")
}

fn write_geometry(xml: &mut XmlWriter, geometry: &Geometry, precision: Option<u8>) -> Result<()> {
	match geometry {
		Geometry::Point(point) => write_point(xml, &point.0, precision),
		Geometry::LineString(line) => write_line_string(xml, &line.0, precision),
		Geometry::Polygon(polygon) => write_polygon(xml, polygon, precision),
		Geometry::MultiPoint(points) => {
			xml.start("MultiGeometry", &[])?;
			for point in &points.0 {
				write_point(xml, &point.0, precision)?;
			}
			xml.end("MultiGeometry")
		}
		Geometry::MultiLineString(lines) => {
			xml.start("MultiGeometry", &[])?;
			for line in &lines.0 {
				write_line_string(xml, &line.0, precision)?;
			}
			xml.end("MultiGeometry")
		}
		Geometry::MultiPolygon(polygons) => {
			xml.start("MultiGeometry", &[])?;
			for polygon in &polygons.0 {
				write_polygon(xml, polygon, precision)?;
			}
			xml.end("MultiGeometry")
		}
	}
}

fn write_point(xml: &mut XmlWriter, point: &Coordinates, precision: Option<u8>) -> Result<()> {
	xml.start("Point", &[])?;
	xml.text_element("coordinates", &coordinate_text(std::slice::from_ref(point), precision))?;
	xml.end("Point")
}

fn write_line_string(xml: &mut XmlWriter, coords: &[Coordinates], precision: Option<u8>) -> Result<()> {
	xml.start("LineString", &[])?;
	xml.text_element("coordinates", &coordinate_text(coords, precision))?;
	xml.end("LineString")
}

fn write_polygon(xml: &mut XmlWriter, polygon: &PolygonGeometry, precision: Option<u8>) -> Result<()> {
	xml.start("Polygon", &[])?;
	for (index, ring) in polygon.0.iter().enumerate() {
		let boundary = if index == 0 { "outerBoundaryIs" } else { "innerBoundaryIs" };
		xml.start(boundary, &[])?;
		xml.start("LinearRing", &[])?;
		xml.text_element("coordinates", &coordinate_text(&ring.0, precision))?;
		xml.end("LinearRing")?;
		xml.end(boundary)?;
	}
	xml.end("Polygon")
}

/// `lon,lat` tuples separated by spaces.
fn coordinate_text(coords: &[Coordinates], precision: Option<u8>) -> String {
	coords
		.iter()
		.map(|c| {
			let [lon, lat] = c.rounded(precision);
			format!("{lon},{lat}")
		})
		.collect::<Vec<_>>()
		.join(" ")
}
