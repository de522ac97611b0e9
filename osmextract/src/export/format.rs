use super::ExportError;
use anyhow::Result;
use std::{fmt::Display, str::FromStr};

/// Output formats of [`export`](super::export).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
	GeoJson,
	Shapefile,
	Kml,
	Gpx,
	OsmXml,
}

impl ExportFormat {
	#[must_use]
	pub fn extension(&self) -> &'static str {
		match self {
			ExportFormat::GeoJson => "geojson",
			ExportFormat::Shapefile => "zip",
			ExportFormat::Kml => "kml",
			ExportFormat::Gpx => "gpx",
			ExportFormat::OsmXml => "osm",
		}
	}

	#[must_use]
	pub fn mime_type(&self) -> &'static str {
		match self {
			ExportFormat::GeoJson => "application/geo+json",
			ExportFormat::Shapefile => "application/zip",
			ExportFormat::Kml => "application/vnd.google-earth.kml+xml",
			ExportFormat::Gpx => "application/gpx+xml",
			ExportFormat::OsmXml => "application/vnd.openstreetmap.data+xml",
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			ExportFormat::GeoJson => "geojson",
			ExportFormat::Shapefile => "shapefile",
			ExportFormat::Kml => "kml",
			ExportFormat::Gpx => "gpx",
			ExportFormat::OsmXml => "osm",
		}
	}
}

impl Display for ExportFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ExportFormat {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> Result<Self> {
		Ok(match text.trim().to_ascii_lowercase().as_str() {
			"geojson" | "json" => ExportFormat::GeoJson,
			"shapefile" | "shp" | "zip" => ExportFormat::Shapefile,
			"kml" => ExportFormat::Kml,
			"gpx" => ExportFormat::Gpx,
			"osm" | "osmxml" | "xml" => ExportFormat::OsmXml,
			_ => return Err(ExportError::UnsupportedFormat(text.to_string()).into()),
		})
	}
}
