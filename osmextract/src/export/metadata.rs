use super::ExportFormat;
use anyhow::{Context, Result};
use geo::ChamberlainDuquetteArea;
use osmextract_core::BoundingBox;
use osmextract_geometry::{CRS_NAME, GeoCollection, Geometry, stats::GeoStatistics};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub const ATTRIBUTION: &str = "© OpenStreetMap contributors, ODbL";
pub const GENERATOR: &str = concat!("osmextract ", env!("CARGO_PKG_VERSION"));

/// Describes one export: where the data came from and what it contains.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportMetadata {
	pub generator: String,
	pub exported_at: String,
	pub format: String,
	pub filename: String,
	pub crs: String,
	pub attribution: String,
	pub statistics: GeoStatistics,
	/// The requested area if known, otherwise the extent of the data.
	pub bbox: Option<BoundingBox>,
	pub area_km2: Option<f64>,
	pub polygon_area_km2: f64,
}

impl ExportMetadata {
	pub fn new(
		format: ExportFormat,
		filename: &str,
		collection: &GeoCollection,
		bbox: Option<BoundingBox>,
	) -> Result<ExportMetadata> {
		let statistics = GeoStatistics::compute(collection);
		let bbox = bbox.or(statistics.bbox);
		Ok(ExportMetadata {
			generator: GENERATOR.to_string(),
			exported_at: now_rfc3339()?,
			format: format.to_string(),
			filename: filename.to_string(),
			crs: CRS_NAME.to_string(),
			attribution: ATTRIBUTION.to_string(),
			area_km2: bbox.as_ref().map(BoundingBox::area_km2),
			bbox,
			polygon_area_km2: polygon_area_km2(collection),
			statistics,
		})
	}

	pub fn to_json_string(&self) -> Result<String> {
		serde_json::to_string_pretty(self).context("failed to serialize export metadata")
	}
}

fn now_rfc3339() -> Result<String> {
	OffsetDateTime::now_utc()
		.format(&Rfc3339)
		.context("failed to format export timestamp")
}

/// Sum of the spherical areas of all polygon features, in km².
#[must_use]
pub fn polygon_area_km2(collection: &GeoCollection) -> f64 {
	let square_meters: f64 = collection
		.iter()
		.map(|feature| match &feature.geometry {
			Geometry::Polygon(polygon) => geo::Polygon::from(polygon).chamberlain_duquette_unsigned_area(),
			Geometry::MultiPolygon(multi) => multi
				.0
				.iter()
				.map(|polygon| geo::Polygon::from(polygon).chamberlain_duquette_unsigned_area())
				.sum(),
			_ => 0.0,
		})
		.sum();
	square_meters / 1_000_000.0
}
