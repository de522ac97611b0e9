use super::output::write_output;
use anyhow::Result;
use clap::Args;
use osmextract::{
	config::Config,
	export::{ExportFormat, GeometryKind},
	pipeline::{ExtractSettings, Input, extract},
};
use osmextract_core::{BoundingBox, progress::ProgressBar};
use osmextract_geometry::clip::ClipBoundary;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Overpass JSON response or GeoJSON file
	#[arg()]
	input: PathBuf,

	/// output format: geojson, shapefile, kml, gpx or osm
	#[arg(long, short, default_value = "geojson")]
	format: ExportFormat,

	/// keep only these geometry kinds: point, linestring, polygon; repeatable
	#[arg(long, short)]
	geometry: Vec<GeometryKind>,

	/// drop features outside this bounding box
	#[arg(long, value_name = "west,south,east,north", allow_hyphen_values = true)]
	clip_bbox: Option<BoundingBox>,

	/// directory the exported file is written to
	#[arg(long, short, default_value = ".")]
	output_dir: PathBuf,

	/// file name without extension; defaults to the input file name
	#[arg(long, short)]
	name: Option<String>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let input = Input::from_path(&arguments.input)?;
	let name = match &arguments.name {
		Some(name) => name.clone(),
		None => arguments
			.input
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default(),
	};

	let settings = ExtractSettings {
		format: arguments.format,
		geometry: arguments.geometry.clone(),
		clip: arguments.clip_bbox.map(ClipBoundary::from),
		include_osm_ids: config.export.include_osm_ids,
		precision: config.export.precision,
		bbox: arguments.clip_bbox,
		name,
	};

	eprintln!("converting {:?} to {}", arguments.input, arguments.format);
	let mut progress = ProgressBar::new("converting");
	let output = extract(input, &settings, &mut progress)?;
	progress.finish();

	write_output(&output, &arguments.output_dir)?;
	Ok(())
}
