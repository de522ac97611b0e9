use anyhow::Result;
use clap::Args;
use osmextract::{config::Config, pipeline::Input};
use osmextract_core::progress::ProgressDrain;
use osmextract_geometry::{
	osm::ConvertOptions,
	stats::{GeoStatistics, sample},
};
use serde_json::{Value, json};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Overpass JSON response or GeoJSON file
	#[arg()]
	input: PathBuf,

	/// include up to this many features, balanced across points, lines and polygons
	#[arg(long, short, value_name = "int", default_value = "0")]
	sample: usize,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let options = ConvertOptions {
		clip: None,
		include_osm_ids: config.export.include_osm_ids,
	};
	let (collection, _) = Input::from_path(&arguments.input)?.into_collection(options, &mut ProgressDrain);

	let mut report = json!({ "statistics": GeoStatistics::compute(&collection) });
	if arguments.sample > 0 {
		let features: Vec<Value> = sample(&collection, arguments.sample)
			.iter()
			.map(|feature| feature.to_json(config.export.precision))
			.collect();
		report["sample"] = Value::Array(features);
	}

	println!("{}", serde_json::to_string_pretty(&report)?);
	Ok(())
}
