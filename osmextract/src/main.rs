mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use osmextract::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML configuration file
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Download OpenStreetMap data for a bounding box or place and export it
	Fetch(tools::fetch::Subcommand),

	/// Convert an Overpass JSON response or a GeoJSON file into another format
	Convert(tools::convert::Subcommand),

	/// Print statistics and a sample of an Overpass JSON response or GeoJSON file
	Stats(tools::stats::Subcommand),

	/// Print the approximate area of a bounding box
	Area(tools::area::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = Config::load(cli.config.as_deref())?;
	match &cli.command {
		Commands::Fetch(arguments) => tools::fetch::run(arguments, &config),
		Commands::Convert(arguments) => tools::convert::run(arguments, &config),
		Commands::Stats(arguments) => tools::stats::run(arguments, &config),
		Commands::Area(arguments) => tools::area::run(arguments),
	}
}
