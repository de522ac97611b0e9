use super::output::write_output;
use anyhow::{Result, bail};
use clap::{ArgGroup, Args};
use osmextract::{
	config::Config,
	export::{ExportFormat, GeometryKind},
	pipeline::{ExtractSettings, Input, extract},
	query::{
		nominatim::NominatimClient,
		overpass::{OverpassClient, OverpassQuery, TagFilter},
	},
};
use osmextract_core::{
	BoundingBox,
	math::{AreaSeverity, format_area},
	progress::ProgressBar,
};
use osmextract_geometry::clip::ClipBoundary;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("area").required(true).args(["bbox", "place"])))]
pub struct Subcommand {
	/// bounding box to download
	#[arg(long, short, value_name = "west,south,east,north", allow_hyphen_values = true)]
	bbox: Option<BoundingBox>,

	/// place name, resolved to a bounding box with Nominatim
	#[arg(long, short)]
	place: Option<String>,

	/// only download elements with this tag, e.g. "amenity" or "highway=primary"; repeatable
	#[arg(long, value_name = "key[=value]")]
	filter: Vec<TagFilter>,

	/// output format: geojson, shapefile, kml, gpx or osm
	#[arg(long, short, default_value = "geojson")]
	format: ExportFormat,

	/// keep only these geometry kinds: point, linestring, polygon; repeatable
	#[arg(long, short)]
	geometry: Vec<GeometryKind>,

	/// drop features outside the bounding box
	#[arg(long)]
	clip: bool,

	/// download even if the area exceeds the configured limit
	#[arg(long)]
	force: bool,

	/// print the Overpass query instead of running it
	#[arg(long)]
	print_query: bool,

	/// directory the exported file is written to
	#[arg(long, short, default_value = ".")]
	output_dir: PathBuf,

	/// file name without extension; defaults to the place name or "osm_export"
	#[arg(long, short)]
	name: Option<String>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let (bbox, default_name) = match (&arguments.bbox, &arguments.place) {
		(Some(bbox), _) => (*bbox, "osm_export".to_string()),
		(None, Some(place)) => {
			let client = NominatimClient::new(config)?;
			let found = client.search_first(place).await?;
			eprintln!("found {:?}", found.display_name);
			(found.bbox, place.clone())
		}
		(None, None) => bail!("either --bbox or --place is required"),
	};

	let area = bbox.area_km2();
	if !config.area.allows(area) && !arguments.force {
		bail!(
			"the area of {} exceeds the limit of {}, use --force to download it anyway",
			format_area(area),
			format_area(config.area.max_km2)
		);
	}
	if AreaSeverity::from_area(area) != AreaSeverity::Ok {
		log::warn!("downloading a large area of {}, this may take a while", format_area(area));
	}

	let query = OverpassQuery::new(bbox, arguments.filter.clone(), config.overpass.timeout_seconds);
	if arguments.print_query {
		println!("{}", query.to_ql());
		return Ok(());
	}

	eprintln!("downloading {} from {}", format_area(area), config.overpass.url);
	let elements = OverpassClient::new(config)?.fetch(&query).await?;

	let settings = ExtractSettings {
		format: arguments.format,
		geometry: arguments.geometry.clone(),
		clip: arguments.clip.then(|| ClipBoundary::from(bbox)),
		include_osm_ids: config.export.include_osm_ids,
		precision: config.export.precision,
		bbox: Some(bbox),
		name: arguments.name.clone().unwrap_or(default_name),
	};

	let mut progress = ProgressBar::new("converting");
	let output = extract(Input::Osm(elements), &settings, &mut progress)?;
	progress.finish();

	write_output(&output, &arguments.output_dir)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[derive(Parser, Debug)]
	struct TestCli {
		#[command(flatten)]
		fetch: Subcommand,
	}

	fn parse(args: &[&str]) -> Result<Subcommand> {
		let mut argv = vec!["fetch"];
		argv.extend_from_slice(args);
		Ok(TestCli::try_parse_from(argv)?.fetch)
	}

	#[test]
	fn parses_all_options() -> Result<()> {
		let arguments = parse(&[
			"--bbox",
			"-0.2,51.4,-0.1,51.5",
			"--filter",
			"amenity=cafe",
			"--filter",
			"shop",
			"--format",
			"kml",
			"-g",
			"point",
			"--clip",
			"--name",
			"london",
		])?;
		assert_eq!(arguments.bbox, Some(BoundingBox::new(-0.2, 51.4, -0.1, 51.5)?));
		assert_eq!(arguments.filter.len(), 2);
		assert_eq!(arguments.format, ExportFormat::Kml);
		assert_eq!(arguments.geometry, vec![GeometryKind::Point]);
		assert!(arguments.clip);
		assert_eq!(arguments.name.as_deref(), Some("london"));
		Ok(())
	}

	#[test]
	fn bbox_and_place_conflict() {
		assert!(parse(&["--bbox", "0,0,1,1", "--place", "Berlin"]).is_err());
	}

	#[test]
	fn rejects_unknown_format() {
		assert!(parse(&["--bbox", "0,0,1,1", "--format", "dxf"]).is_err());
	}

	#[test]
	fn refuses_large_area_without_force() {
		let arguments = parse(&["--bbox", "0,0,1,1", "--print-query"]).unwrap();
		let error = run(&arguments, &Config::default()).unwrap_err();
		assert!(error.to_string().contains("--force"));
	}

	#[test]
	fn prints_query_for_forced_large_area() {
		let arguments = parse(&["--bbox", "0,0,1,1", "--print-query", "--force"]).unwrap();
		run(&arguments, &Config::default()).unwrap();
	}
}
