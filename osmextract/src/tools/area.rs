use anyhow::Result;
use clap::Args;
use osmextract_core::{
	BoundingBox,
	math::{AreaSeverity, format_area},
};
use serde_json::json;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding box as "west,south,east,north"
	#[arg(allow_hyphen_values = true)]
	bbox: BoundingBox,

	/// print the result as JSON
	#[arg(long)]
	json: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let area = arguments.bbox.area_km2();
	let severity = AreaSeverity::from_area(area);

	if arguments.json {
		let report = json!({
			"bbox": arguments.bbox,
			"area_km2": area,
			"formatted": format_area(area),
			"severity": severity,
		});
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("area: {}", format_area(area));
		println!("severity: {severity}");
	}
	Ok(())
}
