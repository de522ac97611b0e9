use anyhow::{Context, Result};
use osmextract::export::ExportOutput;
use std::{
	fs,
	path::{Path, PathBuf},
};

/// Writes the export into `dir` and prints its metadata as JSON to stdout.
pub fn write_output(output: &ExportOutput, dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir).with_context(|| format!("failed to create output directory {dir:?}"))?;
	let path = dir.join(&output.filename);
	fs::write(&path, &output.bytes).with_context(|| format!("failed to write {path:?}"))?;

	eprintln!(
		"wrote {} features to {path:?} ({} bytes)",
		output.metadata.statistics.total_features, output.byte_size
	);
	println!("{}", output.metadata.to_json_string()?);
	Ok(path)
}
