use super::{AreaConfig, ExportConfig, NominatimConfig, OverpassConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

pub const DEFAULT_USER_AGENT: &str = concat!("osmextract/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Overpass query service
	#[serde(default)]
	pub overpass: OverpassConfig,

	/// Nominatim place search
	#[serde(default)]
	pub nominatim: NominatimConfig,

	/// `User-Agent` header sent to both services. Both ask clients to identify themselves.
	#[serde(default = "default_user_agent")]
	pub user_agent: String,

	/// Output settings
	#[serde(default)]
	pub export: ExportConfig,

	/// Area limits
	#[serde(default)]
	pub area: AreaConfig,
}

fn default_user_agent() -> String {
	DEFAULT_USER_AGENT.to_string()
}

impl Default for Config {
	fn default() -> Self {
		Config {
			overpass: OverpassConfig::default(),
			nominatim: NominatimConfig::default(),
			user_agent: default_user_agent(),
			export: ExportConfig::default(),
			area: AreaConfig::default(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		// an empty document deserializes to unit, not to an empty map
		if text.trim().is_empty() {
			return Ok(Config::default());
		}
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let mut text = String::new();
		BufReader::new(file)
			.read_to_string(&mut text)
			.with_context(|| format!("failed to read config file {path:?}"))?;
		Config::from_string(&text).with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Loads the file at `path`, or the defaults when no path is given.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::path::PathBuf;

	fn testdata(filename: &str) -> PathBuf {
		PathBuf::from(env!("CARGO_MANIFEST_DIR"))
			.join("../testdata")
			.join(filename)
	}

	#[test]
	fn parse_example_config() {
		let cfg = Config::from_path(&testdata("config.yml")).unwrap();

		assert_eq!(
			cfg,
			Config {
				overpass: OverpassConfig {
					url: "https://overpass.example.org/api/interpreter".to_string(),
					timeout_seconds: 60,
					max_retries: 1,
					retry_delay_seconds: 2,
				},
				nominatim: NominatimConfig {
					url: "https://nominatim.openstreetmap.org/search".to_string(),
					limit: 3,
				},
				user_agent: "osmextract-tests/1.0".to_string(),
				export: ExportConfig {
					precision: Some(5),
					include_osm_ids: false,
				},
				area: AreaConfig { max_km2: 10.0 },
			}
		);
	}

	#[test]
	fn empty_config_is_default() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
		assert_eq!(Config::from_string("\n# nothing\n").unwrap(), Config::default());
	}

	#[test]
	fn partial_sections_keep_defaults() {
		let cfg = Config::from_string("overpass:\n  max_retries: 7\n").unwrap();
		assert_eq!(cfg.overpass.max_retries, 7);
		assert_eq!(cfg.overpass.timeout_seconds, 180);
		assert_eq!(cfg.overpass.url, "https://overpass-api.de/api/interpreter");
		assert_eq!(cfg.nominatim, NominatimConfig::default());
		assert_eq!(cfg.export.precision, Some(7));
		assert!(cfg.export.include_osm_ids);
		assert_eq!(cfg.area.max_km2, 75.0);
		assert!(cfg.user_agent.starts_with("osmextract/"));
	}

	#[test]
	fn null_precision_keeps_full_precision() {
		let cfg = Config::from_string("export:\n  precision: null\n").unwrap();
		assert_eq!(cfg.export.precision, None);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert!(Config::from_string("overpass:\n  uri: x\n").is_err());
		assert!(Config::from_string("server: {}\n").is_err());
	}

	#[test]
	fn from_reader() {
		let cfg = Config::from_reader("area:\n  max_km2: 5\n".as_bytes()).unwrap();
		assert_eq!(cfg.area.max_km2, 5.0);
		assert!(cfg.area.allows(4.9));
		assert!(!cfg.area.allows(5.0));
	}

	#[test]
	fn missing_file() {
		let err = Config::from_path(Path::new("/does/not/exist.yml")).unwrap_err();
		assert!(err.to_string().contains("failed to open config file"));
	}

	#[test]
	fn load_without_path() {
		assert_eq!(Config::load(None).unwrap(), Config::default());
	}

	#[test]
	fn retry_timings() {
		let cfg = OverpassConfig::default();
		assert_eq!(cfg.retry_delay().as_secs(), 5);
		assert_eq!(cfg.request_timeout().as_secs(), 210);
	}
}
