//! osmextract configuration.
//!
//! A single optional YAML file (`--config <path>`) with one section per collaborator:
//! - [`OverpassConfig`]: query service endpoint, timeout and retry policy
//! - [`NominatimConfig`]: place search endpoint
//! - [`ExportConfig`]: coordinate precision and OSM id properties
//! - [`AreaConfig`]: the largest bounding box `fetch` accepts without `--force`
//!
//! Every section and every field has a default, so an empty file is a valid configuration.

mod area;
mod export;
mod main;
mod nominatim;
mod overpass;

pub use area::AreaConfig;
pub use export::ExportConfig;
pub use main::Config;
pub use nominatim::NominatimConfig;
pub use overpass::OverpassConfig;
