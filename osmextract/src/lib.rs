//! # osmextract
//!
//! Fetches OpenStreetMap data for a bounding box from an Overpass service, converts it into
//! GeoJSON features and exports them as GeoJSON, zipped shapefiles, KML, GPX or OSM XML.
//!
//! - [`config`]: the optional YAML configuration
//! - [`query`]: Overpass and Nominatim clients
//! - [`pipeline`]: input detection and the convert, clip, filter, export chain
//! - [`export`]: geometry filtering, the encoders and export metadata
//!
//! ## Usage Example
//!
//! ```rust
//! use osmextract::{
//!     export::ExportFormat,
//!     pipeline::{ExtractSettings, Input, extract},
//! };
//! use osmextract::core::progress::ProgressDrain;
//!
//! let input = Input::from_json_str(r#"{"elements": [
//!     {"type": "node", "id": 1, "lat": 52.5, "lon": 13.4, "tags": {"amenity": "cafe"}}
//! ]}"#).unwrap();
//!
//! let settings = ExtractSettings {
//!     format: ExportFormat::Kml,
//!     geometry: vec![],
//!     clip: None,
//!     include_osm_ids: true,
//!     precision: Some(7),
//!     bbox: None,
//!     name: "cafes".to_string(),
//! };
//!
//! let output = extract(input, &settings, &mut ProgressDrain).unwrap();
//! assert_eq!(output.filename, "cafes.kml");
//! ```

pub mod config;
pub mod export;
pub mod pipeline;
pub mod query;

pub use osmextract_core as core;
pub use osmextract_geometry as geometry;
