//! Geometry model and the OSM to GeoJSON pipeline.
//!
//! - [`geo`]: features, properties and the closed [`Geometry`] sum type
//! - [`geojson`]: reading uploaded GeoJSON and writing the FeatureCollection output
//! - [`osm`]: raw Overpass elements, tag classification and cleaning, the converter
//! - [`clip`]: the approximate bounding box clipper
//! - [`stats`]: statistics and preview samples of a collection

pub mod clip;
mod geo;
pub mod geojson;
pub mod osm;
pub mod stats;

pub use geo::*;
