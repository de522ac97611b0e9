//! Filtering by geometry kind and encoding into the supported GIS formats.
//!
//! [`export`] is the single entry point: it takes the clipped and filtered collection (or the raw
//! elements for OSM XML), a file name stem and [`ExportOptions`], and returns the encoded bytes
//! together with [`ExportMetadata`].

mod encode;
mod error;
mod exporter;
mod filename;
mod format;
mod kind;
mod metadata;
mod xml;

pub use error::ExportError;
pub use exporter::{ExportOptions, ExportOutput, export};
pub use filename::{FALLBACK_STEM, sanitize_filename_stem};
pub use format::ExportFormat;
pub use kind::{GeometryKind, filter_by_geometry};
pub use metadata::{ATTRIBUTION, ExportMetadata, GENERATOR, polygon_area_km2};
