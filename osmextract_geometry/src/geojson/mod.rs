//! GeoJSON input and output.
//!
//! Reading accepts a `FeatureCollection` or a single `Feature`; a single feature is normalised to a
//! one-element collection. Writing lives on [`crate::GeoCollection::to_json`].

mod parse;
mod read;

pub use parse::*;
pub use read::*;
