//! Raw OpenStreetMap elements as delivered by Overpass, and their conversion into GeoJSON features.

mod classify;
mod clean;
mod convert;
mod element;
mod response;

pub use classify::*;
pub use clean::*;
pub use convert::*;
pub use element::*;
pub use response::*;
