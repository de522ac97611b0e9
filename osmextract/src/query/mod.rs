//! Clients for the two remote services: the Overpass query service that delivers raw OSM
//! elements and the Nominatim place search that turns a place name into a bounding box.
//!
//! Query building and response parsing are plain functions; only the clients need the `http`
//! feature.

pub mod nominatim;
pub mod overpass;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{HttpClient, HttpResponse};
