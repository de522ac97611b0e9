//! One encoder per [`ExportFormat`](super::ExportFormat). Each takes the already clipped and
//! filtered collection (or, for OSM XML, the raw elements) and returns the file content.

mod geojson;
mod gpx;
mod kml;
mod osm_xml;
mod shp;

pub use geojson::encode_geojson;
pub use gpx::encode_gpx;
pub use kml::encode_kml;
pub use osm_xml::encode_osm_xml;
pub use shp::encode_shapefile;
