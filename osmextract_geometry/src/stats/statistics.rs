use crate::{GeoCollection, Geometry};
use osmextract_core::BoundingBox;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Keys whose `key:value` pairs are counted in [`GeoStatistics::feature_types`].
pub const WATCHED_KEYS: [&str; 8] = [
	"highway", "building", "amenity", "natural", "landuse", "waterway", "shop", "leisure",
];

/// Properties added by the converter that are not part of the mapped data.
pub const INTERNAL_KEYS: [&str; 2] = ["osm_id", "osm_type"];

/// Number of entries in [`GeoStatistics::top_feature_types`].
pub const TOP_FEATURE_TYPES: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeometryTypeCounts {
	pub points: usize,
	pub lines: usize,
	pub polygons: usize,
	/// Always 0, since every geometry kind counts as a point, line or polygon. Kept so the
	/// serialized report keeps a stable shape.
	pub other: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureTypeCount {
	pub feature_type: String,
	pub count: usize,
}

/// A snapshot of a collection; recompute it when the collection changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GeoStatistics {
	pub total_features: usize,
	pub geometry_types: GeometryTypeCounts,
	pub property_keys: BTreeSet<String>,
	pub feature_types: BTreeMap<String, usize>,
	pub top_feature_types: Vec<FeatureTypeCount>,
	pub bbox: Option<BoundingBox>,
}

impl GeoStatistics {
	#[must_use]
	pub fn compute(collection: &GeoCollection) -> GeoStatistics {
		let mut stats = GeoStatistics {
			total_features: collection.len(),
			..GeoStatistics::default()
		};

		for feature in collection.iter() {
			match feature.geometry {
				Geometry::Point(_) | Geometry::MultiPoint(_) => stats.geometry_types.points += 1,
				Geometry::LineString(_) | Geometry::MultiLineString(_) => stats.geometry_types.lines += 1,
				Geometry::Polygon(_) | Geometry::MultiPolygon(_) => stats.geometry_types.polygons += 1,
			}

			for (key, value) in &feature.properties {
				if INTERNAL_KEYS.contains(&key.as_str()) {
					continue;
				}
				stats.property_keys.insert(key.clone());
				if WATCHED_KEYS.contains(&key.as_str()) {
					*stats.feature_types.entry(format!("{key}:{value}")).or_insert(0) += 1;
				}
			}

			if let Some([west, south, east, north]) = feature.geometry.compute_bounds() {
				match &mut stats.bbox {
					Some(bbox) => bbox.extend(&BoundingBox {
						north,
						south,
						east,
						west,
					}),
					None => {
						stats.bbox = Some(BoundingBox {
							north,
							south,
							east,
							west,
						});
					}
				}
			}
		}

		let mut ranked: Vec<(&String, &usize)> = stats.feature_types.iter().collect();
		ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
		stats.top_feature_types = ranked
			.into_iter()
			.take(TOP_FEATURE_TYPES)
			.map(|(feature_type, count)| FeatureTypeCount {
				feature_type: feature_type.clone(),
				count: *count,
			})
			.collect();

		stats
	}
}
