use super::{OsmElement, OsmElementKind, OsmNode, OsmRelation, OsmWay, clean_tags, is_area};
use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, Geometry, LineStringGeometry, MultiLineStringGeometry,
	PointGeometry, PolygonGeometry, RingGeometry,
	clip::{BoundaryClipper, ClipBoundary},
};
use osmextract_core::{
	math::is_valid_coordinate,
	progress::{ProgressDrain, ProgressEvent, ProgressSink, ProgressStage},
};
use serde::Serialize;
use std::collections::HashMap;

/// A node progress event is emitted every this many nodes.
const NODE_PROGRESS_INTERVAL: usize = 100;
/// A way progress event is emitted every this many ways.
const WAY_PROGRESS_INTERVAL: usize = 50;

/// Per-conversion settings, passed explicitly instead of living in shared state.
#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
	/// Boundary every emitted feature is clipped to.
	pub clip: Option<ClipBoundary>,
	/// Adds `osm_type`/`osm_id` properties and a `type/id` feature id.
	pub include_osm_ids: bool,
}

/// What happened during one conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
	pub nodes: usize,
	pub ways: usize,
	pub relations: usize,
	pub points: usize,
	pub lines: usize,
	pub polygons: usize,
	pub multi_lines: usize,
	/// Elements that produced no geometry: untagged or invalid nodes, unresolvable ways and relations.
	pub skipped: usize,
	/// Features removed by the clip boundary.
	pub clipped: usize,
}

impl ConversionSummary {
	#[must_use]
	pub fn features(&self) -> usize {
		self.points + self.lines + self.polygons + self.multi_lines
	}
}

/// Turns raw OSM elements into a GeoJSON feature collection.
///
/// Output order is fixed: points of the node pass, then lines and polygons of the way pass, then
/// multi-lines of the relation pass, each in input order.
///
/// ```
/// use osmextract_geometry::osm::*;
/// use osmextract_core::progress::ProgressDrain;
///
/// let response = OsmResponse::from_json_str(r#"{"elements": [
///   {"type": "node", "id": 1, "lat": 52.5, "lon": 13.4, "tags": {"amenity": "cafe"}}
/// ]}"#).unwrap();
/// let mut converter = OsmConverter::new(ConvertOptions::default());
/// let collection = converter.convert(&response.into_elements().unwrap(), &mut ProgressDrain);
/// assert_eq!(collection.len(), 1);
/// assert_eq!(converter.summary().points, 1);
/// ```
pub struct OsmConverter {
	options: ConvertOptions,
	clipper: BoundaryClipper,
	summary: ConversionSummary,
}

impl OsmConverter {
	#[must_use]
	pub fn new(options: ConvertOptions) -> Self {
		OsmConverter {
			clipper: BoundaryClipper::with_boundary(options.clip),
			options,
			summary: ConversionSummary::default(),
		}
	}

	/// Summary of the last [`OsmConverter::convert`] call.
	#[must_use]
	pub fn summary(&self) -> &ConversionSummary {
		&self.summary
	}

	/// Converts `elements`, notifying `progress` at a few discrete points.
	///
	/// Never fails: malformed elements, dangling references and features that do not survive
	/// clipping are dropped.
	pub fn convert(&mut self, elements: &[OsmElement], progress: &mut dyn ProgressSink) -> GeoCollection {
		self.summary = ConversionSummary::default();

		let mut nodes: Vec<&OsmNode> = Vec::new();
		let mut ways: Vec<&OsmWay> = Vec::new();
		let mut relations: Vec<&OsmRelation> = Vec::new();
		for element in elements {
			match element {
				OsmElement::Node(n) => nodes.push(n),
				OsmElement::Way(w) => ways.push(w),
				OsmElement::Relation(r) => relations.push(r),
				OsmElement::Other => {}
				OsmElement::Malformed => self.summary.skipped += 1,
			}
		}
		self.summary.nodes = nodes.len();
		self.summary.ways = ways.len();
		self.summary.relations = relations.len();

		let total = elements.len();
		let lookup = NodeLookup::new(&nodes);
		let mut collection = GeoCollection::new();

		progress.notify(ProgressEvent::new(
			ProgressStage::Start,
			0,
			0,
			total,
			format!("converting {total} elements"),
		));

		for (index, node) in nodes.iter().enumerate() {
			self.convert_node(node, &mut collection);
			let processed = index + 1;
			if processed % NODE_PROGRESS_INTERVAL == 0 {
				progress.notify(ProgressEvent::new(
					ProgressStage::Nodes,
					ProgressEvent::scaled(processed, nodes.len(), 0, 50),
					processed,
					nodes.len(),
					format!("processed {processed} of {} nodes", nodes.len()),
				));
			}
		}

		let way_lookup: HashMap<i64, &OsmWay> = ways.iter().map(|w| (w.id, *w)).collect();
		for (index, way) in ways.iter().enumerate() {
			self.convert_way(way, &lookup, &mut collection);
			let processed = index + 1;
			if processed % WAY_PROGRESS_INTERVAL == 0 {
				progress.notify(ProgressEvent::new(
					ProgressStage::Ways,
					ProgressEvent::scaled(processed, ways.len(), 50, 40),
					processed,
					ways.len(),
					format!("processed {processed} of {} ways", ways.len()),
				));
			}
		}

		if !relations.is_empty() {
			for relation in &relations {
				self.convert_relation(relation, &lookup, &way_lookup, &mut collection);
			}
			progress.notify(ProgressEvent::new(
				ProgressStage::Relations,
				90,
				relations.len(),
				relations.len(),
				format!("processed {} relations", relations.len()),
			));
		}

		progress.notify(ProgressEvent::complete(
			total,
			format!("created {} features", collection.len()),
		));

		log::debug!(
			"converted {} nodes, {} ways, {} relations into {} features ({} points, {} lines, {} polygons, {} multi-lines); skipped {}, clipped {}",
			self.summary.nodes,
			self.summary.ways,
			self.summary.relations,
			collection.len(),
			self.summary.points,
			self.summary.lines,
			self.summary.polygons,
			self.summary.multi_lines,
			self.summary.skipped,
			self.summary.clipped,
		);

		collection
	}

	fn convert_node(&mut self, node: &OsmNode, collection: &mut GeoCollection) {
		if node.tags.is_empty() {
			self.summary.skipped += 1;
			return;
		}
		let Some((lon, lat)) = node.position().filter(|(lon, lat)| is_valid_coordinate(*lat, *lon)) else {
			log::trace!("skipping node {} without valid coordinates", node.id);
			self.summary.skipped += 1;
			return;
		};
		let geometry = Geometry::Point(PointGeometry::new(Coordinates::new(lon, lat)));
		if self.emit(geometry, clean_tags(&node.tags), OsmElementKind::Node, node.id, collection) {
			self.summary.points += 1;
		}
	}

	fn convert_way(&mut self, way: &OsmWay, lookup: &NodeLookup, collection: &mut GeoCollection) {
		if way.nodes.is_empty() {
			log::trace!("skipping way {} without node references", way.id);
			self.summary.skipped += 1;
			return;
		}
		let coords = lookup.resolve_way(way);
		if coords.len() < 2 {
			log::trace!("skipping way {}: only {} of {} nodes resolved", way.id, coords.len(), way.nodes.len());
			self.summary.skipped += 1;
			return;
		}

		let properties = clean_tags(&way.tags);
		let polygon = is_area(&properties, way.is_closed(), coords.len()) && coords.len() > 3;
		let geometry = if polygon {
			let mut ring = RingGeometry(coords);
			ring.close();
			Geometry::Polygon(PolygonGeometry(vec![ring]))
		} else {
			Geometry::LineString(LineStringGeometry(coords))
		};

		if self.emit(geometry, properties, OsmElementKind::Way, way.id, collection) {
			if polygon {
				self.summary.polygons += 1;
			} else {
				self.summary.lines += 1;
			}
		}
	}

	fn convert_relation(
		&mut self,
		relation: &OsmRelation,
		lookup: &NodeLookup,
		ways: &HashMap<i64, &OsmWay>,
		collection: &mut GeoCollection,
	) {
		let lines: Vec<LineStringGeometry> = relation
			.members
			.iter()
			.filter(|member| member.kind == OsmElementKind::Way)
			.filter_map(|member| ways.get(&member.reference))
			.map(|way| lookup.resolve_way(way))
			.filter(|coords| coords.len() >= 2)
			.map(LineStringGeometry)
			.collect();

		if lines.is_empty() {
			log::trace!("skipping relation {} without resolvable member ways", relation.id);
			self.summary.skipped += 1;
			return;
		}

		let geometry = Geometry::MultiLineString(MultiLineStringGeometry(lines));
		if self.emit(
			geometry,
			clean_tags(&relation.tags),
			OsmElementKind::Relation,
			relation.id,
			collection,
		) {
			self.summary.multi_lines += 1;
		}
	}

	/// Clips and appends a feature; returns `false` if the clipper dropped it.
	fn emit(
		&mut self,
		geometry: Geometry,
		mut properties: GeoProperties,
		kind: OsmElementKind,
		id: i64,
		collection: &mut GeoCollection,
	) -> bool {
		let mut feature = GeoFeature::new(geometry);
		if self.options.include_osm_ids {
			properties.insert("osm_type", kind.as_str());
			properties.insert("osm_id", id.to_string());
			feature.set_id(format!("{kind}/{id}"));
		}
		feature.properties = properties;

		if let Some(feature) = self.clipper.clip_feature(feature) {
			collection.push(feature);
			true
		} else {
			log::trace!("{kind} {id} dropped by clip boundary");
			self.summary.clipped += 1;
			false
		}
	}
}

/// Converts without progress reporting.
#[must_use]
pub fn convert_elements(elements: &[OsmElement], options: ConvertOptions) -> GeoCollection {
	OsmConverter::new(options).convert(elements, &mut ProgressDrain)
}

/// Node id to coordinate lookup; nodes with invalid coordinates are left out.
struct NodeLookup(HashMap<i64, Coordinates>);

impl NodeLookup {
	fn new(nodes: &[&OsmNode]) -> Self {
		NodeLookup(
			nodes
				.iter()
				.filter_map(|node| {
					let (lon, lat) = node.position()?;
					is_valid_coordinate(lat, lon).then(|| (node.id, Coordinates::new(lon, lat)))
				})
				.collect(),
		)
	}

	/// Resolves the way's node references, falling back to inline geometry and skipping dangling ones.
	fn resolve_way(&self, way: &OsmWay) -> Vec<Coordinates> {
		way.nodes
			.iter()
			.enumerate()
			.filter_map(|(index, id)| {
				self.0.get(id).copied().or_else(|| {
					way.inline_position(index)
						.filter(|(lon, lat)| is_valid_coordinate(*lat, *lon))
						.map(|(lon, lat)| Coordinates::new(lon, lat))
				})
			})
			.collect()
	}
}
