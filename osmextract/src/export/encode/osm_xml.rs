use crate::export::{metadata::GENERATOR, xml::XmlWriter};
use anyhow::Result;
use osmextract_core::BoundingBox;
use osmextract_geometry::osm::{OsmElement, OsmTags};

/// OSM XML 0.6 of the raw, unclipped elements with all original tags.
///
/// Elements are grouped as nodes, ways, relations, each group in input order. Nodes without a
/// position cannot be represented and are left out.
pub fn encode_osm_xml(elements: &[OsmElement], bounds: Option<&BoundingBox>) -> Result<Vec<u8>> {
	let mut xml = XmlWriter::new()?;
	xml.start("osm", &[("version", "0.6"), ("generator", GENERATOR)])?;

	if let Some(bbox) = bounds {
		xml.empty(
			"bounds",
			&[
				("minlat", bbox.south.to_string().as_str()),
				("minlon", bbox.west.to_string().as_str()),
				("maxlat", bbox.north.to_string().as_str()),
				("maxlon", bbox.east.to_string().as_str()),
			],
		)?;
	}

	for element in elements {
		if let OsmElement::Node(node) = element {
			let Some((lon, lat)) = node.position() else {
				log::trace!("node {} has no position, left out of OSM XML", node.id);
				continue;
			};
			let attributes = [
				("id", node.id.to_string()),
				("lat", lat.to_string()),
				("lon", lon.to_string()),
			];
			let attributes = as_str_pairs(&attributes);
			if node.tags.is_empty() {
				xml.empty("node", &attributes)?;
			} else {
				xml.start("node", &attributes)?;
				write_tags(&mut xml, &node.tags)?;
				xml.end("node")?;
			}
		}
	}

	for element in elements {
		if let OsmElement::Way(way) = element {
			let id = way.id.to_string();
			xml.start("way", &[("id", id.as_str())])?;
			for node_id in &way.nodes {
				xml.empty("nd", &[("ref", node_id.to_string().as_str())])?;
			}
			write_tags(&mut xml, &way.tags)?;
			xml.end("way")?;
		}
	}

	for element in elements {
		if let OsmElement::Relation(relation) = element {
			let id = relation.id.to_string();
			xml.start("relation", &[("id", id.as_str())])?;
			for member in &relation.members {
				xml.empty(
					"member",
					&[
						("type", member.kind.as_str()),
						("ref", member.reference.to_string().as_str()),
						("role", member.role.as_str()),
					],
				)?;
			}
			write_tags(&mut xml, &relation.tags)?;
			xml.end("relation")?;
		}
	}

	xml.end("osm")?;
	Ok(xml.finish())
}

fn write_tags(xml: &mut XmlWriter, tags: &OsmTags) -> Result<()> {
	for (key, value) in tags {
		xml.empty("tag", &[("k", key.as_str()), ("v", value.as_str())])?;
	}
	Ok(())
}

fn as_str_pairs<'a>(pairs: &'a [(&'a str, String)]) -> Vec<(&'a str, &'a str)> {
	pairs.iter().map(|(key, value)| (*key, value.as_str())).collect()
}
