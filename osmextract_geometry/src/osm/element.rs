use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

/// Raw OSM tags, kept exactly as delivered.
pub type OsmTags = BTreeMap<String, String>;

/// One element of an Overpass JSON response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OsmElement {
	Node(OsmNode),
	Way(OsmWay),
	Relation(OsmRelation),
	/// An entry of the response that could not be read, e.g. a node without `id`.
	#[serde(skip)]
	Malformed,
	/// Element types without geometry meaning here, e.g. `area` or `count`.
	#[serde(other)]
	Other,
}

impl OsmElement {
	#[must_use]
	pub fn id(&self) -> Option<i64> {
		match self {
			OsmElement::Node(n) => Some(n.id),
			OsmElement::Way(w) => Some(w.id),
			OsmElement::Relation(r) => Some(r.id),
			OsmElement::Other | OsmElement::Malformed => None,
		}
	}

	#[must_use]
	pub fn kind(&self) -> Option<OsmElementKind> {
		match self {
			OsmElement::Node(_) => Some(OsmElementKind::Node),
			OsmElement::Way(_) => Some(OsmElementKind::Way),
			OsmElement::Relation(_) => Some(OsmElementKind::Relation),
			OsmElement::Other | OsmElement::Malformed => None,
		}
	}

	#[must_use]
	pub fn tags(&self) -> Option<&OsmTags> {
		match self {
			OsmElement::Node(n) => Some(&n.tags),
			OsmElement::Way(w) => Some(&w.tags),
			OsmElement::Relation(r) => Some(&r.tags),
			OsmElement::Other | OsmElement::Malformed => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmElementKind {
	Node,
	Way,
	Relation,
}

impl OsmElementKind {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			OsmElementKind::Node => "node",
			OsmElementKind::Way => "way",
			OsmElementKind::Relation => "relation",
		}
	}
}

impl Display for OsmElementKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmNode {
	pub id: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lat: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lon: Option<f64>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub tags: OsmTags,
}

impl OsmNode {
	/// `(lon, lat)` if the node carries both coordinates.
	#[must_use]
	pub fn position(&self) -> Option<(f64, f64)> {
		Some((self.lon?, self.lat?))
	}
}

/// A position inside an inline way geometry (`out geom`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OsmLatLon {
	pub lat: f64,
	pub lon: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmWay {
	pub id: i64,
	#[serde(default)]
	pub nodes: Vec<i64>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub tags: OsmTags,
	/// Inline coordinates aligned with `nodes`; entries may be `null`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub geometry: Option<Vec<Option<OsmLatLon>>>,
}

impl OsmWay {
	/// Closed means the first and the last node reference are the same id.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.nodes.len() > 1 && self.nodes.first() == self.nodes.last()
	}

	/// The inline coordinate at `index`, if any.
	#[must_use]
	pub fn inline_position(&self, index: usize) -> Option<(f64, f64)> {
		let point = self.geometry.as_ref()?.get(index)?.as_ref()?;
		Some((point.lon, point.lat))
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmRelation {
	pub id: i64,
	#[serde(default)]
	pub members: Vec<OsmMember>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub tags: OsmTags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OsmMember {
	#[serde(rename = "type")]
	pub kind: OsmElementKind,
	#[serde(rename = "ref")]
	pub reference: i64,
	#[serde(default)]
	pub role: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn deserialize_all_kinds() {
		let elements: Vec<OsmElement> = serde_json::from_value(json!([
			{"type": "node", "id": 1, "lat": 52.5, "lon": 13.4, "tags": {"amenity": "cafe"}},
			{"type": "node", "id": 2, "lat": 52.6, "lon": 13.5},
			{"type": "way", "id": 10, "nodes": [1, 2]},
			{"type": "relation", "id": 20, "members": [{"type": "way", "ref": 10, "role": "outer"}]},
			{"type": "area", "id": 3600000001_i64},
			{"type": "count", "tags": {"total": "3"}}
		]))
		.unwrap();

		assert_eq!(elements.len(), 6);
		let OsmElement::Node(node) = &elements[0] else { panic!() };
		assert_eq!(node.position(), Some((13.4, 52.5)));
		assert_eq!(node.tags.get("amenity").map(String::as_str), Some("cafe"));
		assert!(matches!(&elements[1], OsmElement::Node(n) if n.tags.is_empty()));
		assert!(matches!(&elements[2], OsmElement::Way(w) if w.nodes == vec![1, 2] && w.geometry.is_none()));
		let OsmElement::Relation(relation) = &elements[3] else { panic!() };
		assert_eq!(relation.members[0].kind, OsmElementKind::Way);
		assert_eq!(relation.members[0].reference, 10);
		assert_eq!(relation.members[0].role, "outer");
		assert_eq!(elements[4], OsmElement::Other);
		assert_eq!(elements[5].id(), None);
	}

	#[test]
	fn inline_geometry() {
		let way: OsmWay = serde_json::from_value(json!({
			"id": 5,
			"nodes": [1, 2, 3],
			"geometry": [{"lat": 1.0, "lon": 2.0}, null, {"lat": 3.0, "lon": 4.0}]
		}))
		.unwrap();
		assert_eq!(way.inline_position(0), Some((2.0, 1.0)));
		assert_eq!(way.inline_position(1), None);
		assert_eq!(way.inline_position(2), Some((4.0, 3.0)));
		assert_eq!(way.inline_position(3), None);
	}

	#[test]
	fn closed() {
		let way = |nodes: Vec<i64>| OsmWay {
			id: 1,
			nodes,
			..OsmWay::default()
		};
		assert!(way(vec![1, 2, 3, 1]).is_closed());
		assert!(!way(vec![1, 2, 3]).is_closed());
		assert!(!way(vec![1]).is_closed());
		assert!(!way(vec![]).is_closed());
	}

	#[test]
	fn accessors() {
		let element = OsmElement::Way(OsmWay {
			id: 7,
			..OsmWay::default()
		});
		assert_eq!(element.id(), Some(7));
		assert_eq!(element.kind(), Some(OsmElementKind::Way));
		assert_eq!(element.kind().unwrap().to_string(), "way");
		assert!(element.tags().unwrap().is_empty());
	}
}
