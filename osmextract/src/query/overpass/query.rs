use super::TagFilter;
use osmextract_core::BoundingBox;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Display;

/// An Overpass QL request for all nodes, ways and relations inside a bounding box that match
/// any of the filters.
///
/// `out body;>;out skel qt;` returns the matched elements with tags, followed by the nodes of
/// every matched way without tags, which is what the converter needs to resolve way geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct OverpassQuery {
	pub bbox: BoundingBox,
	pub filters: Vec<TagFilter>,
	pub timeout_seconds: u32,
}

impl OverpassQuery {
	#[must_use]
	pub fn new(bbox: BoundingBox, filters: Vec<TagFilter>, timeout_seconds: u32) -> Self {
		OverpassQuery {
			bbox,
			filters,
			timeout_seconds,
		}
	}

	/// The query text in Overpass QL.
	#[must_use]
	pub fn to_ql(&self) -> String {
		let bbox = self.bbox.to_overpass_bbox();
		let mut statements = String::new();

		if self.filters.is_empty() {
			for kind in ["node", "way", "relation"] {
				statements.push_str(&format!("{kind}({bbox});"));
			}
		} else {
			for filter in &self.filters {
				for kind in ["node", "way", "relation"] {
					statements.push_str(&format!("{kind}{filter}({bbox});"));
				}
			}
		}

		format!(
			"[out:json][timeout:{}];({statements});out body;>;out skel qt;",
			self.timeout_seconds
		)
	}

	/// The form body Overpass expects: `data=<percent encoded query>`.
	#[must_use]
	pub fn to_form_body(&self) -> String {
		format!("data={}", utf8_percent_encode(&self.to_ql(), NON_ALPHANUMERIC))
	}
}

impl Display for OverpassQuery {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_ql())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn bbox() -> BoundingBox {
		BoundingBox::new(13.38, 52.51, 13.39, 52.52).unwrap()
	}

	#[test]
	fn without_filters_everything_is_requested() {
		let query = OverpassQuery::new(bbox(), vec![], 180);
		assert_eq!(
			query.to_ql(),
			"[out:json][timeout:180];(node(52.51,13.38,52.52,13.39);way(52.51,13.38,52.52,13.39);relation(52.51,13.38,52.52,13.39););out body;>;out skel qt;"
		);
	}

	#[test]
	fn one_union_member_per_filter_and_kind() {
		let filters = vec!["highway".parse().unwrap(), "amenity=cafe".parse().unwrap()];
		let query = OverpassQuery::new(bbox(), filters, 25);
		let ql = query.to_string();
		assert!(ql.starts_with("[out:json][timeout:25];("));
		assert!(ql.contains("node[\"highway\"](52.51,13.38,52.52,13.39);"));
		assert!(ql.contains("way[\"highway\"](52.51,13.38,52.52,13.39);"));
		assert!(ql.contains("relation[\"amenity\"=\"cafe\"](52.51,13.38,52.52,13.39);"));
		assert_eq!(ql.matches("(52.51,13.38,52.52,13.39)").count(), 6);
		assert!(ql.ends_with(");out body;>;out skel qt;"));
	}

	#[test]
	fn form_body_is_percent_encoded() {
		let query = OverpassQuery::new(bbox(), vec!["name=A&B".parse().unwrap()], 10);
		let body = query.to_form_body();
		assert!(body.starts_with("data=%5Bout%3Ajson%5D%5Btimeout%3A10%5D%3B"));
		assert!(body.contains("%22A%26B%22"));
		assert!(!body[5..].contains('&'));
		assert!(!body.contains(' '));
	}
}
