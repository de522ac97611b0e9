use crate::GeoProperties;
use std::collections::BTreeMap;

/// Metadata keys that describe the edit rather than the mapped object.
pub const SKIPPED_TAG_KEYS: [&str; 4] = ["created_by", "source", "source:ref", "attribution"];

/// Strips empty values and editing metadata from raw OSM tags.
///
/// Only empty values are dropped; whitespace is passed through unchanged. Cleaning is idempotent.
#[must_use]
pub fn clean_tags(tags: &BTreeMap<String, String>) -> GeoProperties {
	tags
		.iter()
		.filter(|(key, value)| !value.is_empty() && !SKIPPED_TAG_KEYS.contains(&key.as_str()))
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect()
}
