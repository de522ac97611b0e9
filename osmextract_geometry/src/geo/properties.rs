use serde::Serialize;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// String key/value properties of a feature, ordered by key.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeoProperties {
	properties: BTreeMap<String, String>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.properties.insert(key.into(), value.into());
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.clone(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.properties.get(key).map(String::as_str)
	}
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
		self.properties.iter()
	}
	pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
		self.properties.keys()
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a String);
	type IntoIter = btree_map::Iter<'a, String, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, &str)>> for GeoProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
		}
	}
}

impl From<BTreeMap<String, String>> for GeoProperties {
	fn from(properties: BTreeMap<String, String>) -> Self {
		GeoProperties { properties }
	}
}

impl FromIterator<(String, String)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
