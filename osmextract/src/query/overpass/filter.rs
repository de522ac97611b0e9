use anyhow::{Result, bail};
use std::{fmt::Display, str::FromStr};

/// One tag condition of an Overpass query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagFilter {
	/// `["key"]`: the tag exists with any value.
	Exists(String),
	/// `["key"="value"]`
	Equals(String, String),
}

impl TagFilter {
	#[must_use]
	pub fn key(&self) -> &str {
		match self {
			TagFilter::Exists(key) | TagFilter::Equals(key, _) => key,
		}
	}
}

/// Escapes a string for use inside a double quoted Overpass QL literal.
fn quote(text: &str) -> String {
	let mut quoted = String::with_capacity(text.len() + 2);
	quoted.push('"');
	for c in text.chars() {
		match c {
			'"' => quoted.push_str("\\\""),
			'\\' => quoted.push_str("\\\\"),
			'\n' => quoted.push_str("\\n"),
			_ => quoted.push(c),
		}
	}
	quoted.push('"');
	quoted
}

impl Display for TagFilter {
	/// Formats the filter as an Overpass QL tag selector.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TagFilter::Exists(key) => write!(f, "[{}]", quote(key)),
			TagFilter::Equals(key, value) => write!(f, "[{}={}]", quote(key), quote(value)),
		}
	}
}

impl FromStr for TagFilter {
	type Err = anyhow::Error;

	/// Parses `key`, `key=*` or `key=value`.
	fn from_str(text: &str) -> Result<Self> {
		let (key, value) = match text.split_once('=') {
			Some((key, value)) => (key.trim(), Some(value.trim())),
			None => (text.trim(), None),
		};
		if key.is_empty() {
			bail!("tag filter {text:?} has an empty key");
		}
		Ok(match value {
			None | Some("*") => TagFilter::Exists(key.to_string()),
			Some("") => bail!("tag filter {text:?} has an empty value, use {key:?} or \"{key}=*\" to match any value"),
			Some(value) => TagFilter::Equals(key.to_string(), value.to_string()),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("highway", TagFilter::Exists("highway".into()), "[\"highway\"]")]
	#[case("highway=*", TagFilter::Exists("highway".into()), "[\"highway\"]")]
	#[case(" amenity = cafe ", TagFilter::Equals("amenity".into(), "cafe".into()), "[\"amenity\"=\"cafe\"]")]
	#[case("name=a=b", TagFilter::Equals("name".into(), "a=b".into()), "[\"name\"=\"a=b\"]")]
	#[case("name=Say \"hi\"", TagFilter::Equals("name".into(), "Say \"hi\"".into()), "[\"name\"=\"Say \\\"hi\\\"\"]")]
	fn parse_and_format(#[case] text: &str, #[case] filter: TagFilter, #[case] ql: &str) {
		let parsed: TagFilter = text.parse().unwrap();
		assert_eq!(parsed, filter);
		assert_eq!(parsed.to_string(), ql);
	}

	#[rstest]
	#[case("")]
	#[case("=cafe")]
	#[case("amenity=")]
	fn invalid(#[case] text: &str) {
		assert!(text.parse::<TagFilter>().is_err());
	}

	#[test]
	fn key() {
		assert_eq!(TagFilter::Equals("a".into(), "b".into()).key(), "a");
	}
}
