use crate::math::{area_km2, is_valid_coordinate};
use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A geographic bounding box in WGS84 degrees.
///
/// Boxes built through [`BoundingBox::new`] are guaranteed to satisfy `north >= south` and
/// `east >= west`; boxes crossing the antimeridian are rejected.
///
/// # Examples
///
/// ```
/// use osmextract_core::BoundingBox;
///
/// let bbox = BoundingBox::new(13.38, 52.46, 13.43, 52.49).unwrap();
/// assert!(bbox.contains(13.4, 52.47));
/// assert_eq!(bbox.to_overpass_bbox(), "52.46,13.38,52.49,13.43");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
	pub north: f64,
	pub south: f64,
	pub east: f64,
	pub west: f64,
}

impl BoundingBox {
	/// Creates a validated bounding box from `west, south, east, north`.
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<BoundingBox> {
		BoundingBox {
			north,
			south,
			east,
			west,
		}
		.checked()
	}

	/// A degenerate box covering exactly one point.
	#[must_use]
	pub fn from_point(lon: f64, lat: f64) -> BoundingBox {
		BoundingBox {
			north: lat,
			south: lat,
			east: lon,
			west: lon,
		}
	}

	/// Returns the box as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Inclusive containment test.
	#[must_use]
	pub fn contains(&self, lon: f64, lat: f64) -> bool {
		lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
	}

	/// Moves a point onto the nearest position inside the box, coordinate by coordinate.
	#[must_use]
	pub fn clamp(&self, lon: f64, lat: f64) -> (f64, f64) {
		(lon.clamp(self.west, self.east), lat.clamp(self.south, self.north))
	}

	/// Grows the box so that it includes the given point.
	pub fn extend_point(&mut self, lon: f64, lat: f64) {
		self.west = self.west.min(lon);
		self.south = self.south.min(lat);
		self.east = self.east.max(lon);
		self.north = self.north.max(lat);
	}

	/// Grows the box so that it includes `other`.
	pub fn extend(&mut self, other: &BoundingBox) {
		self.west = self.west.min(other.west);
		self.south = self.south.min(other.south);
		self.east = self.east.max(other.east);
		self.north = self.north.max(other.north);
	}

	/// Approximate area in km², see [`crate::math::area_km2`].
	#[must_use]
	pub fn area_km2(&self) -> f64 {
		area_km2(self)
	}

	/// Formats the box in the `south,west,north,east` order used by Overpass QL.
	#[must_use]
	pub fn to_overpass_bbox(&self) -> String {
		format!("{},{},{},{}", self.south, self.west, self.north, self.east)
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			is_valid_coordinate(self.south, self.west),
			"south-west corner ({}, {}) is not a valid coordinate",
			self.west,
			self.south
		);
		ensure!(
			is_valid_coordinate(self.north, self.east),
			"north-east corner ({}, {}) is not a valid coordinate",
			self.east,
			self.north
		);
		ensure!(
			self.south <= self.north,
			"south ({}) must be <= north ({})",
			self.south,
			self.north
		);
		ensure!(
			self.west <= self.east,
			"west ({}) must be <= east ({}), boxes crossing the antimeridian are not supported",
			self.west,
			self.east
		);
		Ok(self)
	}
}

impl Display for BoundingBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
	}
}

impl TryFrom<Vec<f64>> for BoundingBox {
	type Error = anyhow::Error;

	/// Builds a box from exactly four values `[west, south, east, north]`.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"bounding box must have 4 values (west, south, east, north), but got {}",
			input.len()
		);
		BoundingBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<[f64; 4]> for BoundingBox {
	type Error = anyhow::Error;
	fn try_from(input: [f64; 4]) -> Result<Self> {
		BoundingBox::new(input[0], input[1], input[2], input[3])
	}
}

impl FromStr for BoundingBox {
	type Err = anyhow::Error;

	/// Parses `"west,south,east,north"`; values may also be separated by `;` or spaces.
	fn from_str(text: &str) -> Result<Self> {
		log::trace!("parsing bbox {text:?}");
		let values = text
			.split([' ', ',', ';'])
			.filter(|s| !s.is_empty())
			.map(|s| {
				s.parse::<f64>()
					.with_context(|| format!("bbox value {s:?} is not a number"))
			})
			.collect::<Result<Vec<f64>>>()?;

		if values.len() != 4 {
			bail!("bbox must contain exactly 4 numbers, but got: {text:?}");
		}

		BoundingBox::try_from(values).with_context(|| format!("invalid bbox {text:?}"))
	}
}
