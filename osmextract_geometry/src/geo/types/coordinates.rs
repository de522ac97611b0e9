use serde_json::{Value, json};
use std::fmt::Debug;

/// A `[lon, lat]` pair in WGS84 degrees.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self([lon, lat])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let [x, y] = self.rounded(precision);
		json!([x, y])
	}

	/// Rounds both components to `precision` decimals, if given.
	#[must_use]
	pub fn rounded(&self, precision: Option<u8>) -> [f64; 2] {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			[(self.0[0] * factor).round() / factor, (self.0[1] * factor).round() / factor]
		} else {
			self.0
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.0[0],
			y: value.0[1],
		}
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn lon_is_x_lat_is_y() {
		let brandenburg_gate = Coordinates::new(13.377_704, 52.516_275);
		assert_eq!(brandenburg_gate.x(), 13.377_704);
		assert_eq!(brandenburg_gate.y(), 52.516_275);
		assert_eq!(format!("{brandenburg_gate:?}"), "[13.377704, 52.516275]");
	}

	#[rstest]
	#[case(None, [13.377_704_5, 52.516_275_5])]
	#[case(Some(7), [13.377_704_5, 52.516_275_5])]
	#[case(Some(5), [13.377_7, 52.516_28])]
	#[case(Some(0), [13.0, 53.0])]
	fn rounding(#[case] precision: Option<u8>, #[case] expected: [f64; 2]) {
		let c = Coordinates::new(13.377_704_5, 52.516_275_5);
		assert_eq!(c.rounded(precision), expected);
		assert_eq!(c.to_json(precision), json!(expected));
	}

	#[test]
	fn conversions() {
		assert_eq!(Coordinates::from(&[7, 8]), Coordinates::new(7.0, 8.0));
		assert_eq!(Coordinates::from((7.5, 8.5)), Coordinates::new(7.5, 8.5));

		let coord: geo::Coord = Coordinates::new(11.0, 22.0).into();
		assert_eq!(coord, geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(Coordinates::from(coord), Coordinates::new(11.0, 22.0));
	}

	#[test]
	fn non_finite_components() {
		assert!(Coordinates::new(1.0, 2.0).is_finite());
		assert!(!Coordinates::new(f64::NAN, 2.0).is_finite());
		assert!(!Coordinates::new(1.0, f64::INFINITY).is_finite());
	}
}
