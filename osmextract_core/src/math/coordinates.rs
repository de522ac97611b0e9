/// Returns `true` if `lat` lies within `[-90, 90]` and `lon` within `[-180, 180]`.
///
/// Non-finite values are never valid.
#[must_use]
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
	(-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
