use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, Geometry, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, anyhow, bail, ensure};
use osmextract_core::math::is_valid_coordinate;
use serde_json::Value;

/// Parses GeoJSON text into a collection.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_value(&value)
}

/// Accepts a `FeatureCollection` or a single `Feature`.
pub fn parse_geojson_value(value: &Value) -> Result<GeoCollection> {
	match get_type(value)? {
		"FeatureCollection" => {
			let features = value
				.get("features")
				.and_then(Value::as_array)
				.ok_or_else(|| anyhow!("FeatureCollection must have a 'features' array"))?;
			features
				.iter()
				.enumerate()
				.map(|(index, feature)| parse_geojson_feature(feature).with_context(|| format!("feature {index}")))
				.collect::<Result<GeoCollection>>()
		}
		"Feature" => Ok(GeoCollection::from(vec![parse_geojson_feature(value)?])),
		other => bail!("expected a FeatureCollection or Feature, but got type '{other}'"),
	}
}

fn get_type(value: &Value) -> Result<&str> {
	value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("GeoJSON object must have a 'type'"))
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	ensure!(get_type(value)? == "Feature", "type must be 'Feature'");

	let geometry = match value.get("geometry") {
		Some(Value::Null) | None => bail!("feature is missing 'geometry'"),
		Some(geometry) => parse_geojson_geometry(geometry)?,
	};

	let id = match value.get("id") {
		None | Some(Value::Null) => None,
		Some(Value::String(s)) => Some(s.clone()),
		Some(Value::Number(n)) => Some(n.to_string()),
		Some(other) => bail!("feature id must be a string or number, but got {other}"),
	};

	let properties = match value.get("properties") {
		None | Some(Value::Null) => GeoProperties::new(),
		Some(Value::Object(map)) => map
			.iter()
			.filter_map(|(k, v)| stringify_value(v).map(|v| (k.clone(), v)))
			.collect(),
		Some(other) => bail!("feature properties must be an object, but got {other}"),
	};

	Ok(GeoFeature {
		id,
		geometry,
		properties,
	})
}

/// Property values are strings in this model; `null` is dropped.
fn stringify_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let geometry_type = get_type(value)?;
	let coordinates = value
		.get("coordinates")
		.ok_or_else(|| anyhow!("{geometry_type} is missing 'coordinates'"))?;

	Ok(match geometry_type {
		"Point" => Geometry::Point(PointGeometry(parse_position(coordinates)?)),
		"LineString" => Geometry::LineString(LineStringGeometry(parse_positions(coordinates)?)),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(
			parse_positions(coordinates)?.into_iter().map(PointGeometry).collect(),
		)),
		"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(
			as_array(coordinates)?
				.iter()
				.map(|line| parse_positions(line).map(LineStringGeometry))
				.collect::<Result<_>>()?,
		)),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(
			as_array(coordinates)?
				.iter()
				.map(parse_polygon)
				.collect::<Result<_>>()?,
		)),
		other => bail!("unsupported geometry type '{other}'"),
	})
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected an array of coordinates, but got {value}"))
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	let array = as_array(value)?;
	ensure!(array.len() >= 2, "a position needs at least 2 numbers, but got {value}");
	let lon = array[0].as_f64().ok_or_else(|| anyhow!("longitude is not a number: {value}"))?;
	let lat = array[1].as_f64().ok_or_else(|| anyhow!("latitude is not a number: {value}"))?;
	ensure!(
		is_valid_coordinate(lat, lon),
		"invalid coordinate (lon {lon}, lat {lat})"
	);
	Ok(Coordinates::new(lon, lat))
}

fn parse_positions(value: &Value) -> Result<Vec<Coordinates>> {
	as_array(value)?.iter().map(parse_position).collect()
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	Ok(PolygonGeometry(
		as_array(value)?
			.iter()
			.map(|ring| parse_positions(ring).map(RingGeometry))
			.collect::<Result<_>>()?,
	))
}
