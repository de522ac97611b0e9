use test_utilities::*;

#[test]
fn overpass_statistics() {
	let o = osmextract_output_args(&["stats", path_str(&get_testdata("overpass_sample.json"))]);
	assert!(o.success, "{}", o.stderr);

	let report: serde_json::Value = serde_json::from_str(&o.stdout).unwrap();
	let statistics = &report["statistics"];
	assert_eq!(statistics["total_features"], 4);
	assert_eq!(statistics["geometry_types"]["points"], 2);
	assert_eq!(statistics["geometry_types"]["lines"], 1);
	assert_eq!(statistics["geometry_types"]["polygons"], 1);
	assert!(report.get("sample").is_none());
}

#[test]
fn geojson_sample() {
	let o = osmextract_output_args(&["stats", path_str(&get_testdata("sample.geojson")), "--sample", "3"]);
	assert!(o.success, "{}", o.stderr);

	let report: serde_json::Value = serde_json::from_str(&o.stdout).unwrap();
	assert_eq!(report["statistics"]["total_features"], 3);
	let sample = report["sample"].as_array().unwrap();
	assert_eq!(sample.len(), 3);
	assert_eq!(sample[0]["type"], "Feature");
}

#[test]
fn rejects_unknown_document() {
	let dir = get_temp_output();
	let path = dir.path().join("other.json");
	std::fs::write(&path, r#"{"hello": "world"}"#).unwrap();

	let o = osmextract_output_args(&["stats", path_str(&path)]);
	assert!(!o.success);
	assert_contains!(o.stderr, "neither an Overpass JSON response nor GeoJSON");
}
