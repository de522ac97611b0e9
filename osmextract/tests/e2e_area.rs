use rstest::rstest;
use test_utilities::*;

#[rstest]
#[case("13.38,52.46,13.43,52.49", "ok")]
#[case("13.2,52.4,13.5,52.55", "danger")]
#[case("-0.2,51.47,-0.1,51.55", "warn")]
fn area_severity(#[case] bbox: &str, #[case] severity: &str) {
	let o = osmextract_output(&format!("area {bbox}"));
	assert!(o.success, "{}", o.stderr);
	assert_contains!(o.stdout, "area: ");
	assert_contains!(o.stdout, &format!("severity: {severity}"));
}

#[test]
fn json_output() {
	let o = osmextract_output("area 13.38,52.46,13.43,52.49 --json");
	assert!(o.success, "{}", o.stderr);

	let report: serde_json::Value = serde_json::from_str(&o.stdout).unwrap();
	let area = report["area_km2"].as_f64().unwrap();
	assert!(area > 11.0 && area < 12.0, "{area}");
	assert_eq!(report["severity"], "ok");
	assert_eq!(report["formatted"], format!("{area:.2} km²"));
}

#[test]
fn invalid_bbox() {
	let o = osmextract_output("area 10,0,5,1");
	assert!(!o.success);
	assert_eq!(o.code, 2);
	assert_contains!(o.stderr, "invalid value");
}
