use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use test_utilities::BINARY_NAME;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("area", "[OPTIONS] <BBOX>")]
#[case("convert", "[OPTIONS] <INPUT>")]
#[case("fetch", "[OPTIONS]")]
#[case("stats", "[OPTIONS] <INPUT>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.args(sub_command.split(" "))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}

#[test]
fn version() -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with(format!("osmextract {}", env!("CARGO_PKG_VERSION"))));
	Ok(())
}
