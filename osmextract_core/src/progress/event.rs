use serde::Serialize;
use std::fmt::Display;

/// The phase a conversion is in when an event is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStage {
	Start,
	Nodes,
	Ways,
	Relations,
	Complete,
}

impl ProgressStage {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			ProgressStage::Start => "start",
			ProgressStage::Nodes => "nodes",
			ProgressStage::Ways => "ways",
			ProgressStage::Relations => "relations",
			ProgressStage::Complete => "complete",
		}
	}
}

impl Display for ProgressStage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One discrete progress notification.
///
/// `progress` is a coarse percentage in `0..=100`; `processed` and `total` count the items of
/// the current stage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressEvent {
	pub stage: ProgressStage,
	pub progress: u8,
	pub processed: usize,
	pub total: usize,
	pub message: String,
}

impl ProgressEvent {
	pub fn new(stage: ProgressStage, progress: u8, processed: usize, total: usize, message: impl Into<String>) -> Self {
		ProgressEvent {
			stage,
			progress: progress.min(100),
			processed,
			total,
			message: message.into(),
		}
	}

	/// The final event of a run, always at 100 %.
	pub fn complete(total: usize, message: impl Into<String>) -> Self {
		ProgressEvent::new(ProgressStage::Complete, 100, total, total, message)
	}

	/// Maps `processed / total` linearly onto `start..start + span` percent.
	#[must_use]
	pub fn scaled(processed: usize, total: usize, start: u8, span: u8) -> u8 {
		if total == 0 {
			return start;
		}
		let fraction = (processed.min(total) as f64) / (total as f64);
		(f64::from(start) + fraction * f64::from(span)).floor() as u8
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 100, 0, 50, 0)]
	#[case(50, 100, 0, 50, 25)]
	#[case(100, 100, 0, 50, 50)]
	#[case(50, 200, 50, 40, 60)]
	#[case(300, 200, 50, 40, 90)]
	#[case(5, 0, 50, 40, 50)]
	fn scaled(#[case] processed: usize, #[case] total: usize, #[case] start: u8, #[case] span: u8, #[case] expected: u8) {
		assert_eq!(ProgressEvent::scaled(processed, total, start, span), expected);
	}

	#[test]
	fn progress_is_capped() {
		let event = ProgressEvent::new(ProgressStage::Ways, 250, 1, 2, "ways");
		assert_eq!(event.progress, 100);
	}

	#[test]
	fn complete() {
		let event = ProgressEvent::complete(42, "done");
		assert_eq!(event.stage, ProgressStage::Complete);
		assert_eq!(event.progress, 100);
		assert_eq!(event.processed, 42);
		assert_eq!(event.total, 42);
	}

	#[test]
	fn stage_names() {
		assert_eq!(ProgressStage::Relations.to_string(), "relations");
		assert_eq!(serde_json::to_string(&ProgressStage::Start).unwrap(), "\"start\"");
	}
}
