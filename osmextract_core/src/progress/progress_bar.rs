//! Terminal progress bar driven by [`ProgressEvent`]s.
//!
//! Renders `message▕bar▏ pct% stage processed/total elapsed` on stderr, with sub-character
//! precision. Nothing is drawn when stderr is not a terminal.

use super::{ProgressEvent, ProgressSink, ProgressStage};
use std::env;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

struct Inner {
	message: String,
	percent: u8,
	stage: ProgressStage,
	processed: usize,
	total: usize,
	start: Instant,
	finished: bool,
	visible: bool,
}

impl Inner {
	fn line(&self) -> String {
		let right = format!(
			"▏{:>3}% {} {}/{} {}",
			self.percent,
			self.stage,
			self.processed,
			self.total,
			format_elapsed(self.start.elapsed())
		);
		let width = available_bar_width(&self.message, &right);
		let mut line = String::new();
		let _ = write!(&mut line, "{}▕{}{}", self.message, make_bar(self.percent, width), right);
		line
	}

	fn redraw(&self) {
		if !self.visible {
			return;
		}
		let mut stderr = io::stderr();
		let _ = write!(stderr, "\r\x1b[2K{}", self.line());
		let _ = stderr.flush();
	}
}

/// A terminal progress bar handle, cloneable and thread-safe.
#[derive(Clone)]
pub struct ProgressBar {
	inner: Arc<Mutex<Inner>>,
}

impl ProgressBar {
	/// Creates a bar labelled with `message`; it is only drawn if stderr is a terminal.
	pub fn new(message: &str) -> ProgressBar {
		ProgressBar::with_visibility(message, io::stderr().is_terminal())
	}

	/// Creates a bar that never draws anything.
	pub fn hidden(message: &str) -> ProgressBar {
		ProgressBar::with_visibility(message, false)
	}

	fn with_visibility(message: &str, visible: bool) -> ProgressBar {
		let progress = ProgressBar {
			inner: Arc::new(Mutex::new(Inner {
				message: message.to_string(),
				percent: 0,
				stage: ProgressStage::Start,
				processed: 0,
				total: 0,
				start: Instant::now(),
				finished: false,
				visible,
			})),
		};
		progress.lock().redraw();
		progress
	}

	fn lock(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Current percentage.
	pub fn percent(&self) -> u8 {
		self.lock().percent
	}

	pub fn is_finished(&self) -> bool {
		self.lock().finished
	}

	/// Sets the bar to 100 % and ends the line.
	pub fn finish(&self) {
		let mut inner = self.lock();
		if inner.finished {
			return;
		}
		inner.percent = 100;
		inner.finished = true;
		inner.redraw();
		if inner.visible {
			let _ = io::stderr().write_all(b"\n");
			let _ = io::stderr().flush();
		}
	}

	/// Removes the bar line from the terminal.
	pub fn remove(&self) {
		let mut inner = self.lock();
		inner.finished = true;
		if inner.visible {
			let _ = io::stderr().write_all(b"\r\x1b[2K");
			let _ = io::stderr().flush();
		}
	}
}

impl ProgressSink for ProgressBar {
	fn notify(&mut self, event: ProgressEvent) {
		let complete = event.stage == ProgressStage::Complete;
		{
			let mut inner = self.lock();
			inner.percent = event.progress.max(inner.percent).min(100);
			inner.stage = event.stage;
			inner.processed = event.processed;
			inner.total = event.total;
			inner.redraw();
		}
		if complete {
			self.finish();
		}
	}
}

// prefer $COLUMNS, fallback 80
fn terminal_width() -> usize {
	if let Ok(cols) = env::var("COLUMNS")
		&& let Ok(v) = cols.parse::<usize>()
	{
		return v.max(10);
	}
	80
}

fn available_bar_width(message: &str, right: &str) -> usize {
	let taken = message.chars().count() + right.chars().count() + 1;
	let min_bar = 10usize;
	let total_width = terminal_width();
	if total_width > taken + min_bar {
		total_width - taken
	} else {
		min_bar
	}
}

fn make_bar(percent: u8, width: usize) -> String {
	let width = width.max(1);
	let exact = f64::from(percent.min(100)) / 100.0 * (width as f64);
	let whole = exact.floor() as usize;
	let rem = exact - whole as f64;

	// 8 levels, thickest first
	let partials = ["█", "▉", "▊", "▋", "▌", "▍", "▎", "▏"];

	let mut s = String::with_capacity(width * 3);
	for _ in 0..whole.min(width) {
		s.push('█');
	}
	if whole < width {
		let idx = (rem * 8.0).floor() as usize;
		if idx > 0 {
			s.push_str(partials[8 - idx.min(7)]);
		} else {
			s.push(' ');
		}
		for _ in whole + 1..width {
			s.push(' ');
		}
	}
	s
}

fn format_elapsed(d: Duration) -> String {
	let total = d.as_secs();
	let h = total / 3600;
	let m = (total % 3600) / 60;
	let s = total % 60;
	if h > 0 {
		format!("{h:02}:{m:02}:{s:02}")
	} else {
		format!("{m:02}:{s:02}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn follows_events() {
		let mut bar = ProgressBar::hidden("Converting");
		bar.notify(ProgressEvent::new(ProgressStage::Nodes, 25, 100, 400, "nodes"));
		assert_eq!(bar.percent(), 25);
		assert!(!bar.is_finished());
		bar.notify(ProgressEvent::complete(400, "done"));
		assert_eq!(bar.percent(), 100);
		assert!(bar.is_finished());
	}

	#[test]
	fn never_goes_backwards() {
		let mut bar = ProgressBar::hidden("Converting");
		bar.notify(ProgressEvent::new(ProgressStage::Ways, 60, 1, 2, ""));
		bar.notify(ProgressEvent::new(ProgressStage::Ways, 55, 1, 2, ""));
		assert_eq!(bar.percent(), 60);
	}

	#[test]
	fn line_contains_stage_and_counts() {
		let mut bar = ProgressBar::hidden("Test");
		bar.notify(ProgressEvent::new(ProgressStage::Ways, 70, 5, 10, ""));
		let line = bar.lock().line();
		assert!(line.starts_with("Test▕"));
		assert!(line.contains(" 70% ways 5/10 "));
	}

	#[rstest]
	#[case(0, 4, "    ")]
	#[case(50, 4, "██  ")]
	#[case(100, 4, "████")]
	#[case(100, 1, "█")]
	fn bar(#[case] percent: u8, #[case] width: usize, #[case] expected: &str) {
		assert_eq!(make_bar(percent, width), expected);
	}

	#[test]
	fn partial_block() {
		// 5% of 10 cells is half a cell
		assert_eq!(make_bar(5, 10), format!("▌{}", " ".repeat(9)));
	}

	#[rstest]
	#[case(0, "00:00")]
	#[case(75, "01:15")]
	#[case(3_725, "01:02:05")]
	fn elapsed(#[case] secs: u64, #[case] expected: &str) {
		assert_eq!(format_elapsed(Duration::from_secs(secs)), expected);
	}

	#[test]
	fn remove_finishes() {
		let bar = ProgressBar::hidden("Test");
		bar.remove();
		assert!(bar.is_finished());
	}
}
