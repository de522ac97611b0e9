use super::ProgressEvent;

/// Observer receiving progress events.
pub trait ProgressSink {
	fn notify(&mut self, event: ProgressEvent);
}

/// A sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressDrain;

impl ProgressSink for ProgressDrain {
	fn notify(&mut self, _event: ProgressEvent) {}
}

impl ProgressSink for Vec<ProgressEvent> {
	fn notify(&mut self, event: ProgressEvent) {
		self.push(event);
	}
}

/// Adapts a closure into a [`ProgressSink`].
///
/// ```rust
/// use osmextract_core::progress::*;
///
/// let mut last = 0;
/// let mut sink = ProgressFn::new(|event: &ProgressEvent| last = event.progress);
/// sink.notify(ProgressEvent::complete(1, "done"));
/// drop(sink);
/// assert_eq!(last, 100);
/// ```
pub struct ProgressFn<F>(F);

impl<F: FnMut(&ProgressEvent)> ProgressFn<F> {
	pub fn new(callback: F) -> Self {
		ProgressFn(callback)
	}
}

impl<F: FnMut(&ProgressEvent)> ProgressSink for ProgressFn<F> {
	fn notify(&mut self, event: ProgressEvent) {
		(self.0)(&event);
	}
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
	fn notify(&mut self, event: ProgressEvent) {
		(**self).notify(event);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::ProgressStage;

	#[test]
	fn drain_accepts_everything() {
		let mut drain = ProgressDrain;
		drain.notify(ProgressEvent::complete(0, ""));
	}

	#[test]
	fn vec_records_in_order() {
		let mut events = Vec::new();
		events.notify(ProgressEvent::new(ProgressStage::Start, 0, 0, 3, "a"));
		events.notify(ProgressEvent::new(ProgressStage::Nodes, 10, 1, 3, "b"));
		let stages: Vec<ProgressStage> = events.iter().map(|e| e.stage).collect();
		assert_eq!(stages, vec![ProgressStage::Start, ProgressStage::Nodes]);
	}

	#[test]
	fn closure_and_reference() {
		let mut count = 0;
		{
			let mut sink = ProgressFn::new(|_: &ProgressEvent| count += 1);
			let by_ref: &mut dyn ProgressSink = &mut sink;
			by_ref.notify(ProgressEvent::complete(0, ""));
			by_ref.notify(ProgressEvent::complete(0, ""));
		}
		assert_eq!(count, 2);
	}
}
