//! Progress reporting for long running, synchronous work.
//!
//! Work such as the OSM conversion does not stream; it notifies an observer at a few discrete
//! points instead. The observer is anything implementing [`ProgressSink`]:
//!
//! - [`ProgressDrain`] ignores every event,
//! - `Vec<ProgressEvent>` records them,
//! - [`ProgressFn`] wraps a closure,
//! - [`ProgressBar`] renders them on the terminal.
//!
//! # Examples
//!
//! ```rust
//! use osmextract_core::progress::*;
//!
//! let mut events: Vec<ProgressEvent> = Vec::new();
//! events.notify(ProgressEvent::new(ProgressStage::Start, 0, 0, 10, "starting"));
//! events.notify(ProgressEvent::complete(10, "done"));
//! assert_eq!(events.last().unwrap().progress, 100);
//! ```

mod event;
mod progress_bar;
mod sink;

pub use event::{ProgressEvent, ProgressStage};
pub use progress_bar::ProgressBar;
pub use sink::{ProgressDrain, ProgressFn, ProgressSink};
