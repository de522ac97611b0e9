//! Contains the leaf types shared by all osmextract crates: the geographic bounding box,
//! coordinate validation, the bounding box area approximation and progress reporting.

pub mod math;

pub mod progress;

pub mod types;
pub use types::*;
