//! Read-only summaries of a collection for previews and export metadata.

mod sample;
mod statistics;

pub use sample::sample;
pub use statistics::*;
