pub mod area;
pub mod convert;
pub mod fetch;
mod output;
pub mod stats;
