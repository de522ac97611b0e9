mod filter;
mod query;

pub use filter::TagFilter;
pub use query::OverpassQuery;

#[cfg(feature = "http")]
mod client;
#[cfg(feature = "http")]
pub use client::OverpassClient;
