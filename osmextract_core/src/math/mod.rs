//! Small numeric helpers: coordinate validation and bounding box area estimation.

mod area;
mod coordinates;

pub use area::*;
pub use coordinates::*;
