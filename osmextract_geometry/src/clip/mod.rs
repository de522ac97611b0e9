//! Approximate clipping of features to a rectangular boundary.
//!
//! Vertices outside the boundary are dropped, or for lines clamped onto the boundary when the
//! following vertex is inside. No edge intersections are computed, so clipped rings may be
//! self-intersecting; this keeps output identical to the established behaviour.

mod boundary;
mod clipper;

pub use boundary::ClipBoundary;
pub use clipper::BoundaryClipper;
