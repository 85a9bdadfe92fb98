//! Analysis of the rasterized guide path

/// Classification of path cells into straights, corners and boundary endpoints
pub mod features;
/// Segment tracing between boundary endpoints
pub mod segments;
