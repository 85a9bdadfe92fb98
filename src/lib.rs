//! Cave map generation guided by a Hilbert space-filling curve
//!
//! A scaled and shifted Hilbert curve is rasterized into a path mask. The
//! mask is analysed for corners and boundary segments and eroded into a
//! negative mask of cells kept solid. A cellular automaton then smooths
//! random noise into a cave while the two masks keep the curve open and the
//! far-away rock closed.

#![forbid(unsafe_code)]

/// Generation pipeline, cellular automaton and negative mask
pub mod algorithm;
/// Corner classification and segment tracing on the path mask
pub mod analysis;
/// Configuration, errors, command line and image output
pub mod io;
/// Hilbert curve construction and seeded randomness
pub mod math;
/// Grid storage, tiles and path rasterization
pub mod spatial;

pub use io::error::{GenerationError, Result};
