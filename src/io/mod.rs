//! Configuration, errors and everything that touches the outside world

/// Command-line argument parsing and output writing
pub mod cli;
/// Constants, defaults and the generator configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of tile grids
pub mod image;
/// Batch progress display
pub mod progress;
/// Debug overlay of the guide structures
pub mod visualization;
