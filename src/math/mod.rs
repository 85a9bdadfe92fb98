//! Mathematical utilities for the generator

/// Hilbert space-filling curve used as the cave guide
pub mod hilbert;
/// Seed derivation and random draws
pub mod probability;
