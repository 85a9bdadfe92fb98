/// Cellular automaton fill, smoothing, pruning and border sealing
pub mod automaton;
/// Generation pipeline orchestration
pub mod executor;
/// Negative path mask of cells forced closed
pub mod negative;
