//! Seed handling and the random draws used by the generator
//!
//! All randomness in a generation pass flows from one `StdRng` derived from
//! the seed string, so a fixed non-empty seed reproduces the same map.

use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};
use rustc_hash::FxHasher;

/// Where the seed string of a generation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// User supplied text, hashed deterministically
    Text(String),
    /// No seed supplied; derive one from the wall clock
    Clock,
}

impl SeedSource {
    /// Interpret a configured seed, treating the empty string as "no seed"
    pub fn from_config(seed: &str) -> Self {
        if seed.is_empty() {
            Self::Clock
        } else {
            Self::Text(seed.to_string())
        }
    }

    /// Produce the seed string actually used for generation
    ///
    /// The clock branch returns the current time in nanoseconds so the
    /// resulting map can still be reproduced by passing the string back in.
    pub fn resolve(self) -> String {
        match self {
            Self::Text(seed) => seed,
            Self::Clock => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |elapsed| elapsed.as_nanos());
                nanos.to_string()
            }
        }
    }
}

/// Hash a seed string to the 64-bit RNG seed
pub fn hash_seed(seed: &str) -> u64 {
    let mut hasher = FxHasher::default();
    seed.hash(&mut hasher);
    hasher.finish()
}

/// Create the generator RNG for a resolved seed string
pub fn seeded_rng(seed: &str) -> StdRng {
    StdRng::seed_from_u64(hash_seed(seed))
}

/// Draw a uniform percentile and test it against `percentage`
///
/// Returns true with probability `percentage / 100`; values of 100 or more
/// always succeed.
pub fn roll_percent(rng: &mut impl Rng, percentage: u8) -> bool {
    rng.random_range(0..100u8) < percentage
}

/// Draw one axis of the guide curve offset
///
/// The range is `[-extent * (cell_size - 1), 0)`, which keeps the scaled
/// curve overlapping the grid. An empty range (cell size of one) yields 0.
pub fn random_shift(rng: &mut impl Rng, extent: usize, cell_size: i32) -> i32 {
    let lower = -(extent as i32).saturating_mul(cell_size - 1);
    if lower >= 0 {
        0
    } else {
        rng.random_range(lower..0)
    }
}
