//! Generator constants, defaults and the validated runtime configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{GenerationError, Result, invalid_parameter};

// Cellular automaton rules
/// Number of smoothing passes per generation
pub const SMOOTHING_PASSES: usize = 5;
/// Floor neighbour count at which a cell keeps its state
pub const SMOOTHING_THRESHOLD: usize = 4;

// Safety limits
/// Smallest grid side that still has an interior
pub const MIN_GRID_DIMENSION: usize = 3;
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
// 4^10 points is about a million; deeper curves only repeat cells
/// Maximum Hilbert curve recursion depth
pub const MAX_HILBERT_ORDER: u32 = 10;
/// Largest side of the scaled guide curve, `extent × hilbert_size`
///
/// Keeps curve coordinates and the distances between them far from `i32`
/// overflow.
pub const MAX_CURVE_SPAN: usize = 1 << 20;

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 64;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 64;
/// Default initial floor density
pub const DEFAULT_FILL_PERCENTAGE: u8 = 45;
/// Default guide curve recursion depth
pub const DEFAULT_HILBERT_ORDER: u32 = 2;
/// Default guide curve spacing multiplier
pub const DEFAULT_HILBERT_SIZE: i32 = 2;
/// Default corridor widening radius
pub const DEFAULT_PATH_WIDTH: usize = 1;
/// Default negative mask erosion radius
pub const DEFAULT_NEGATIVE_PATH_GIRTH: usize = 2;

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT: &str = "cave.png";
/// Default pixels per cell in exported images
pub const DEFAULT_SCALE: u32 = 4;
/// Suffix added to debug overlay filenames
pub const OVERLAY_SUFFIX: &str = "_overlay";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters of a single generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Seed text; empty falls back to a clock-derived seed
    pub seed: String,
    /// Chance in percent that an interior cell starts as floor
    pub fill_percentage: u8,
    /// Guide curve recursion depth
    pub hilbert_order: u32,
    /// Spacing multiplier of guide curve coordinates
    pub hilbert_size: i32,
    /// Radius opened around path cells in dense regions
    pub path_width: usize,
    /// Erosion radius of the negative mask
    pub negative_path_girth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: String::new(),
            fill_percentage: DEFAULT_FILL_PERCENTAGE,
            hilbert_order: DEFAULT_HILBERT_ORDER,
            hilbert_size: DEFAULT_HILBERT_SIZE,
            path_width: DEFAULT_PATH_WIDTH,
            negative_path_girth: DEFAULT_NEGATIVE_PATH_GIRTH,
        }
    }
}

impl GeneratorConfig {
    /// Side length of the square the guide curve fills
    pub fn extent(&self) -> usize {
        self.width.max(self.height)
    }

    /// Check every parameter against the generator's limits
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameter`] naming the first field
    /// that is out of range.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be at least {MIN_GRID_DIMENSION} to leave an interior"),
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if self.fill_percentage > 100 {
            return Err(invalid_parameter(
                "fill_percentage",
                &self.fill_percentage,
                &"must be between 0 and 100",
            ));
        }

        if self.hilbert_order > MAX_HILBERT_ORDER {
            return Err(invalid_parameter(
                "hilbert_order",
                &self.hilbert_order,
                &format!("must not exceed {MAX_HILBERT_ORDER}"),
            ));
        }

        if self.hilbert_size < 1 {
            return Err(invalid_parameter(
                "hilbert_size",
                &self.hilbert_size,
                &"must be at least 1",
            ));
        }

        let span = (self.hilbert_size as usize).saturating_mul(self.extent());
        if span > MAX_CURVE_SPAN {
            return Err(invalid_parameter(
                "hilbert_size",
                &self.hilbert_size,
                &format!(
                    "scaled curve span {span} exceeds {MAX_CURVE_SPAN}; lower it or the grid size"
                ),
            ));
        }

        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure. The result is not validated.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenerationError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| GenerationError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
