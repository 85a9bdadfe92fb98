//! Structural classification of path cells from their 4-neighbourhood
//!
//! A path cell is summarised by a [`NeighborPattern`] (which orthogonal
//! neighbours are on the path) and a [`BorderZone`] (where the cell sits
//! relative to the cave border). Interior cells are looked up in a 16-entry
//! table; cells on or next to the border go through small ordered rule lists
//! that only recognise boundary endpoints.

use crate::spatial::grid::Position;
use crate::spatial::raster::PathMask;

/// Structural role of a path cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFeature {
    /// Not on the path, or no recognised pattern
    None,
    /// Path continues left and right
    Horizontal,
    /// Path continues up and down
    Vertical,
    /// Path turns between left and down
    CornerTopLeft,
    /// Path turns between right and down
    CornerTopRight,
    /// Path turns between left and up
    CornerBottomLeft,
    /// Path turns between right and up
    CornerBottomRight,
    /// Path leaves through the left border
    BoundaryLeft,
    /// Path leaves through the top border
    BoundaryTop,
    /// Path leaves through the right border
    BoundaryRight,
    /// Path leaves through the bottom border
    BoundaryBottom,
}

impl CellFeature {
    /// Whether the feature is one of the four boundary endpoints
    pub const fn is_boundary(self) -> bool {
        matches!(
            self,
            Self::BoundaryLeft | Self::BoundaryTop | Self::BoundaryRight | Self::BoundaryBottom
        )
    }

    /// Whether the feature is one of the four corner orientations
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::CornerTopLeft
                | Self::CornerTopRight
                | Self::CornerBottomLeft
                | Self::CornerBottomRight
        )
    }

    /// Whether the cell belongs in the corner list
    pub const fn is_landmark(self) -> bool {
        self.is_corner() || self.is_boundary()
    }
}

/// On-path flags of the four orthogonal neighbours packed into a nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborPattern(u8);

impl NeighborPattern {
    /// Left neighbour `(x - 1, y)` is on the path
    pub const LEFT: u8 = 0b0001;
    /// Right neighbour `(x + 1, y)` is on the path
    pub const RIGHT: u8 = 0b0010;
    /// Upper neighbour `(x, y + 1)` is on the path
    pub const UP: u8 = 0b0100;
    /// Lower neighbour `(x, y - 1)` is on the path
    pub const DOWN: u8 = 0b1000;

    /// Build a pattern from raw bits, ignoring anything above the low nibble
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Sample the orthogonal neighbours of `pos`; off-mask neighbours are off
    pub fn sample(mask: &PathMask, pos: Position) -> Self {
        let [x, y] = pos;
        let mut bits = 0;
        for (bit, neighbour) in [
            (Self::LEFT, [x - 1, y]),
            (Self::RIGHT, [x + 1, y]),
            (Self::UP, [x, y + 1]),
            (Self::DOWN, [x, y - 1]),
        ] {
            if mask.is_on_path(neighbour) {
                bits |= bit;
            }
        }
        Self(bits)
    }

    /// Raw bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the bits selected by `care` equal `want`
    const fn matches(self, care: u8, want: u8) -> bool {
        self.0 & care == want
    }
}

/// Position of a cell relative to the cave border
///
/// Zones are resolved in declaration order, so a corner cell such as `(0, 0)`
/// falls in [`BorderZone::Bottom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderZone {
    /// Beyond the cave grid; never classified
    Outside,
    /// `y == 0`
    Bottom,
    /// `x == 0`
    Left,
    /// `x == width - 1`
    Right,
    /// `y == height - 1`
    Top,
    /// One cell in from any border
    NearBorder,
    /// All four neighbours are interior cells
    Interior,
}

impl BorderZone {
    /// Locate `pos` on a `width × height` grid
    pub const fn locate(pos: Position, width: usize, height: usize) -> Self {
        let [x, y] = pos;
        let max_x = width as i32 - 1;
        let max_y = height as i32 - 1;
        if x < 0 || y < 0 || x > max_x || y > max_y {
            Self::Outside
        } else if y == 0 {
            Self::Bottom
        } else if x == 0 {
            Self::Left
        } else if x == max_x {
            Self::Right
        } else if y == max_y {
            Self::Top
        } else if x == 1 || x == max_x - 1 || y == 1 || y == max_y - 1 {
            Self::NearBorder
        } else {
            Self::Interior
        }
    }
}

/// One single-sided boundary rule: the `care` bits must equal `want`
struct EdgeRule {
    care: u8,
    want: u8,
    feature: CellFeature,
}

const L: u8 = NeighborPattern::LEFT;
const R: u8 = NeighborPattern::RIGHT;
const U: u8 = NeighborPattern::UP;
const D: u8 = NeighborPattern::DOWN;

const BOTTOM_RULE: EdgeRule = EdgeRule {
    care: R | U | L,
    want: U,
    feature: CellFeature::BoundaryBottom,
};
const LEFT_RULE: EdgeRule = EdgeRule {
    care: R | U | D,
    want: R,
    feature: CellFeature::BoundaryLeft,
};
const RIGHT_RULE: EdgeRule = EdgeRule {
    care: L | U | D,
    want: L,
    feature: CellFeature::BoundaryRight,
};
const TOP_RULE: EdgeRule = EdgeRule {
    care: L | U | D,
    want: D,
    feature: CellFeature::BoundaryTop,
};

/// Interior features indexed by neighbour pattern bits
const INTERIOR_FEATURES: [CellFeature; 16] = {
    let mut table = [CellFeature::None; 16];
    table[(L | R) as usize] = CellFeature::Horizontal;
    table[(U | D) as usize] = CellFeature::Vertical;
    table[(L | D) as usize] = CellFeature::CornerTopLeft;
    table[(R | D) as usize] = CellFeature::CornerTopRight;
    table[(L | U) as usize] = CellFeature::CornerBottomLeft;
    table[(R | U) as usize] = CellFeature::CornerBottomRight;
    table
};

/// Look up the interior feature for a neighbour pattern
pub fn interior_feature(pattern: NeighborPattern) -> CellFeature {
    INTERIOR_FEATURES
        .get(pattern.bits() as usize)
        .copied()
        .unwrap_or(CellFeature::None)
}

/// Classifies path cells of a mask against the cave dimensions
#[derive(Debug, Clone, Copy)]
pub struct FeatureClassifier<'a> {
    mask: &'a PathMask,
    width: usize,
    height: usize,
}

impl<'a> FeatureClassifier<'a> {
    /// Create a classifier for a `width × height` cave
    pub const fn new(mask: &'a PathMask, width: usize, height: usize) -> Self {
        Self {
            mask,
            width,
            height,
        }
    }

    /// The path mask being classified
    pub const fn mask(&self) -> &'a PathMask {
        self.mask
    }

    /// Classify a single cell
    ///
    /// Off-path cells are always [`CellFeature::None`].
    pub fn classify(&self, pos: Position) -> CellFeature {
        if !self.mask.is_on_path(pos) {
            return CellFeature::None;
        }
        let pattern = NeighborPattern::sample(self.mask, pos);
        match BorderZone::locate(pos, self.width, self.height) {
            BorderZone::Outside => CellFeature::None,
            BorderZone::Bottom => apply_rule(&BOTTOM_RULE, pattern),
            BorderZone::Left => apply_rule(&LEFT_RULE, pattern),
            BorderZone::Right => apply_rule(&RIGHT_RULE, pattern),
            BorderZone::Top => apply_rule(&TOP_RULE, pattern),
            BorderZone::NearBorder => self.classify_near_border(pos, pattern),
            BorderZone::Interior => interior_feature(pattern),
        }
    }

    /// Boundary endpoints one cell in from the border
    ///
    /// The rules are tried right, left, top, bottom; the first whose side
    /// condition and pattern both hold wins.
    fn classify_near_border(&self, pos: Position, pattern: NeighborPattern) -> CellFeature {
        let [x, y] = pos;
        let near_right = x == self.width as i32 - 2;
        let near_top = y == self.height as i32 - 2;
        let rules = [
            (near_right, R | U | D, R, CellFeature::BoundaryRight),
            (x == 1, L | U | D, L, CellFeature::BoundaryLeft),
            (near_top, L | R | D, D, CellFeature::BoundaryTop),
            (y == 1, L | R | U, U, CellFeature::BoundaryBottom),
        ];
        rules
            .into_iter()
            .find(|&(side, care, want, _)| side && pattern.matches(care, want))
            .map_or(CellFeature::None, |(_, _, _, feature)| feature)
    }
}

const fn apply_rule(rule: &EdgeRule, pattern: NeighborPattern) -> CellFeature {
    if pattern.matches(rule.care, rule.want) {
        rule.feature
    } else {
        CellFeature::None
    }
}

/// A path cell recognised as a corner or boundary endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Cell coordinates
    pub position: Position,
    /// Classified role
    pub feature: CellFeature,
}

/// Collect corners and boundary endpoints over the cave interior
///
/// Cells are scanned column by column, skipping the outer border ring, which
/// fixes the order segment tracing later consumes them in.
pub fn collect_corners(classifier: &FeatureClassifier<'_>) -> Vec<Corner> {
    let width = classifier.width as i32;
    let height = classifier.height as i32;
    (1..width - 1)
        .flat_map(|x| (1..height - 1).map(move |y| [x, y]))
        .filter_map(|position| {
            let feature = classifier.classify(position);
            feature.is_landmark().then_some(Corner { position, feature })
        })
        .collect()
}
