//! Greedy walks along the path mask between boundary endpoints
//!
//! Each boundary endpoint in the corner list starts at most one walk. The walk
//! repeatedly steps to the first unvisited on-path neighbour in a fixed
//! direction preference and ends on another boundary endpoint, a dead end, or
//! when no neighbour is left to step to.

use std::collections::BTreeMap;

use bitvec::prelude::*;

use crate::analysis::features::{CellFeature, Corner, FeatureClassifier};
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::Position;

/// Orthogonal step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `+x`
    Right,
    /// `+y`
    Up,
    /// `-x`
    Left,
    /// `-y`
    Down,
}

impl Direction {
    /// Neighbouring position one step in this direction
    pub const fn step(self, pos: Position) -> Position {
        let [x, y] = pos;
        match self {
            Self::Right => [x + 1, y],
            Self::Up => [x, y + 1],
            Self::Left => [x - 1, y],
            Self::Down => [x, y - 1],
        }
    }
}

/// Preference for walks leaving a left or bottom boundary endpoint
pub const FORWARD_PREFERENCE: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

/// Preference for walks leaving a top or right boundary endpoint
pub const BACKWARD_PREFERENCE: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

/// Direction preference for a walk starting at a cell with this feature
///
/// Only boundary endpoints start walks.
pub const fn preference_for(feature: CellFeature) -> Option<[Direction; 4]> {
    match feature {
        CellFeature::BoundaryLeft | CellFeature::BoundaryBottom => Some(FORWARD_PREFERENCE),
        CellFeature::BoundaryTop | CellFeature::BoundaryRight => Some(BACKWARD_PREFERENCE),
        _ => None,
    }
}

/// Why a segment walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// Reached a cell classified as a boundary endpoint
    Boundary,
    /// Reached a cell with a single on-path neighbour
    DeadEnd,
    /// No unvisited on-path neighbour was available
    Stuck,
}

/// An ordered run of path cells traced from a boundary endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Visited cells in walk order, starting with the boundary endpoint
    pub points: Vec<Position>,
    /// Reason the walk stopped
    pub end: WalkEnd,
}

impl Segment {
    /// First cell of the walk
    pub fn start(&self) -> Option<Position> {
        self.points.first().copied()
    }

    /// Last cell of the walk
    pub fn terminal(&self) -> Option<Position> {
        self.points.last().copied()
    }

    /// Number of cells in the segment
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the segment holds no cells
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Segments keyed by the boundary endpoint they were traced from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMap {
    segments: BTreeMap<Position, Segment>,
}

impl SegmentMap {
    /// Segment traced from `start`, if any
    pub fn get(&self, start: Position) -> Option<&Segment> {
        self.segments.get(&start)
    }

    /// Number of traced segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was traced
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments ordered by start position
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Segment)> {
        self.segments.iter()
    }
}

/// Set of cells over the square path mask, stored as one bit per cell
struct CellSet {
    bits: BitVec,
    extent: usize,
}

impl CellSet {
    fn new(extent: usize) -> Self {
        Self {
            bits: bitvec![0; extent * extent],
            extent,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos[0]).ok()?;
        let y = usize::try_from(pos[1]).ok()?;
        (x < self.extent && y < self.extent).then_some(x * self.extent + y)
    }

    fn insert(&mut self, pos: Position) {
        self.assign(pos, true);
    }

    fn remove(&mut self, pos: Position) {
        self.assign(pos, false);
    }

    fn assign(&mut self, pos: Position, value: bool) {
        if let Some(mut bit) = self.index(pos).and_then(|index| self.bits.get_mut(index)) {
            *bit = value;
        }
    }

    fn contains(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }
}

/// Traces segments across a classified path mask
pub struct SegmentTracer<'a> {
    classifier: FeatureClassifier<'a>,
    budget: usize,
}

impl<'a> SegmentTracer<'a> {
    /// Create a tracer whose walks may take at most one step per on-path cell
    pub fn new(classifier: FeatureClassifier<'a>) -> Self {
        let budget = classifier.mask().on_path_count();
        Self { classifier, budget }
    }

    /// Override the per-walk step budget
    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Trace one segment from every eligible boundary endpoint
    ///
    /// Endpoints that already terminated an earlier segment are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SegmentBudgetExceeded`] if a walk fails to
    /// stop within the step budget.
    pub fn trace_all(&self, corners: &[Corner]) -> Result<SegmentMap> {
        let mut map = SegmentMap::default();
        let extent = self.classifier.mask().extent();
        let mut terminals = CellSet::new(extent);
        // Shared by every walk; each walk clears exactly the cells it visited
        let mut visited = CellSet::new(extent);

        for corner in corners {
            if terminals.contains(corner.position) || map.get(corner.position).is_some() {
                continue;
            }
            let Some(preference) = preference_for(corner.feature) else {
                continue;
            };

            let segment = self.walk(corner.position, preference, &mut visited)?;
            for &pos in &segment.points {
                visited.remove(pos);
            }
            if let Some(terminal) = segment.terminal() {
                terminals.insert(terminal);
            }
            log::trace!(
                "segment from {:?}: {} cells, {:?}",
                corner.position,
                segment.len(),
                segment.end
            );
            map.segments.insert(corner.position, segment);
        }

        Ok(map)
    }

    /// Walk from `start` using the given direction preference
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SegmentBudgetExceeded`] if the walk takes
    /// more steps than the budget allows.
    pub fn trace_from(&self, start: Position, preference: [Direction; 4]) -> Result<Segment> {
        let mut visited = CellSet::new(self.classifier.mask().extent());
        self.walk(start, preference, &mut visited)
    }

    /// Walk from `start`, recording visited cells in `visited`
    ///
    /// On success every visited cell is in the returned segment's points.
    fn walk(
        &self,
        start: Position,
        preference: [Direction; 4],
        visited: &mut CellSet,
    ) -> Result<Segment> {
        let mask = self.classifier.mask();
        visited.insert(start);

        let mut points = vec![start];
        let mut current = start;

        for _ in 0..=self.budget {
            let next = preference
                .iter()
                .map(|direction| direction.step(current))
                .find(|&candidate| mask.is_on_path(candidate) && !visited.contains(candidate));

            let Some(next) = next else {
                return Ok(Segment {
                    points,
                    end: WalkEnd::Stuck,
                });
            };

            visited.insert(next);
            points.push(next);
            current = next;

            if self.classifier.classify(current).is_boundary() {
                return Ok(Segment {
                    points,
                    end: WalkEnd::Boundary,
                });
            }
            if mask.moore_count(current) == 1 {
                return Ok(Segment {
                    points,
                    end: WalkEnd::DeadEnd,
                });
            }
        }

        Err(GenerationError::SegmentBudgetExceeded {
            start,
            budget: self.budget,
        })
    }
}
