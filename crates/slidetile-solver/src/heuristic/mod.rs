//! Heuristics estimating the remaining number of slides to the goal.
//!
//! Each heuristic implements the [`Heuristic`] trait. The search requires
//! heuristics to be admissible (never overestimate) for its solutions to be
//! optimal.

use std::fmt::Debug;

use slidetile_core::{Board, Slide};

pub use self::{manhattan_distance::ManhattanDistance, misplaced_tiles::MisplacedTiles};

mod manhattan_distance;
mod misplaced_tiles;

/// A lower bound on the number of slides needed to reach the goal.
pub trait Heuristic: Debug + Send + Sync {
    /// Returns the name of the heuristic.
    fn name(&self) -> &'static str;

    /// Estimates the remaining cost of `board`.
    fn estimate(&self, board: &Board) -> u32;

    /// Estimates the remaining cost of `child`, which `slide` produced from `parent`.
    ///
    /// `parent_estimate` is this heuristic's value for `parent`. Implementations
    /// may use it to update the estimate incrementally; the default recomputes
    /// from scratch.
    fn estimate_after_slide(
        &self,
        parent: &Board,
        parent_estimate: u32,
        slide: Slide,
        child: &Board,
    ) -> u32 {
        let _ = (parent, parent_estimate, slide);
        self.estimate(child)
    }
}

/// A boxed heuristic.
pub type BoxedHeuristic = Box<dyn Heuristic>;

/// Selects which heuristic a search uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HeuristicKind {
    /// Sum of Manhattan distances of every tile from its goal cell.
    #[default]
    #[display("manhattan distance")]
    Manhattan,
    /// Number of tiles not on their goal cell.
    ///
    /// Admissible but much weaker than [`HeuristicKind::Manhattan`]; searches
    /// expand many more states.
    #[display("misplaced tiles")]
    MisplacedTiles,
}

impl HeuristicKind {
    /// Builds the heuristic for boards of the given dimension.
    #[must_use]
    pub fn build(self, dimension: usize) -> BoxedHeuristic {
        match self {
            Self::Manhattan => Box::new(ManhattanDistance::new(dimension)),
            Self::MisplacedTiles => Box::new(MisplacedTiles::new()),
        }
    }
}
