use slidetile_core::Board;

use super::Heuristic;

const NAME: &str = "misplaced tiles";

/// Number of non-blank tiles that are not on their goal cell.
///
/// Admissible and consistent, but a much looser bound than
/// [`ManhattanDistance`](super::ManhattanDistance). Useful for comparison only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles {}

impl MisplacedTiles {
    /// Creates the heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn estimate(&self, board: &Board) -> u32 {
        let misplaced = board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && usize::from(tile) != index + 1)
            .count();
        u32::try_from(misplaced).unwrap_or(u32::MAX)
    }
}
