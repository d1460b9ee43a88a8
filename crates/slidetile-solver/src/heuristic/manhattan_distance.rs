use slidetile_core::{Board, Position, Slide};

use super::Heuristic;

const NAME: &str = "manhattan distance";

/// Sum over all non-blank tiles of the Manhattan distance to the tile's goal cell.
///
/// Each slide moves one tile by one cell, so the value changes by exactly one
/// per slide. The heuristic is therefore consistent and the search it guides
/// finds minimum-length solutions.
///
/// The goal-position table is built once per dimension and only read afterwards.
///
/// # Examples
///
/// ```
/// use slidetile_core::Board;
/// use slidetile_solver::heuristic::{Heuristic as _, ManhattanDistance};
///
/// let heuristic = ManhattanDistance::new(3);
/// assert_eq!(heuristic.estimate(&Board::goal(3)), 0);
///
/// let board = Board::from_tiles(&[1, 2, 3, 4, 0, 5, 7, 8, 6])?;
/// assert_eq!(heuristic.estimate(&board), 2);
/// # Ok::<(), slidetile_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    goal_positions: Box<[Position]>,
}

impl ManhattanDistance {
    /// Creates the heuristic for N×N boards.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        let len = dimension * dimension;
        // tile `t` belongs at index `t - 1`; the blank entry is never read
        let goal_positions = (0..len)
            .map(|tile| Position::from_index((tile + len - 1) % len, dimension))
            .collect();
        Self { goal_positions }
    }

    fn tile_distance(&self, tile: u16, pos: Position) -> u32 {
        let distance = pos.manhattan_distance(self.goal_positions[usize::from(tile)]);
        u32::try_from(distance).unwrap_or(u32::MAX)
    }
}

impl Heuristic for ManhattanDistance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn estimate(&self, board: &Board) -> u32 {
        let dimension = board.dimension();
        debug_assert_eq!(self.goal_positions.len(), board.tiles().len());
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| self.tile_distance(tile, Position::from_index(index, dimension)))
            .sum()
    }

    fn estimate_after_slide(
        &self,
        parent: &Board,
        parent_estimate: u32,
        slide: Slide,
        child: &Board,
    ) -> u32 {
        // the moved tile left the cell that is now the child's blank
        let tile = slide.tile();
        let before = self.tile_distance(tile, child.blank_position());
        let after = self.tile_distance(tile, parent.blank_position());
        parent_estimate + after - before
    }
}
