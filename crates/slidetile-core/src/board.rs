//! Immutable sliding-tile boards.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{BoardError, Direction, Position, Slide, SlideError};

/// Legal slides from one board, in [`Direction::ALL`] order.
pub type Slides = ArrayVec<[Slide; 4]>;

/// An N×N sliding-tile board.
///
/// The tiles are stored row-major. Each value in `0..N²` appears exactly once and
/// `0` marks the blank. Boards are validated on construction and never mutated
/// afterwards; slides produce new boards.
///
/// Two boards are equal iff their tile sequences are equal, so a `Board` can be
/// used directly as a hash key for deduplication.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Board, Direction};
///
/// let board = Board::new(3, vec![1_u16, 2, 3, 4, 5, 6, 7, 0, 8])?;
/// assert!(!board.is_goal());
///
/// let solved = board.slide(Direction::Left)?;
/// assert!(solved.is_goal());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Box<[u16]>,
    blank: usize,
}

impl Board {
    /// Smallest supported grid dimension.
    pub const MIN_DIMENSION: usize = 2;
    /// Largest supported grid dimension (`N² - 1` must fit in a `u16`).
    pub const MAX_DIMENSION: usize = 255;

    /// Checks that `dimension` is within
    /// [`MIN_DIMENSION`](Self::MIN_DIMENSION)..=[`MAX_DIMENSION`](Self::MAX_DIMENSION).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedDimension`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::{Board, BoardError};
    ///
    /// assert!(Board::check_dimension(4).is_ok());
    /// assert_eq!(
    ///     Board::check_dimension(usize::MAX),
    ///     Err(BoardError::UnsupportedDimension { dimension: usize::MAX })
    /// );
    /// ```
    pub fn check_dimension(dimension: usize) -> Result<(), BoardError> {
        if (Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&dimension) {
            Ok(())
        } else {
            Err(BoardError::UnsupportedDimension { dimension })
        }
    }

    /// Creates a board of the given dimension from row-major tiles.
    ///
    /// # Errors
    ///
    /// - [`BoardError::UnsupportedDimension`] if `dimension` is outside
    ///   [`MIN_DIMENSION`](Self::MIN_DIMENSION)..=[`MAX_DIMENSION`](Self::MAX_DIMENSION)
    /// - [`BoardError::WrongLength`] if there are not exactly `dimension²` tiles
    /// - [`BoardError::ValueOutOfRange`] if a value exceeds `dimension² - 1`
    /// - [`BoardError::DuplicateValue`] if a value appears twice
    pub fn new<T>(dimension: usize, tiles: T) -> Result<Self, BoardError>
    where
        T: Into<Box<[u16]>>,
    {
        Self::check_dimension(dimension)?;
        let tiles = tiles.into();
        let expected = dimension * dimension;
        if tiles.len() != expected {
            return Err(BoardError::WrongLength {
                expected,
                actual: tiles.len(),
            });
        }

        #[expect(clippy::cast_possible_truncation)]
        let max = (expected - 1) as u16;
        let mut seen = vec![false; expected];
        let mut blank = 0;
        for (index, &value) in tiles.iter().enumerate() {
            if value > max {
                return Err(BoardError::ValueOutOfRange { index, value, max });
            }
            if std::mem::replace(&mut seen[usize::from(value)], true) {
                return Err(BoardError::DuplicateValue { value });
            }
            if value == 0 {
                blank = index;
            }
        }

        Ok(Self {
            dimension,
            tiles,
            blank,
        })
    }

    /// Creates a board, inferring the dimension from the number of tiles.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] if the tile count is not a perfect square,
    /// and otherwise the same errors as [`Board::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// let board = Board::from_tiles(&[1, 2, 3, 0])?;
    /// assert_eq!(board.dimension(), 2);
    /// assert!(Board::from_tiles(&[1, 2, 0]).is_err());
    /// # Ok::<(), slidetile_core::BoardError>(())
    /// ```
    pub fn from_tiles(tiles: &[u16]) -> Result<Self, BoardError> {
        let len = tiles.len();
        let dimension = len.isqrt();
        if dimension * dimension != len {
            return Err(BoardError::NotSquare { len });
        }
        Self::new(dimension, tiles)
    }

    /// Returns the solved board `1, 2, …, N²-1, 0`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is outside the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// let goal = Board::goal(3);
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// assert!(goal.is_goal());
    /// ```
    #[must_use]
    pub fn goal(dimension: usize) -> Self {
        assert!(
            (Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&dimension),
            "unsupported board dimension {dimension}"
        );
        let len = dimension * dimension;
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (1..len)
            .map(|v| v as u16)
            .chain([0])
            .collect::<Box<[u16]>>();
        Self {
            dimension,
            tiles,
            blank: len - 1,
        }
    }

    /// Returns the grid dimension N.
    #[must_use]
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the linear index of the blank.
    #[must_use]
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the position of the blank.
    #[must_use]
    #[inline]
    pub fn blank_position(&self) -> Position {
        Position::from_index(self.blank, self.dimension)
    }

    /// Returns the tile at `pos` (`0` for the blank).
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> u16 {
        assert!(pos.row() < self.dimension && pos.col() < self.dimension);
        self.tiles[pos.to_index(self.dimension)]
    }

    /// Returns the current position of `tile`, or `None` if no such tile exists.
    #[must_use]
    pub fn position_of(&self, tile: u16) -> Option<Position> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|index| Position::from_index(index, self.dimension))
    }

    /// Returns `true` if the board is in the solved arrangement.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.blank == last
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &t)| usize::from(t) == i + 1)
    }

    /// Returns the slides that are legal from this board.
    ///
    /// At most four slides exist; they are ordered as [`Direction::ALL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::{Board, Direction, Slide};
    ///
    /// let slides = Board::goal(3).slides();
    /// assert_eq!(
    ///     slides.as_slice(),
    ///     &[Slide::new(6, Direction::Down), Slide::new(8, Direction::Right)]
    /// );
    /// ```
    #[must_use]
    pub fn slides(&self) -> Slides {
        let mut slides = Slides::new();
        for direction in Direction::ALL {
            if let Some(source) = self.source_index(direction) {
                slides.push(Slide::new(self.tiles[source], direction));
            }
        }
        slides
    }

    /// Returns every legal slide together with the board it produces.
    pub fn successors(&self) -> impl Iterator<Item = (Slide, Board)> + '_ {
        Direction::ALL.into_iter().filter_map(|direction| {
            let source = self.source_index(direction)?;
            let slide = Slide::new(self.tiles[source], direction);
            Some((slide, self.swap_blank(source)))
        })
    }

    /// Slides whichever tile can move in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::IllegalSlide`] if no tile sits on the side of the
    /// blank that would let it move in `direction`.
    pub fn slide(&self, direction: Direction) -> Result<Self, SlideError> {
        let source = self
            .source_index(direction)
            .ok_or(SlideError::IllegalSlide { direction })?;
        Ok(self.swap_blank(source))
    }

    /// Applies a slide, checking that the named tile is the one that moves.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::IllegalSlide`] if no tile can move in the slide's
    /// direction, or [`SlideError::NotAdjacent`] if a different tile would move.
    pub fn apply(&self, slide: Slide) -> Result<Self, SlideError> {
        let direction = slide.direction();
        let source = self
            .source_index(direction)
            .ok_or(SlideError::IllegalSlide { direction })?;
        if self.tiles[source] != slide.tile() {
            return Err(SlideError::NotAdjacent { tile: slide.tile() });
        }
        Ok(self.swap_blank(source))
    }

    /// Counts pairs of non-blank tiles that appear in the wrong relative order.
    ///
    /// Runs in `O(N² log N)` using a Fenwick tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// assert_eq!(Board::goal(4).inversion_count(), 0);
    /// let swapped = Board::from_tiles(&[2, 1, 3, 0])?;
    /// assert_eq!(swapped.inversion_count(), 1);
    /// # Ok::<(), slidetile_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn inversion_count(&self) -> usize {
        let mut tree = vec![0_usize; self.tiles.len()];
        let mut inversions = 0;
        let mut seen = 0;
        for &tile in self.tiles.iter().filter(|&&t| t != 0) {
            let value = usize::from(tile);
            // tiles already seen that are <= value
            let mut not_greater = 0;
            let mut i = value;
            while i > 0 {
                not_greater += tree[i - 1];
                i &= i - 1;
            }
            inversions += seen - not_greater;

            let mut i = value;
            while i <= tree.len() {
                tree[i - 1] += 1;
                i += i & i.wrapping_neg();
            }
            seen += 1;
        }
        inversions
    }

    /// Returns `true` if the goal arrangement is reachable by sliding.
    ///
    /// For odd N the inversion count must be even. For even N the inversion
    /// count plus the number of rows between the blank and the bottom row must
    /// be even.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// let reachable = Board::from_tiles(&[1, 2, 3, 4, 0, 5, 7, 8, 6])?;
    /// assert!(reachable.is_solvable());
    ///
    /// let swapped = Board::from_tiles(&[1, 2, 3, 4, 5, 6, 8, 7, 0])?;
    /// assert!(!swapped.is_solvable());
    /// # Ok::<(), slidetile_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversion_count();
        if self.dimension % 2 == 1 {
            inversions % 2 == 0
        } else {
            let rows_from_goal = self.dimension - 1 - self.blank_position().row();
            (inversions + rows_from_goal) % 2 == 0
        }
    }

    /// Linear index of the tile that would move in `direction`, if any.
    fn source_index(&self, direction: Direction) -> Option<usize> {
        self.blank_position()
            .neighbor(direction.opposite(), self.dimension)
            .map(|pos| pos.to_index(self.dimension))
    }

    fn swap_blank(&self, source: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, source);
        Self {
            dimension: self.dimension,
            tiles,
            blank: source,
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses tiles separated by whitespace and/or commas.
    ///
    /// The dimension is inferred from the tile count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u16>().map_err(|_| BoardError::ParseValue {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(&tiles)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for (y, row) in self.tiles.chunks(self.dimension).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &tile) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board(tiles: &[u16]) -> Board {
        Board::from_tiles(tiles).unwrap()
    }

    fn permutation(dimension: usize) -> impl Strategy<Value = Vec<u16>> {
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (0..dimension * dimension).map(|v| v as u16).collect::<Vec<_>>();
        Just(tiles).prop_shuffle()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert_eq!(
            Board::new(3, vec![1_u16, 2, 3, 0]),
            Err(BoardError::WrongLength {
                expected: 9,
                actual: 4
            })
        );
    }

    #[test]
    fn test_new_rejects_out_of_range_value() {
        assert_eq!(
            Board::new(2, vec![1_u16, 2, 4, 0]),
            Err(BoardError::ValueOutOfRange {
                index: 2,
                value: 4,
                max: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_value() {
        assert_eq!(
            Board::new(2, vec![1_u16, 1, 2, 0]),
            Err(BoardError::DuplicateValue { value: 1 })
        );
    }

    #[test]
    fn test_new_rejects_unsupported_dimension() {
        assert!(Board::new(1, vec![0_u16]).unwrap_err().is_unsupported_dimension());
        assert!(Board::new(0, Vec::<u16>::new()).unwrap_err().is_unsupported_dimension());
        assert!(Board::new(256, Vec::<u16>::new()).unwrap_err().is_unsupported_dimension());
        assert!(
            Board::new(usize::MAX, vec![1_u16, 2, 3, 0])
                .unwrap_err()
                .is_unsupported_dimension()
        );
    }

    #[test]
    fn test_check_dimension_bounds() {
        assert!(Board::check_dimension(Board::MIN_DIMENSION).is_ok());
        assert!(Board::check_dimension(Board::MAX_DIMENSION).is_ok());
        assert_eq!(
            Board::check_dimension(1),
            Err(BoardError::UnsupportedDimension { dimension: 1 })
        );
        assert!(Board::check_dimension(Board::MAX_DIMENSION + 1).is_err());
    }

    #[test]
    fn test_from_tiles_rejects_non_square() {
        assert_eq!(
            Board::from_tiles(&[1, 2, 3, 4, 0]),
            Err(BoardError::NotSquare { len: 5 })
        );
    }

    #[test]
    fn test_goal_is_goal_for_several_dimensions() {
        for dimension in 2..=6 {
            let goal = Board::goal(dimension);
            assert!(goal.is_goal());
            assert!(goal.is_solvable());
            assert_eq!(goal.inversion_count(), 0);
            assert_eq!(
                goal.blank_position(),
                Position::new(dimension - 1, dimension - 1)
            );
        }
    }

    #[test]
    fn test_is_goal_requires_blank_last() {
        assert!(!board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).is_goal());
        assert!(!board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).is_goal());
    }

    #[test]
    fn test_slides_from_center() {
        let b = board(&[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        assert_eq!(
            b.slides().as_slice(),
            &[
                Slide::new(8, Direction::Up),
                Slide::new(2, Direction::Down),
                Slide::new(5, Direction::Left),
                Slide::new(4, Direction::Right),
            ]
        );
    }

    #[test]
    fn test_apply_checks_tile() {
        let b = board(&[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        assert_eq!(
            b.apply(Slide::new(6, Direction::Left)),
            Err(SlideError::NotAdjacent { tile: 6 })
        );
        let moved = b.apply(Slide::new(5, Direction::Left)).unwrap();
        assert_eq!(moved.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert_eq!(moved.blank_index(), 5);
    }

    #[test]
    fn test_slide_rejects_move_off_grid() {
        let goal = Board::goal(3);
        assert_eq!(
            goal.slide(Direction::Up),
            Err(SlideError::IllegalSlide {
                direction: Direction::Up
            })
        );
        assert!(goal.slide(Direction::Left).is_err());
    }

    #[test]
    fn test_successors_match_slides() {
        let b = board(&[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        let successors = b.successors().collect::<Vec<_>>();
        assert_eq!(successors.len(), 4);
        for (slide, next) in successors {
            assert_eq!(b.apply(slide).unwrap(), next);
        }
    }

    #[test]
    fn test_known_solvability() {
        assert!(board(&[1, 2, 3, 4, 0, 5, 7, 8, 6]).is_solvable());
        assert!(!board(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).is_solvable());
        // 15-puzzle with 14 and 15 swapped
        assert!(!board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]).is_solvable());
        // blank moved up one row on a 4x4
        assert!(board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).is_solvable());
    }

    #[test]
    fn test_parse_and_display() {
        let b: Board = "1,2,3\n4 0 5\n7 8 6".parse().unwrap();
        assert_eq!(b.to_string(), "1 2 3\n4 _ 5\n7 8 6");

        let wide = Board::goal(4);
        assert_eq!(
            wide.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  _"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "1 2 x 0".parse::<Board>(),
            Err(BoardError::ParseValue {
                token: "x".to_owned()
            })
        );
    }

    proptest! {
        #[test]
        fn prop_any_permutation_is_valid(tiles in permutation(3)) {
            let b = Board::new(3, tiles.clone()).unwrap();
            prop_assert_eq!(b.tiles(), tiles.as_slice());
            prop_assert_eq!(b.tile_at(b.blank_position()), 0);
        }

        #[test]
        fn prop_slides_preserve_solvability(tiles in permutation(4)) {
            let b = Board::new(4, tiles).unwrap();
            for (_, next) in b.successors() {
                prop_assert_eq!(next.is_solvable(), b.is_solvable());
            }
        }

        #[test]
        fn prop_swapping_two_tiles_flips_solvability(tiles in permutation(3)) {
            let b = Board::new(3, tiles.clone()).unwrap();
            let mut swapped = tiles;
            let (i, j) = {
                let mut non_blank = (0..swapped.len()).filter(|&i| swapped[i] != 0);
                (non_blank.next().unwrap(), non_blank.next().unwrap())
            };
            swapped.swap(i, j);
            let s = Board::new(3, swapped).unwrap();
            prop_assert_ne!(s.is_solvable(), b.is_solvable());
        }

        #[test]
        fn prop_inversion_count_matches_naive(tiles in permutation(4)) {
            let b = Board::new(4, tiles.clone()).unwrap();
            let non_blank = tiles.iter().copied().filter(|&t| t != 0).collect::<Vec<_>>();
            let naive = (0..non_blank.len())
                .map(|i| non_blank[i + 1..].iter().filter(|&&t| t < non_blank[i]).count())
                .sum::<usize>();
            prop_assert_eq!(b.inversion_count(), naive);
        }
    }
}
