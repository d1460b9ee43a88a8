//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell on an N×N grid, addressed by `(row, col)` from the top-left corner.
///
/// Positions do not carry the grid dimension; conversions to and from linear
/// (row-major) indices take it as an argument.
///
/// # Examples
///
/// ```
/// use slidetile_core::Position;
///
/// let pos = Position::from_index(5, 3);
/// assert_eq!(pos, Position::new(1, 2));
/// assert_eq!(pos.to_index(3), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from its row and column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major linear index into a position.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize, dimension: usize) -> Self {
        assert!(dimension > 0);
        Self {
            row: index / dimension,
            col: index % dimension,
        }
    }

    /// Converts this position into a row-major linear index.
    #[must_use]
    #[inline]
    pub const fn to_index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the Manhattan distance between two positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// let b = Position::new(2, 1);
    /// assert_eq!(a.manhattan_distance(b), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns the adjacent position one step in `direction`, or `None` if it
    /// would leave a grid of the given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::{Direction, Position};
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.neighbor(Direction::Up, 3), None);
    /// assert_eq!(corner.neighbor(Direction::Down, 3), Some(Position::new(1, 0)));
    /// ```
    #[must_use]
    pub fn neighbor(self, direction: Direction, dimension: usize) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        (row < dimension && col < dimension).then_some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}
