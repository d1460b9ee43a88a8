//! Slide moves.

use std::fmt::{self, Display};

/// The direction a tile moves when it slides into the blank.
///
/// The blank itself moves the opposite way.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant,
)]
pub enum Direction {
    /// The tile below the blank moves up.
    #[default]
    Up,
    /// The tile above the blank moves down.
    Down,
    /// The tile right of the blank moves left.
    Left,
    /// The tile left of the blank moves right.
    Right,
}

impl Direction {
    /// All directions in expansion order.
    ///
    /// Search and slide enumeration use this order, which keeps results reproducible.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Direction;
    ///
    /// for dir in Direction::ALL {
    ///     assert_eq!(dir.opposite().opposite(), dir);
    /// }
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}

/// A single move: `tile` slides one cell in `direction` into the blank.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Direction, Slide};
///
/// let slide = Slide::new(5, Direction::Left);
/// assert_eq!(slide.to_string(), "5 left");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slide {
    tile: u16,
    direction: Direction,
}

impl Slide {
    /// Creates a slide of `tile` in `direction`.
    #[must_use]
    #[inline]
    pub const fn new(tile: u16, direction: Direction) -> Self {
        Self { tile, direction }
    }

    /// Returns the tile that moves.
    #[must_use]
    #[inline]
    pub const fn tile(self) -> u16 {
        self.tile
    }

    /// Returns the direction the tile moves in.
    #[must_use]
    #[inline]
    pub const fn direction(self) -> Direction {
        self.direction
    }
}

impl Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tile, self.direction)
    }
}
