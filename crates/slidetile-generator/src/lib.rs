//! Reproducible generation of solvable sliding-tile boards.
//!
//! [`ScrambleGenerator`] produces boards from a [`ScrambleSeed`]; the same
//! dimension, depth and seed always yield the same board.
//!
//! # Examples
//!
//! ```
//! use slidetile_generator::{ScrambleGenerator, ScrambleSeed};
//!
//! let generator = ScrambleGenerator::new(4)?.with_depth(40);
//! let seed = ScrambleSeed::from_phrase("demo");
//!
//! let scrambled = generator.generate_with_seed(seed);
//! assert!(scrambled.board.is_solvable());
//! assert_eq!(scrambled, generator.generate_with_seed(seed));
//! # Ok::<(), slidetile_core::BoardError>(())
//! ```

use rand::{
    SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;
use slidetile_core::{Board, BoardError, Direction};

pub use self::seed::{ScrambleSeed, ScrambleSeedError};

mod seed;

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The scrambled board. Always solvable.
    pub board: Board,
    /// The seed that reproduces this board.
    pub seed: ScrambleSeed,
}

/// Generates solvable scrambled boards of one dimension.
///
/// Two modes are available:
///
/// - **Uniform** (default): a uniformly random solvable board. Random
///   permutations are unsolvable half of the time; those get two non-blank
///   tiles swapped, which flips the parity.
/// - **Random walk** ([`with_depth`](Self::with_depth)): `depth` random slides
///   from the goal, never immediately undoing the previous slide. The optimal
///   solution is at most `depth` slides long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleGenerator {
    dimension: usize,
    depth: Option<usize>,
}

impl ScrambleGenerator {
    /// Creates a uniform generator for N×N boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedDimension`] if `dimension` is outside
    /// the range [`Board`] supports.
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        Board::check_dimension(dimension)?;
        Ok(Self {
            dimension,
            depth: None,
        })
    }

    /// Switches to random-walk mode with the given number of slides.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the random-walk depth, or `None` in uniform mode.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(ScrambleSeed::random())
    }

    /// Generates the board determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ScrambleSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(seed.to_bytes());
        let board = match self.depth {
            Some(depth) => self.random_walk(depth, &mut rng),
            None => self.uniform(&mut rng),
        };
        GeneratedBoard { board, seed }
    }

    fn random_walk(&self, depth: usize, rng: &mut Pcg64) -> Board {
        let mut board = Board::goal(self.dimension);
        let mut previous: Option<Direction> = None;
        for _ in 0..depth {
            let candidates = board
                .slides()
                .into_iter()
                .filter(|slide| previous != Some(slide.direction().opposite()))
                .collect::<Vec<_>>();
            // every cell has at least two neighbours, so one candidate always remains
            let Some(&slide) = candidates.choose(rng) else {
                break;
            };
            if let Ok(next) = board.apply(slide) {
                board = next;
                previous = Some(slide.direction());
            }
        }
        board
    }

    fn uniform(&self, rng: &mut Pcg64) -> Board {
        let len = self.dimension * self.dimension;
        #[expect(clippy::cast_possible_truncation)]
        let mut tiles = (0..len).map(|v| v as u16).collect::<Vec<_>>();
        tiles.shuffle(rng);

        let board = Board::new(self.dimension, tiles.clone())
            .expect("a permutation of 0..N² is a valid board");
        if board.is_solvable() {
            return board;
        }

        let mut non_blank = (0..len).filter(|&i| tiles[i] != 0);
        if let (Some(i), Some(j)) = (non_blank.next(), non_blank.next()) {
            tiles.swap(i, j);
        }
        Board::new(self.dimension, tiles).expect("a permutation of 0..N² is a valid board")
    }
}
