//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the immutable board model shared by the solver, the
//! scramble generator and the command-line front end.
//!
//! # Overview
//!
//! - [`board`]: [`Board`], a validated N×N permutation with `0` as the blank,
//!   plus the parity-based solvability test
//! - [`position`]: [`Position`], a `(row, col)` coordinate on the grid
//! - [`slide`]: [`Direction`] and [`Slide`], describing one tile moving into the blank
//! - [`error`]: [`BoardError`] and [`SlideError`]
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{Board, Direction, Slide};
//!
//! let board: Board = "1 2 3  4 0 5  7 8 6".parse()?;
//! assert_eq!(board.dimension(), 3);
//! assert!(board.is_solvable());
//!
//! let board = board.apply(Slide::new(5, Direction::Left))?;
//! let board = board.apply(Slide::new(6, Direction::Up))?;
//! assert!(board.is_goal());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod error;
pub mod position;
pub mod slide;

// Re-export commonly used types
pub use self::{
    board::{Board, Slides},
    error::{BoardError, SlideError},
    position::Position,
    slide::{Direction, Slide},
};
