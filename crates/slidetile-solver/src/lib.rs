//! Optimal solver for N×N sliding-tile puzzles.
//!
//! This crate finds minimum-length slide sequences with an A* search over
//! board permutations, guided by an admissible and consistent heuristic
//! (Manhattan distance by default).
//!
//! # Overview
//!
//! - [`solve`]: validates a flat tile sequence and solves it in one call
//! - [`AStarSolver`]: the search driver, reusable across boards
//! - [`SolveConfig`]: grid dimension, expansion and time budgets, cancellation,
//!   and heuristic selection
//! - [`Solution`]: the slides and boards from the initial board to the goal
//! - [`SolveError`]: invalid input, unsolvable boards, exhausted budgets, and
//!   cancellation
//! - [`heuristic`]: the [`Heuristic`](heuristic::Heuristic) trait and its implementations
//!
//! # Search
//!
//! Unsolvable boards are rejected by a parity test before any search state is
//! allocated. The search keeps its nodes in a single arena with index-based
//! parent links, orders the frontier by `f = g + h` (ties broken by lower `h`
//! and then insertion order, so results are reproducible), and records the best
//! known cost per board. A board reached again by a strictly cheaper path is
//! reopened; superseded frontier entries are dropped when popped.
//!
//! # Examples
//!
//! ```
//! use slidetile_solver::{SolveConfig, SolveError, solve};
//!
//! let config = SolveConfig::default();
//!
//! let solution = solve(&[1, 2, 3, 4, 0, 5, 7, 8, 6], &config)?;
//! assert_eq!(solution.step_count(), 2);
//! for step in solution.steps() {
//!     println!("{}\n{}\n", step.slide(), step.board());
//! }
//!
//! let err = solve(&[1, 2, 3, 4, 5, 6, 8, 7, 0], &config).unwrap_err();
//! assert_eq!(err, SolveError::Unsolvable { states_expanded: 0 });
//! # Ok::<(), SolveError>(())
//! ```

use slidetile_core::Board;

pub use self::{
    astar_solver::AStarSolver,
    config::{CancellationToken, SolveConfig},
    error::{ResourceLimit, SolveError},
    heuristic::HeuristicKind,
    solution::{Solution, Step},
};

pub mod heuristic;

mod arena;
mod astar_solver;
mod config;
mod error;
mod frontier;
mod solution;
#[cfg(test)]
mod testing;
mod visited;

/// Validates `tiles` as a board of the configured dimension and solves it.
///
/// # Errors
///
/// Returns [`SolveError::InvalidBoard`] if `tiles` is not a permutation of
/// `0..N²` for the configured N, and otherwise the errors of
/// [`AStarSolver::solve`].
pub fn solve(tiles: &[u16], config: &SolveConfig) -> Result<Solution, SolveError> {
    let board = Board::new(config.dimension(), tiles)?;
    AStarSolver::new(config.clone()).solve(&board)
}
