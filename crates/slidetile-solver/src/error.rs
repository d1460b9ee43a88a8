use std::time::Duration;

use slidetile_core::BoardError;

/// The budget that stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum ResourceLimit {
    /// The maximum number of expanded states was reached.
    #[display("expansion budget of {max} states")]
    StatesExpanded {
        /// The configured maximum.
        max: usize,
    },
    /// The maximum wall-clock duration elapsed.
    #[display("time budget of {max:?}")]
    Duration {
        /// The configured maximum.
        max: Duration,
    },
}

/// Reasons a solve did not produce a solution.
///
/// None of the variants carry a partial path.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// The input does not describe a valid board.
    ///
    /// Detected before any search state is allocated.
    #[display("invalid board: {_0}")]
    #[from]
    InvalidBoard(BoardError),
    /// The goal cannot be reached from the input board.
    ///
    /// Normally detected by the parity test with zero states expanded; an
    /// exhausted frontier reports the same outcome.
    #[display("board cannot reach the goal ({states_expanded} states expanded)")]
    Unsolvable {
        /// States expanded before the outcome was known.
        states_expanded: usize,
    },
    /// A configured budget ran out before the goal was reached.
    ///
    /// The caller may retry with a larger budget.
    #[display("{limit} exceeded after {states_expanded} states expanded")]
    ResourceExceeded {
        /// The budget that ran out.
        limit: ResourceLimit,
        /// States expanded before stopping.
        states_expanded: usize,
    },
    /// The caller cancelled the search.
    #[display("search cancelled after {states_expanded} states expanded")]
    Cancelled {
        /// States expanded before stopping.
        states_expanded: usize,
    },
}

impl SolveError {
    /// Returns the number of states expanded before the search stopped.
    ///
    /// Returns `None` for [`SolveError::InvalidBoard`], which never starts a search.
    #[must_use]
    pub fn states_expanded(&self) -> Option<usize> {
        match self {
            Self::InvalidBoard(_) => None,
            Self::Unsolvable { states_expanded }
            | Self::ResourceExceeded {
                states_expanded, ..
            }
            | Self::Cancelled { states_expanded } => Some(*states_expanded),
        }
    }
}
