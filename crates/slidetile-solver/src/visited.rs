//! Best known cost per distinct board.

use std::collections::HashMap;

use slidetile_core::Board;

/// Outcome of offering a newly generated board to the [`VisitedSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Visit {
    /// The board had not been generated before.
    New,
    /// The board was known, but this path is strictly cheaper.
    Improved { previous: u32 },
    /// The board is already known at an equal or lower cost.
    Dominated,
}

impl Visit {
    /// Returns `true` if the board should be pushed onto the frontier.
    pub(crate) fn should_enqueue(self) -> bool {
        !self.is_dominated()
    }
}

/// Maps each board (by tile content) to the cheapest `g` found so far.
///
/// Boards are reopened when a strictly cheaper path turns up, so a board seen
/// first via a long path is never lost.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet {
    best: HashMap<Board, u32>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `board` reached at cost `g` and reports what the search should do.
    pub(crate) fn offer(&mut self, board: &Board, g: u32) -> Visit {
        match self.best.get_mut(board) {
            Some(best) if g < *best => {
                let previous = std::mem::replace(best, g);
                Visit::Improved { previous }
            }
            Some(_) => Visit::Dominated,
            None => {
                self.best.insert(board.clone(), g);
                Visit::New
            }
        }
    }

    /// Returns `true` if a cheaper path to `board` than `g` is known.
    pub(crate) fn is_stale(&self, board: &Board, g: u32) -> bool {
        self.best.get(board).is_some_and(|&best| g > best)
    }

    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}
