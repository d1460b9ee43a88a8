use std::time::Duration;

use slidetile_core::{Board, Slide};

/// One slide of a solution and the board it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    slide: Slide,
    board: Board,
}

impl Step {
    pub(crate) fn new(slide: Slide, board: Board) -> Self {
        Self { slide, board }
    }

    /// Returns the slide taken.
    #[must_use]
    pub fn slide(&self) -> Slide {
        self.slide
    }

    /// Returns the board after the slide.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// A minimum-length sequence of slides from an initial board to the goal.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Direction, Slide};
/// use slidetile_solver::{SolveConfig, solve};
///
/// let solution = solve(&[1, 2, 3, 4, 0, 5, 7, 8, 6], &SolveConfig::default())?;
/// assert_eq!(solution.step_count(), 2);
/// assert_eq!(
///     solution.slides().collect::<Vec<_>>(),
///     [Slide::new(5, Direction::Left), Slide::new(6, Direction::Up)]
/// );
/// assert!(solution.final_board().is_goal());
/// # Ok::<(), slidetile_solver::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    initial: Board,
    steps: Vec<Step>,
    states_expanded: usize,
    elapsed: Duration,
}

impl Solution {
    pub(crate) fn new(
        initial: Board,
        steps: Vec<Step>,
        states_expanded: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            initial,
            steps,
            states_expanded,
            elapsed,
        }
    }

    /// Returns the board the solution starts from.
    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Returns the steps from the initial board to the goal.
    ///
    /// Empty if the initial board was already solved.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of slides, which is optimal.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the slides in order.
    pub fn slides(&self) -> impl Iterator<Item = Slide> + '_ {
        self.steps.iter().map(Step::slide)
    }

    /// Returns the initial board followed by the board after each slide.
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        std::iter::once(&self.initial).chain(self.steps.iter().map(Step::board))
    }

    /// Returns the last board of the solution (the goal).
    #[must_use]
    pub fn final_board(&self) -> &Board {
        self.steps.last().map_or(&self.initial, Step::board)
    }

    /// Returns the number of states the search expanded.
    #[must_use]
    pub fn states_expanded(&self) -> usize {
        self.states_expanded
    }

    /// Returns the wall-clock time the solve took.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
