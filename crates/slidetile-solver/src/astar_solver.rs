use std::time::Instant;

use slidetile_core::{Board, BoardError};

use crate::{
    ResourceLimit, SolveConfig, SolveError, Solution,
    arena::{Arena, Node, NodeId},
    frontier::Frontier,
    heuristic::BoxedHeuristic,
    visited::{Visit, VisitedSet},
};

/// An optimal solver for N×N sliding-tile puzzles.
///
/// `AStarSolver` runs an A* search guided by the configured heuristic. Before
/// searching it rejects boards whose permutation parity makes the goal
/// unreachable, so unsolvable inputs cost no search at all.
///
/// Each call to [`solve`](Self::solve) owns its own node arena, frontier and
/// visited set. One solver may be shared between threads and used for
/// independent solves concurrently.
///
/// # Examples
///
/// ```
/// use slidetile_core::Board;
/// use slidetile_solver::{AStarSolver, SolveConfig};
///
/// let solver = AStarSolver::new(SolveConfig::new());
/// let board = Board::from_tiles(&[4, 1, 3, 7, 2, 6, 0, 5, 8])?;
///
/// let solution = solver.solve(&board)?;
/// assert_eq!(solution.step_count(), 6);
/// assert!(solution.final_board().is_goal());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Budgets
///
/// ```
/// use slidetile_core::Board;
/// use slidetile_solver::{AStarSolver, ResourceLimit, SolveConfig, SolveError};
///
/// let solver = AStarSolver::new(SolveConfig::new().with_max_states_expanded(0));
/// let board = Board::from_tiles(&[1, 2, 3, 4, 0, 5, 7, 8, 6])?;
///
/// assert_eq!(
///     solver.solve(&board).unwrap_err(),
///     SolveError::ResourceExceeded {
///         limit: ResourceLimit::StatesExpanded { max: 0 },
///         states_expanded: 0,
///     }
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AStarSolver {
    config: SolveConfig,
}

impl AStarSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolveConfig) -> Self {
        Self { config }
    }

    /// Returns the solver's configuration.
    #[must_use]
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Finds a minimum-length solution for `board`.
    ///
    /// # Errors
    ///
    /// - [`SolveError::InvalidBoard`] if the configured dimension is unsupported
    ///   or the board's dimension differs from it
    /// - [`SolveError::Unsolvable`] if the goal is unreachable
    /// - [`SolveError::ResourceExceeded`] if the expansion or time budget runs out
    /// - [`SolveError::Cancelled`] if the cancellation token fires
    pub fn solve(&self, board: &Board) -> Result<Solution, SolveError> {
        let started = Instant::now();
        let dimension = self.config.dimension();
        Board::check_dimension(dimension)?;
        if board.dimension() != dimension {
            return Err(BoardError::WrongLength {
                expected: dimension * dimension,
                actual: board.tiles().len(),
            }
            .into());
        }

        if !board.is_solvable() {
            log::debug!("{dimension}x{dimension} board fails the parity test");
            return Err(SolveError::Unsolvable { states_expanded: 0 });
        }

        let heuristic = self.config.heuristic().build(dimension);
        let mut search = Search::new(board.clone(), heuristic);
        log::debug!(
            "solving {dimension}x{dimension} board with {} (initial estimate {})",
            search.heuristic.name(),
            search.arena.get(search.root).h,
        );

        let result = search.run(&self.config, started);
        match &result {
            Ok(solution) => log::debug!(
                "solved in {} slides: {} states expanded, {} nodes allocated, {} distinct boards, {} reopened, {} stale skipped, {} left open, {:?}",
                solution.step_count(),
                solution.states_expanded(),
                search.arena.len(),
                search.visited.len(),
                search.reopened,
                search.stale_skipped,
                search.frontier.len(),
                solution.elapsed(),
            ),
            Err(err) => log::debug!("search stopped: {err} ({:?})", started.elapsed()),
        }
        result
    }
}

/// The mutable state of one A* run.
#[derive(Debug)]
struct Search {
    heuristic: BoxedHeuristic,
    root: NodeId,
    arena: Arena,
    frontier: Frontier,
    visited: VisitedSet,
    states_expanded: usize,
    /// Boards pushed again after a strictly cheaper path was found.
    reopened: usize,
    /// Superseded frontier entries dropped at pop time.
    stale_skipped: usize,
}

impl Search {
    fn new(initial: Board, heuristic: BoxedHeuristic) -> Self {
        let h = heuristic.estimate(&initial);
        let mut visited = VisitedSet::new();
        visited.offer(&initial, 0);
        let mut arena = Arena::new();
        let root = arena.alloc(Node {
            board: initial,
            g: 0,
            h,
            parent: None,
        });
        let mut frontier = Frontier::new();
        frontier.push(root, 0, h);

        Self {
            heuristic,
            root,
            arena,
            frontier,
            visited,
            states_expanded: 0,
            reopened: 0,
            stale_skipped: 0,
        }
    }

    fn run(&mut self, config: &SolveConfig, started: Instant) -> Result<Solution, SolveError> {
        loop {
            self.check_limits(config, started)?;

            let Some(entry) = self.frontier.pop_min() else {
                return Err(SolveError::Unsolvable {
                    states_expanded: self.states_expanded,
                });
            };

            let node = self.arena.get(entry.node);
            if self.visited.is_stale(&node.board, node.g) {
                log::trace!("discarding stale entry (g = {}, f = {})", node.g, entry.f);
                self.stale_skipped += 1;
                continue;
            }
            if node.board.is_goal() {
                let initial = self.arena.get(self.root).board.clone();
                let steps = self.arena.path_to(entry.node);
                debug_assert_eq!(steps.len(), node.g as usize);
                return Ok(Solution::new(
                    initial,
                    steps,
                    self.states_expanded,
                    started.elapsed(),
                ));
            }

            self.expand(entry.node);
        }
    }

    fn check_limits(&self, config: &SolveConfig, started: Instant) -> Result<(), SolveError> {
        let states_expanded = self.states_expanded;
        if config.cancellation().is_some_and(|token| token.is_cancelled()) {
            return Err(SolveError::Cancelled { states_expanded });
        }
        if let Some(max) = config.max_states_expanded()
            && states_expanded >= max
        {
            return Err(SolveError::ResourceExceeded {
                limit: ResourceLimit::StatesExpanded { max },
                states_expanded,
            });
        }
        if let Some(max) = config.max_duration()
            && started.elapsed() >= max
        {
            return Err(SolveError::ResourceExceeded {
                limit: ResourceLimit::Duration { max },
                states_expanded,
            });
        }
        Ok(())
    }

    fn expand(&mut self, id: NodeId) {
        self.states_expanded += 1;

        let parent = self.arena.get(id);
        let g = parent.g + 1;
        let children = parent
            .board
            .successors()
            .map(|(slide, board)| {
                let h = self
                    .heuristic
                    .estimate_after_slide(&parent.board, parent.h, slide, &board);
                (slide, board, h)
            })
            .collect::<Vec<_>>();

        for (slide, board, h) in children {
            let visit = self.visited.offer(&board, g);
            if !visit.should_enqueue() {
                continue;
            }
            if let Visit::Improved { previous } = visit {
                log::trace!("reopening board reached at g = {g} (was {previous})");
                self.reopened += 1;
            }
            let child = self.arena.alloc(Node {
                board,
                g,
                h,
                parent: Some((id, slide)),
            });
            self.frontier.push(child, g, h);
        }
    }
}
