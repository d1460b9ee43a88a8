//! Runs a solve on a background thread and waits for its outcome.
use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

use slidetile_core::Board;
use slidetile_solver::{AStarSolver, Solution};

use crate::error::CliError;

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Solves `board` on a worker thread, logging while the search is still running.
pub(crate) fn solve_in_background(solver: AStarSolver, board: Board) -> Result<Solution, CliError> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(solver.solve(&board));
    });

    let mut waited = Duration::ZERO;
    loop {
        match rx.recv_timeout(PROGRESS_INTERVAL) {
            Ok(result) => return Ok(result?),
            Err(RecvTimeoutError::Timeout) => {
                waited += PROGRESS_INTERVAL;
                log::info!("still solving after {}s", waited.as_secs());
            }
            Err(RecvTimeoutError::Disconnected) => return Err(CliError::WorkerDisconnected),
        }
    }
}

#[cfg(test)]
mod tests {
    use slidetile_solver::{SolveConfig, SolveError};

    use super::*;

    #[test]
    fn test_returns_solution() {
        let board = Board::from_tiles(&[1, 2, 3, 4, 0, 5, 7, 8, 6]).unwrap();
        let solver = AStarSolver::new(SolveConfig::new());
        let solution = solve_in_background(solver, board).unwrap();
        assert_eq!(solution.step_count(), 2);
    }

    #[test]
    fn test_forwards_solver_errors() {
        let board = Board::from_tiles(&[2, 1, 3, 0]).unwrap();
        let solver = AStarSolver::new(SolveConfig::new().with_dimension(2));
        let err = solve_in_background(solver, board).unwrap_err();
        assert!(matches!(
            err,
            CliError::Solve(SolveError::Unsolvable { .. })
        ));
    }
}
