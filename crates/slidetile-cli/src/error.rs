use slidetile_core::BoardError;
use slidetile_generator::ScrambleSeedError;
use slidetile_solver::SolveError;

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("invalid board: {_0}")]
    #[from]
    Board(BoardError),
    #[display("invalid seed: {_0}")]
    #[from]
    Seed(ScrambleSeedError),
    #[display("{_0}")]
    #[from]
    Solve(SolveError),
    #[display("solver worker exited without a result")]
    WorkerDisconnected,
}
