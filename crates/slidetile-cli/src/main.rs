//! Command-line front end for the slidetile solver.
//!
//! ```sh
//! slidetile solve 1 2 3 4 0 5 7 8 6
//! slidetile solve --boards 5,1,2,4,9,6,3,8,13,10,7,11,0,14,15,12
//! slidetile scramble --dimension 4 --depth 40 --solve
//! ```

use std::{process::ExitCode, str::FromStr as _, time::Duration};

use clap::{Args, Parser, Subcommand, ValueEnum};
use slidetile_core::{Board, BoardError};
use slidetile_generator::{ScrambleGenerator, ScrambleSeed};
use slidetile_solver::{AStarSolver, HeuristicKind, Solution, SolveConfig};

use self::error::CliError;

mod error;
mod worker;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a board given as N² tiles, with 0 for the blank.
    Solve {
        /// Tiles in row-major order, separated by spaces or commas.
        #[arg(value_name = "TILES", required = true, num_args = 1..)]
        tiles: Vec<String>,

        /// Board dimension N. Inferred from the tile count if omitted.
        #[arg(short, long, value_name = "N")]
        dimension: Option<usize>,

        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Generate a scrambled solvable board.
    Scramble {
        /// Board dimension N.
        #[arg(short, long, value_name = "N", default_value_t = SolveConfig::DEFAULT_DIMENSION)]
        dimension: usize,

        /// Number of random slides from the goal. Uniformly random if omitted.
        #[arg(long, value_name = "SLIDES")]
        depth: Option<usize>,

        /// Seed as 64 hex digits. Random if omitted.
        #[arg(long, value_name = "HEX")]
        seed: Option<String>,

        /// Also solve the generated board.
        #[arg(long)]
        solve: bool,

        #[command(flatten)]
        solve_args: SolveArgs,
    },
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Give up after expanding this many states.
    #[arg(long, value_name = "STATES")]
    max_expanded: Option<usize>,

    /// Give up after this many milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Heuristic guiding the search.
    #[arg(long, value_name = "KIND", default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Print the board after every slide.
    #[arg(long)]
    boards: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Misplaced,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Self::Manhattan,
            HeuristicArg::Misplaced => Self::MisplacedTiles,
        }
    }
}

impl SolveArgs {
    fn config(&self, dimension: usize) -> SolveConfig {
        let mut config = SolveConfig::new()
            .with_dimension(dimension)
            .with_heuristic(self.heuristic.into());
        if let Some(max) = self.max_expanded {
            config = config.with_max_states_expanded(max);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_max_duration(Duration::from_millis(ms));
        }
        config
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Solve {
            tiles,
            dimension,
            solve,
        } => {
            let board = parse_board(&tiles, dimension)?;
            println!("{board}");
            println!();
            solve_and_print(&board, &solve)
        }
        Command::Scramble {
            dimension,
            depth,
            seed,
            solve,
            solve_args,
        } => {
            let mut generator = ScrambleGenerator::new(dimension)?;
            if let Some(depth) = depth {
                generator = generator.with_depth(depth);
            }
            let generated = match seed {
                Some(seed) => generator.generate_with_seed(ScrambleSeed::from_str(&seed)?),
                None => generator.generate(),
            };
            log::debug!("generated {dimension}x{dimension} board from seed {}", generated.seed);

            println!("Seed: {}", generated.seed);
            println!(
                "Tiles: {}",
                generated
                    .board
                    .tiles()
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            println!();
            println!("{}", generated.board);
            if solve {
                println!();
                solve_and_print(&generated.board, &solve_args)?;
            }
            Ok(())
        }
    }
}

fn parse_board(tiles: &[String], dimension: Option<usize>) -> Result<Board, CliError> {
    let board = Board::from_str(&tiles.join(" "))?;
    let Some(dimension) = dimension else {
        return Ok(board);
    };
    Board::check_dimension(dimension)?;
    if board.dimension() != dimension {
        return Err(BoardError::WrongLength {
            expected: dimension * dimension,
            actual: board.tiles().len(),
        }
        .into());
    }
    Ok(board)
}

fn solve_and_print(board: &Board, args: &SolveArgs) -> Result<(), CliError> {
    let solver = AStarSolver::new(args.config(board.dimension()));
    let solution = worker::solve_in_background(solver, board.clone())?;
    print_solution(&solution, args.boards);
    Ok(())
}

fn print_solution(solution: &Solution, boards: bool) {
    if solution.step_count() == 0 {
        println!("Already solved.");
    }
    for (i, step) in solution.steps().iter().enumerate() {
        println!("{:>4}. {}", i + 1, step.slide());
        if boards {
            println!("{}", step.board());
            println!();
        }
    }
    println!(
        "Solved in {} slides ({} states expanded, {:.3?}).",
        solution.step_count(),
        solution.states_expanded(),
        solution.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_board_infers_dimension() {
        let tiles = ["1,2,3".to_owned(), "4 0 5".to_owned(), "7 8 6".to_owned()];
        let board = parse_board(&tiles, None).unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 0, 5, 7, 8, 6]);
    }

    #[test]
    fn test_parse_board_checks_dimension() {
        let tiles = ["1 2 3 0".to_owned()];
        assert!(matches!(
            parse_board(&tiles, Some(3)),
            Err(CliError::Board(BoardError::WrongLength {
                expected: 9,
                actual: 4
            }))
        ));
        assert!(parse_board(&tiles, Some(2)).is_ok());
    }

    #[test]
    fn test_parse_board_rejects_unsupported_dimension() {
        let tiles = ["1 2 3 0".to_owned()];
        for dimension in [0, 1, usize::MAX] {
            assert!(matches!(
                parse_board(&tiles, Some(dimension)),
                Err(CliError::Board(BoardError::UnsupportedDimension { dimension: d })) if d == dimension
            ));
        }
    }

    #[test]
    fn test_solve_args_build_config() {
        let cli = Cli::try_parse_from([
            "slidetile",
            "solve",
            "--max-expanded",
            "100",
            "--timeout-ms",
            "250",
            "--heuristic",
            "misplaced",
            "1",
            "2",
            "0",
            "3",
        ])
        .unwrap();
        let Command::Solve { solve, .. } = cli.command else {
            panic!("expected solve command");
        };
        let config = solve.config(2);
        assert_eq!(config.dimension(), 2);
        assert_eq!(config.max_states_expanded(), Some(100));
        assert_eq!(config.max_duration(), Some(Duration::from_millis(250)));
        assert_eq!(config.heuristic(), HeuristicKind::MisplacedTiles);
    }

    #[test]
    fn test_scramble_rejects_bad_seed() {
        let err = run(Command::Scramble {
            dimension: 3,
            depth: None,
            seed: Some("xyz".to_owned()),
            solve: false,
            solve_args: SolveArgs {
                max_expanded: None,
                timeout_ms: None,
                heuristic: HeuristicArg::Manhattan,
                boards: false,
            },
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Seed(_)));
    }
}
