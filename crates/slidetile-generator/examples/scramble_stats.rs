//! Example generating scrambled boards and measuring how hard they are to solve.
//!
//! This example shows how to:
//! - Create a `ScrambleGenerator` in uniform or random-walk mode
//! - Generate boards in parallel and solve each one optimally
//! - Report the seed and solution of the hardest board found
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example scramble_stats
//! ```
//!
//! Sample 4×4 boards produced by 60-slide random walks:
//!
//! ```sh
//! cargo run --release --example scramble_stats -- --dimension 4 --depth 60 --count 50
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use slidetile_generator::{GeneratedBoard, ScrambleGenerator};
use slidetile_solver::{AStarSolver, Solution, SolveConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board dimension N.
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    dimension: usize,

    /// Number of random slides from the goal. Uniform boards if omitted.
    #[arg(long, value_name = "SLIDES")]
    depth: Option<usize>,

    /// Number of boards to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    count: usize,

    /// Expansion budget per board.
    #[arg(long, value_name = "STATES", default_value_t = 5_000_000)]
    max_expanded: usize,
}

fn main() {
    let args = Args::parse();
    let generator = match ScrambleGenerator::new(args.dimension) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = match args.depth {
        Some(depth) => generator.with_depth(depth),
        None => generator,
    };
    let solver = AStarSolver::new(
        SolveConfig::new()
            .with_dimension(args.dimension)
            .with_max_states_expanded(args.max_expanded),
    );

    let results = (0..args.count)
        .into_par_iter()
        .map(|_| {
            let board = generator.generate();
            let solution = solver.solve(&board.board);
            (board, solution)
        })
        .collect::<Vec<_>>();

    let mut solved = Vec::new();
    let mut failed = 0;
    for (board, result) in results {
        match result {
            Ok(solution) => solved.push((board, solution)),
            Err(err) => {
                eprintln!("{}: {err}", board.seed);
                failed += 1;
            }
        }
    }

    println!("Boards:");
    println!("  sampled: {}", args.count);
    println!("  solved: {}", solved.len());
    println!("  failed: {failed}");
    println!();

    let Some((hardest, solution)) = solved
        .iter()
        .max_by_key(|(_, solution)| solution.step_count())
    else {
        process::exit(1);
    };
    print_stats(&solved);
    println!();
    print_hardest(hardest, solution);
}

#[expect(clippy::cast_precision_loss)]
fn print_stats(solved: &[(GeneratedBoard, Solution)]) {
    let total_steps = solved
        .iter()
        .map(|(_, solution)| solution.step_count())
        .sum::<usize>();
    let total_expanded = solved
        .iter()
        .map(|(_, solution)| solution.states_expanded())
        .sum::<usize>();
    let count = solved.len() as f64;

    println!("Stats:");
    println!("  mean steps: {:.2}", total_steps as f64 / count);
    println!("  mean states expanded: {:.0}", total_expanded as f64 / count);
}

fn print_hardest(hardest: &GeneratedBoard, solution: &Solution) {
    println!("Hardest:");
    println!("  seed: {}", hardest.seed);
    println!("  steps: {}", solution.step_count());
    println!("  states expanded: {}", solution.states_expanded());
    println!("  elapsed: {:?}", solution.elapsed());
    println!();
    println!("{}", hardest.board);
    println!();
    let slides = solution
        .slides()
        .map(|slide| slide.to_string())
        .collect::<Vec<_>>();
    println!("Slides:");
    println!("  {}", slides.join(", "));
}
