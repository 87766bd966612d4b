use std::io::{self, BufRead};

use clap::Parser;
use salto::error::Result;
use salto::solver::stats::render_stats_table;
use salto::sudoku::Puzzle;

const EXAMPLE_PUZZLE: &str =
    "7......5..5.98472383..2...9.79.58.4...........6.14.97.5...3..94126495.8..4......1";

/// Solve Sudoku puzzles with Knuth's Dancing Links.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// An 81-character puzzle: '1'..'9' for clues, '.' for blanks.
    /// When omitted, puzzles are read line by line from stdin.
    puzzle: Option<String>,

    /// Print search statistics as a table after each solve.
    #[arg(long)]
    stats: bool,

    /// Print search statistics as JSON after each solve.
    #[arg(long)]
    json: bool,
}

fn solve_and_print(grid: &str, cli: &Cli) -> Result<()> {
    let puzzle = Puzzle::parse(grid)?;
    let (solution, stats) = puzzle.solve();
    match solution {
        Some(solved) => println!("\n{solved}\n"),
        None => println!("Solution not found"),
    }
    if cli.stats {
        println!("{}", render_stats_table(&stats));
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(grid) = &cli.puzzle {
        return solve_and_print(grid, cli);
    }

    println!("Enter a sudoku puzzle in the format shown below:");
    println!("{EXAMPLE_PUZZLE}\n");
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let grid = line.trim();
        if grid.is_empty() {
            continue;
        }
        // A malformed line is reported but does not end the loop.
        if let Err(err) = solve_and_print(grid, cli) {
            eprintln!("{err}");
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
