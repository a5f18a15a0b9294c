//! # sudoku-cover
//!
//! `sudoku-cover` is a command-line Sudoku solver built on an exact-cover
//! reduction: 729 candidate placements against 324 constraints, searched with
//! heuristic backtracking. It enumerates every solution of every puzzle it is
//! fed, one 81-character grid per line, with a blank line between puzzles.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file (one 81-character line per puzzle)
//! sudoku-cover puzzles.txt
//!
//! # Read puzzles from stdin
//! cat puzzles.txt | sudoku-cover
//!
//! # Solve every .sudoku file under a directory
//! sudoku-cover puzzles/
//!
//! # Solve a single puzzle given inline
//! sudoku-cover line --input "53..7....6..195....98....6.8...6...34..8.3..1..."
//!
//! # First solution only, with search statistics
//! sudoku-cover puzzles.txt --first --stats
//! ```
//!
//! Input lines shorter than 81 characters are skipped; in a puzzle line the
//! digits '1'-'9' are givens and any other character is an empty cell.
//! Puzzles with no solution produce no output lines.

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_cover::cover::matrix::Matrix;
use sudoku_cover::cover::search::SearchStats;
use sudoku_cover::sudoku::grid::{CELLS, Grid};
use sudoku_cover::sudoku::solver::solve;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// numbers reported by `--stats`.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-cover", version, about = "An exact-cover Sudoku solver")]
struct Cli {
    /// Path to a puzzle file (one 81-character puzzle per line) or a
    /// directory of `.sudoku` files. Reads stdin when omitted or `-`.
    #[arg(global = true)]
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `line`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle file, one 81-character puzzle per line.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a single puzzle provided inline.
    Line {
        /// The 81-character puzzle. Digits '1'-'9' are givens, anything
        /// else ('.', '0', ...) is an empty cell.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Stop after the first solution of each puzzle instead of enumerating
    /// all of them.
    #[arg(short, long, default_value_t = false)]
    first: bool,

    /// Check every emitted grid against the Sudoku rules before printing it.
    #[arg(short, long, default_value_t = false)]
    verify: bool,

    /// Print search statistics (decisions, backtracks, timing, memory) after
    /// each puzzle.
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Render solutions as nine-line grids instead of 81-character lines.
    #[arg(short, long, default_value_t = false)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    let matrix = Matrix::new();

    let result = match cli.command {
        Some(Commands::File { path, common }) => solve_path(&matrix, &path, &common),
        Some(Commands::Line { input, common }) => solve_line(&matrix, &input, &common),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku-cover",
                &mut io::stdout(),
            );
            Ok(())
        }
        None => match cli.path {
            Some(path) if path.as_os_str() != "-" => solve_path(&matrix, &path, &cli.common),
            _ => solve_stream(&matrix, io::stdin().lock(), &cli.common),
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Dispatches a positional path: directories are walked for `.sudoku` files,
/// anything else is treated as a puzzle file.
fn solve_path(matrix: &Matrix, path: &Path, common: &CommonOptions) -> Result<(), String> {
    if path.is_dir() {
        return solve_dir(matrix, path, common);
    }
    solve_file(matrix, path, common)
}

/// Solves every line of one puzzle file.
fn solve_file(matrix: &Matrix, path: &Path, common: &CommonOptions) -> Result<(), String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    solve_stream(matrix, BufReader::new(file), common)
}

/// Walks a directory and solves every `.sudoku` file found in it.
fn solve_dir(matrix: &Matrix, path: &Path, common: &CommonOptions) -> Result<(), String> {
    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        println!("Solving: {}", file_path.display());
        solve_file(matrix, file_path, common)?;
    }

    Ok(())
}

/// Reads puzzle lines from a stream and solves each in turn. Lines shorter
/// than 81 characters are skipped, matching the classic line format.
fn solve_stream<R: BufRead>(
    matrix: &Matrix,
    reader: R,
    common: &CommonOptions,
) -> Result<(), String> {
    for line in reader.lines() {
        let line = line.map_err(|e| format!("Failed to read line: {e}"))?;
        if let Some(puzzle) = parse_puzzle_line(&line) {
            solve_puzzle(matrix, &puzzle, common)?;
        }
    }
    Ok(())
}

/// Solves a single inline puzzle string.
fn solve_line(matrix: &Matrix, input: &str, common: &CommonOptions) -> Result<(), String> {
    let puzzle: Grid = input.trim().parse().map_err(|e| format!("{e}"))?;
    solve_puzzle(matrix, &puzzle, common)
}

/// A puzzle from one input line, or `None` for lines too short to hold one.
fn parse_puzzle_line(line: &str) -> Option<Grid> {
    let line = line.trim_end();
    if line.len() < CELLS {
        return None;
    }
    line.parse().ok()
}

/// Runs the search for one puzzle, printing each solution as it is found and
/// a blank line once the puzzle is done.
fn solve_puzzle(matrix: &Matrix, puzzle: &Grid, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let mut solutions = solve(matrix, puzzle);

    for solution in &mut solutions {
        if common.verify && !solution.is_solved() {
            return Err(format!("Invalid grid emitted for puzzle {puzzle}"));
        }

        if common.pretty {
            println!("{}\n", solution.pretty());
        } else {
            println!("{solution}");
        }

        if common.first {
            break;
        }
    }
    let elapsed = time.elapsed();

    // Per-puzzle separator, as in the classic stream format.
    println!();

    if common.stats {
        print_stats(puzzle, elapsed, solutions.stats());
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
#[allow(clippy::cast_precision_loss)]
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of search statistics for one puzzle, including memory
/// numbers read from jemalloc.
#[allow(clippy::cast_precision_loss)]
fn print_stats(puzzle: &Grid, elapsed: Duration, s: SearchStats) {
    let elapsed_secs = elapsed.as_secs_f64();

    epoch::advance().unwrap();
    let allocated = stats::allocated::mib().unwrap().read().unwrap() as f64 / (1024.0 * 1024.0);
    let resident = stats::resident::mib().unwrap().read().unwrap() as f64 / (1024.0 * 1024.0);

    println!("========================[ Search Statistics ]========================");
    stat_line("Hints", puzzle.hint_count());
    stat_line("Solutions", s.solutions);
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.6}"));
    println!("=====================================================================");
}
