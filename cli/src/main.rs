mod error_formatter;
mod formatter;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::{Formatter, PuzzleSummary};
use gridlock::{Engine, PuzzleDefinition, ResourceLimits, SolveOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "gridlock")]
#[command(about = "Solve logic grid puzzles by brute force.")]
#[command(
    long_about = "Gridlock reads a logic grid puzzle (categories of items plus clues written in a small clue language)\nand searches every assignment of items until one satisfies all clues."
)]
#[command(version)]
struct Cli {
    /// Log search progress to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle definition and print the answer grid
    ///
    /// Loads a JSON puzzle definition, searches for the first assignment
    /// that satisfies every clue, and prints it as a table.
    ///
    /// Definition format:
    ///   {"categories": [{"name": "I", "items": ["a", "b"]}, ...],
    ///    "clues": [{"clue": "I.a=J.d", "count": 1}, ...]}
    Solve {
        /// Puzzle definition file (JSON)
        file: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Walk the whole search space and report how many solutions exist
        #[arg(short, long)]
        count: bool,
        /// Give up after this many milliseconds of search
        #[arg(long = "max-time-ms", value_name = "MS")]
        max_time_ms: Option<u64>,
        /// Give up after evaluating this many full assignments
        #[arg(long = "max-assignments", value_name = "N")]
        max_assignments: Option<u64>,
    },
    /// Parse and validate a puzzle definition without solving it
    ///
    /// Prints every clue in normalized form, so you can see how each one
    /// was read.
    Check {
        /// Puzzle definition file (JSON)
        file: PathBuf,
    },
    /// List all puzzle definitions in a directory
    ///
    /// Scans the directory for .json files and shows the shape of each
    /// puzzle. Files that fail to load are listed with their error.
    List {
        /// Directory containing puzzle definitions
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Enter a puzzle interactively, then solve it
    New {
        /// Print the entered definition as JSON before solving
        #[arg(long)]
        show_definition: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Solve {
            file,
            json,
            count,
            max_time_ms,
            max_assignments,
        } => {
            let limits = limits_from_flags(*max_time_ms, *max_assignments);
            solve_command(file, *json, *count, limits)
        }
        Commands::Check { file } => check_command(file),
        Commands::List { root } => list_command(root),
        Commands::New { show_definition } => new_command(*show_definition),
    };

    if let Err(e) = result {
        // Engine errors get source-highlighted output, everything else the default
        if let Some(gridlock_err) = e.downcast_ref::<gridlock::GridlockError>() {
            eprintln!("{}", error_formatter::format_error(gridlock_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gridlock=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridlock=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn limits_from_flags(max_time_ms: Option<u64>, max_assignments: Option<u64>) -> ResourceLimits {
    let defaults = ResourceLimits::default();
    ResourceLimits {
        max_search_time_ms: max_time_ms.unwrap_or(defaults.max_search_time_ms),
        max_assignments: max_assignments.or(defaults.max_assignments),
        ..defaults
    }
}

fn load_definition(path: &Path) -> Result<PuzzleDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle definition {}", path.display()))?;
    let definition = PuzzleDefinition::from_json(&text)?;
    debug!(
        path = %path.display(),
        categories = definition.categories.len(),
        clues = definition.clues.len(),
        "loaded puzzle definition"
    );
    Ok(definition)
}

fn solve_command(file: &Path, json: bool, count: bool, limits: ResourceLimits) -> Result<()> {
    let engine = load_definition(file)?.into_engine(limits)?;
    print!("{}", solve_engine(&engine, json, count)?);
    Ok(())
}

fn solve_engine(engine: &Engine, json: bool, count: bool) -> Result<String> {
    let formatter = Formatter::default();

    if count {
        let report = engine.count_solutions()?;
        return if json {
            formatter.format_report_json(&report)
        } else {
            formatter.format_report(&report)
        };
    }

    match engine.solve()? {
        SolveOutcome::Solved(solution) => {
            if json {
                formatter.format_solution_json(&solution)
            } else {
                formatter.format_solution(&solution)
            }
        }
        SolveOutcome::NoSolution => Ok(if json {
            format!("{}\n", serde_json::json!({ "solved": false }))
        } else {
            "No solution\n".to_string()
        }),
    }
}

fn check_command(file: &Path) -> Result<()> {
    let engine = load_definition(file)?.into_engine(ResourceLimits::default())?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_check(&engine));
    Ok(())
}

fn list_command(root: &Path) -> Result<()> {
    println!("Scanning {} for puzzle definitions...", root.display());

    let mut summaries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let file = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        let summary = match load_definition(path) {
            Ok(definition) => summarize(file, definition),
            Err(e) => PuzzleSummary::failed(file, format!("{:#}", e)),
        };
        summaries.push(summary);
    }

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_puzzle_list(&summaries));
    Ok(())
}

fn summarize(file: String, definition: PuzzleDefinition) -> PuzzleSummary {
    let categories = definition.categories.len();
    let items = definition.item_count();
    let clues = definition.clues.len();
    match definition.into_engine(ResourceLimits::default()) {
        Ok(_) => PuzzleSummary::loaded(file, categories, items, clues),
        Err(e) => PuzzleSummary::failed(file, e.to_string()),
    }
}

fn new_command(show_definition: bool) -> Result<()> {
    let definition = interactive::run_interactive()?;
    if show_definition {
        println!("{}", serde_json::to_string_pretty(&definition)?);
    }

    let engine = definition.into_engine(ResourceLimits::default())?;
    print!("{}", solve_engine(&engine, false, false)?);
    Ok(())
}
