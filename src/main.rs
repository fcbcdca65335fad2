//! Miu CLI - explore and sample the MIU string-rewriting system.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use miu::State;
use std::path::PathBuf;
use std::process::ExitCode;

/// Miu - explore Hofstadter's MIU puzzle
#[derive(Parser, Debug)]
#[command(name = "miu")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug output (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every state reachable from STATE in one step
    Options {
        /// Source state (letters M, I, U)
        state: State,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SummaryFormat,
    },

    /// Enumerate every state reachable within DEPTH rule applications
    Explore {
        /// Starting state
        #[arg(short, long, default_value = "MI")]
        axiom: State,

        /// Number of rounds (impractical above ~6)
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// JSON file with exploration limits
        #[arg(long)]
        config: Option<PathBuf>,

        /// Largest accepted depth (overrides config)
        #[arg(long)]
        max_depth: Option<u32>,

        /// Largest node set allowed (overrides config)
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Longest state allowed (overrides config)
        #[arg(long)]
        max_len: Option<usize>,

        /// Output format: text, json, csv (adjacency matrix), or dot
        #[arg(short, long, default_value = "text")]
        format: cli::ExploreFormat,

        /// Save the network as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Take one random walk from the axiom
    Walk {
        /// Starting state
        #[arg(short, long, default_value = "MI")]
        axiom: State,

        /// Number of steps (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        steps: usize,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Longest state allowed
        #[arg(long)]
        max_len: Option<usize>,

        /// Output format: text, json, or dot
        #[arg(short, long, default_value = "text")]
        format: cli::WalkFormat,

        /// Save the path as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run many random walks in parallel and aggregate statistics
    Sample {
        /// Starting state
        #[arg(short, long, default_value = "MI")]
        axiom: State,

        /// Steps per walk (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        steps: usize,

        /// Number of walks (default: 1000)
        #[arg(short, long, default_value = "1000")]
        walks: u64,

        /// Starting seed (increments for each walk)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Longest state allowed per walk
        #[arg(long)]
        max_len: Option<usize>,

        /// Number of most common final states to list
        #[arg(long, default_value = "5")]
        top: usize,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SummaryFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Options { state, format } => cli::options::execute(&state, format),

        Commands::Explore {
            axiom,
            depth,
            config,
            max_depth,
            max_nodes,
            max_len,
            format,
            save,
        } => cli::explore::execute(
            &axiom,
            depth,
            &cli::explore::Limits {
                config,
                max_depth,
                max_nodes,
                max_len,
            },
            format,
            save.as_deref(),
        ),

        Commands::Walk {
            axiom,
            steps,
            seed,
            max_len,
            format,
            save,
        } => cli::walk::execute(&axiom, steps, seed, max_len, format, save.as_deref()),

        Commands::Sample {
            axiom,
            steps,
            walks,
            seed,
            threads,
            max_len,
            top,
            format,
            progress,
        } => cli::sample::execute(
            &axiom, steps, walks, seed, threads, max_len, top, format, progress,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
