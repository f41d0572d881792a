// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Headless CLI driver for the coloring search engine.
//!
//! Loads a coloring from a JSON file (the same wire format the interactive
//! host uses), derives the search shape from its cells, and drives the
//! controller synchronously, printing found colorings as canonical JSON.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tricolor_search::codec;
use tricolor_search::geometry::Shape;
use tricolor_search::search::{SearchController, SearchMode, SearchOptions, SearchStatus};

#[derive(Parser, Debug)]
#[command(
    name = "tricolor",
    version,
    about = "Search for non-degenerate 3-colorings of triangular lattice patches"
)]
struct Cli {
    /// Coloring JSON file; its cells define the search shape.
    #[arg(long)]
    coloring: PathBuf,

    /// Candidates processed per chunk.
    #[arg(long, default_value_t = 1000)]
    chunk_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate all 3^N colorings of the shape.
    Exhaustive,
    /// Sample random colorings of the loaded cells until the chunk budget
    /// runs out.
    Random {
        /// RNG seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of chunks to run before stopping.
        #[arg(long, default_value_t = 100)]
        chunks: u64,
    },
}

fn main() {
    env_logger::init();
    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let payload = std::fs::read_to_string(&cli.coloring)?;
    let coloring = codec::coloring_from_json(&payload)?;
    let shape = Shape::from_coloring(&coloring);

    let mut controller = SearchController::new();
    let (mode, seed, max_chunks) = match cli.command {
        Commands::Exhaustive => (SearchMode::Exhaustive, None, u64::MAX),
        Commands::Random { seed, chunks } => (SearchMode::Randomized, seed, chunks),
    };
    let options = SearchOptions {
        chunk_size: cli.chunk_size,
        rng_seed: seed,
    };
    let handle = controller.start_search_with(Some(shape), mode, Some(&coloring), options)?;

    let mut chunks = 0;
    while controller.status() == SearchStatus::Running {
        if chunks >= max_chunks {
            handle.cancel();
        }
        controller.step();
        chunks += 1;
    }

    let progress = controller.poll();
    for result in progress.results {
        println!("{}", codec::coloring_to_json(result.coloring())?);
    }
    eprintln!(
        "{:?}: generated {}, evaluated {}, found {} in {:.3}s",
        progress.status,
        progress.generated,
        progress.evaluated,
        progress.found,
        progress.elapsed.as_secs_f64()
    );
    Ok(())
}
