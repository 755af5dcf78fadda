/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexwords.

Hexwords is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexwords is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexwords. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a grid for the default words:
//!
//! ```text
//! $ hexwords --seed 42
//! ```
//!
//! Generate three 10x10 grids with jumps enabled, as JSON:
//!
//! ```text
//! $ hexwords -g 10 --jumps -c 3 --json -w rust cargo crate borrow trait
//! ```
//!
//! Play in the terminal:
//!
//! ```text
//! $ hexwords --play
//! pick 0 0
//! hover 0 1
//! release
//! ```

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{
    COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORDS, GeneratorConfig,
    MAX_GRID_SIZE,
};
use crate::console::Console;
use crate::game::Game;
use crate::generator::puzzle::Puzzle;
use crate::generator::random_grid::RandomGrid;
use crate::word_list;

/// Hide words in a grid of hexagonal cells.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Words to hide in the grid
    #[arg(short, long, num_args = 1.., conflicts_with = "words_file")]
    words: Vec<String>,

    /// File with the words to hide, one word per line
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Number of rows and columns
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    grid_size: usize,

    /// Number of random starting cells to try for each word
    #[arg(
        short = 'a',
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = parse_max_attempts
    )]
    max_attempts: usize,

    /// Also connect the cells two rows or two columns apart
    #[arg(short, long, default_value_t = false)]
    jumps: bool,

    /// Seed for the random generator, to get the same grids again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of grids to generate
    #[arg(short, long, default_value_t = 1, conflicts_with = "play")]
    count: usize,

    /// Print the grids in JSON format
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    json: bool,

    /// Print some statistics after generating the grids
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Play in the terminal: read pick, hover, release commands from the standard input
    #[arg(long, default_value_t = false)]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn parse_grid_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("{s} is not a number"))?;
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("the grid size must be between 1 and {MAX_GRID_SIZE}"))
    }
}

fn parse_max_attempts(s: &str) -> Result<usize, String> {
    let attempts: usize = s.parse().map_err(|_| format!("{s} is not a number"))?;
    if attempts >= DEFAULT_MAX_ATTEMPTS {
        Ok(attempts)
    } else {
        Err(format!("at least {DEFAULT_MAX_ATTEMPTS} attempts are required"))
    }
}

/// JSON representation of a generated grid.
#[derive(Serialize)]
struct PuzzleOutput<'a> {
    /// Seed that reproduces the grid with `--seed`.
    seed: u64,

    /// Letters, one string per row.
    rows: Vec<String>,

    #[serde(flatten)]
    puzzle: &'a Puzzle,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder: env_logger::Builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate the grids and print them, or play a game.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let words: Vec<String> = match &args.words_file {
        Some(path) => word_list::load(path)?,
        None if args.words.is_empty() => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        None => word_list::check_words(&args.words)?,
    };
    debug!("Words: {words:?}");

    let config: GeneratorConfig = GeneratorConfig {
        grid_size: args.grid_size,
        max_attempts: args.max_attempts,
        jumps: args.jumps,
    };

    // Always use a seed, so that a grid can be generated again from the logs
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Seed {seed}");
    let mut generator: RandomGrid = RandomGrid::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.play {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let puzzle: Puzzle = generator.generate(&words, &mut rng);
        for word in &puzzle.unplaced {
            writeln!(out, "Warning: {word} is not in the grid")?;
        }
        let mut console: Console = Console::new(Game::new(puzzle));
        console.run(io::stdin().lock(), &mut out)?;
        if args.summary {
            print_play_summary(&console.game, &mut out)?;
        }
        return Ok(());
    }

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut unplaced: usize = 0;
    let mut outputs: Vec<String> = Vec::with_capacity(args.count);

    for i in 0..args.count {
        let puzzle_seed: u64 = grid_seed(seed, i);
        debug!("Grid {i}, seed {puzzle_seed}");
        let mut rng: StdRng = StdRng::seed_from_u64(puzzle_seed);
        let puzzle: Puzzle = generator.generate(&words, &mut rng);

        total += puzzle.duration;
        if puzzle.duration > max {
            max = puzzle.duration;
        }
        attempts += puzzle.attempts;
        unplaced += puzzle.unplaced.len();

        if args.json {
            outputs.push(serde_json::to_string_pretty(&PuzzleOutput {
                seed: puzzle_seed,
                rows: puzzle.grid.rows(),
                puzzle: &puzzle,
            })?);
        } else {
            print_puzzle(&puzzle, &mut out)?;
        }
    }

    if args.json {
        writeln!(out, "[{}]", outputs.join(",\n"))?;
    }

    if args.summary {
        let count: usize = args.count.max(1);
        writeln!(
            out,
            "
          seed = {seed}
    total time = {total}s
  average time = {}s
      max time = {max}s
average attempts = {}
unplaced words = {unplaced}",
            total / count as f32,
            attempts / count,
        )?;
    }
    Ok(())
}

/// Seed of the grid at the given index. Each grid can be generated again alone with `--seed`.
fn grid_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add(index as u64)
}

/// Print the grid and the position of the words.
fn print_puzzle<W: Write>(puzzle: &Puzzle, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", puzzle.grid)?;
    for p in &puzzle.placements {
        writeln!(
            out,
            "{:<12} {} -> {}  {:?}",
            p.word,
            p.start,
            p.end(),
            p.direction.heading
        )?;
    }
    for word in &puzzle.unplaced {
        writeln!(out, "{word:<12} not placed")?;
    }
    writeln!(out)
}

fn print_play_summary<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} of {} words found",
        game.found_words().len(),
        game.words().len()
    )?;
    for word in game.words().iter().filter(|w| !game.is_found(w)) {
        match game.puzzle().placement(word) {
            Some(p) => writeln!(out, "{word:<12} {} -> {}", p.start, p.end())?,
            None => writeln!(out, "{word:<12} not placed")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args: Args = Args::try_parse_from(["hexwords"]).unwrap();
        assert_eq!(args.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(args.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(args.words.is_empty());
        assert!(!args.jumps);
        assert_eq!(args.count, 1);
    }

    #[test]
    fn options() {
        let args: Args =
            Args::try_parse_from(["hexwords", "-g", "10", "-j", "-s", "7", "-w", "fun", "game"])
                .unwrap();
        assert_eq!(args.grid_size, 10);
        assert!(args.jumps);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.words, vec!["fun", "game"]);
    }

    #[test]
    fn invalid_values() {
        assert!(Args::try_parse_from(["hexwords", "-g", "0"]).is_err());
        assert!(Args::try_parse_from(["hexwords", "-g", "27"]).is_err());
        assert!(Args::try_parse_from(["hexwords", "-a", "10"]).is_err());
        assert!(Args::try_parse_from(["hexwords", "--play", "--json"]).is_err());
        assert!(Args::try_parse_from(["hexwords", "-w", "fun", "--words-file", "w.txt"]).is_err());
    }

    #[test]
    fn each_grid_has_its_own_seed() {
        assert_eq!(grid_seed(7, 0), 7);
        assert_eq!(grid_seed(7, 2), 9);
        assert_eq!(grid_seed(u64::MAX, 1), 0);

        // The second grid of a run is the first grid of a run started from its seed
        let generate = |seed: u64| -> Puzzle {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            RandomGrid::new(GeneratorConfig::default()).generate(&DEFAULT_WORDS, &mut rng)
        };
        let second: Puzzle = generate(grid_seed(100, 1));
        let alone: Puzzle = generate(grid_seed(101, 0));
        assert_eq!(second.grid, alone.grid);

        let output: PuzzleOutput = PuzzleOutput {
            seed: grid_seed(100, 1),
            rows: second.grid.rows(),
            puzzle: &second,
        };
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["seed"], 101);
    }

    #[test]
    fn print_puzzle_lists_the_words() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let puzzle: Puzzle = RandomGrid::new(GeneratorConfig::with_size(5))
            .generate(&["FUN", "TOOLONGWORD"], &mut rng);
        let mut out: Vec<u8> = Vec::new();
        print_puzzle(&puzzle, &mut out).unwrap();
        let text: String = String::from_utf8(out).unwrap();
        assert!(text.contains("FUN "));
        assert!(text.contains("TOOLONGWORD  not placed"));
    }
}
