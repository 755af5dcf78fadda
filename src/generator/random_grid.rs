/*
random_grid.rs

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

//! Generate a random letter grid that hides the words.

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use std::time::Instant;

use super::grid::Grid;
use super::placement::Placement;
use super::puzzle::{Puzzle, normalize_words};
use super::topology::{Coord, Direction, Topology};
use crate::config::GeneratorConfig;

/// [`RandomGrid`] object.
pub struct RandomGrid {
    /// Generator parameters.
    pub config: GeneratorConfig,

    /// Adjacency rules, shared by the placement and by the validation of the placement.
    pub topology: Topology,

    /// Number of random starting cells tried while generating the last puzzle.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,
}

impl RandomGrid {
    /// Create the object.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            topology: Topology::new(config.grid_size, config.jumps),
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a puzzle for the given words.
    ///
    /// The longest words are placed first, because they are the hardest to fit.
    /// A word that cannot be placed after [`GeneratorConfig::max_attempts`] random starting
    /// cells is abandoned: a warning is logged and the word is listed in
    /// [`Puzzle::unplaced`]. The generation itself never fails, and the remaining cells are
    /// always filled with random letters.
    ///
    /// All the randomness comes from `rng`, so a seeded generator gives reproducible puzzles.
    pub fn generate<R: Rng, S: AsRef<str>>(&mut self, words: &[S], rng: &mut R) -> Puzzle {
        let start: Instant = Instant::now();
        self.iteration = 0;

        let words: Vec<String> = normalize_words(words);
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort_by_key(|w| Reverse(w.chars().count()));

        let mut grid: Grid = Grid::new(self.config.grid_size);
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        let mut unplaced: Vec<String> = Vec::new();

        for word in sorted {
            match self.place_word(word, &mut grid, rng) {
                Some(p) => {
                    debug!(
                        "Word {} placed from {} going {:?}",
                        p.word, p.start, p.direction.heading
                    );
                    placements.push(p);
                }
                None => {
                    warn!(
                        "Could not place word {word} after {} attempts",
                        self.config.max_attempts
                    );
                    unplaced.push(word.clone());
                }
            }
        }

        grid.fill(rng);
        grid.debug();

        self.duration = start.elapsed().as_secs_f32();
        info!(
            "{} words placed, {} abandoned, {} attempts in {}s",
            placements.len(),
            unplaced.len(),
            self.iteration,
            self.duration
        );

        Puzzle {
            config: self.config,
            grid,
            words,
            placements,
            unplaced,
            attempts: self.iteration,
            duration: self.duration,
        }
    }

    /// Try random starting cells until the word fits, and write it into the grid.
    fn place_word<R: Rng>(
        &mut self,
        word: &str,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Option<Placement> {
        let size: usize = self.config.grid_size;
        if size == 0 {
            return None;
        }
        let length: usize = word.chars().count();

        for _ in 0..self.config.max_attempts {
            self.iteration += 1;
            let start: Coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));

            // Only keep the directions where the whole word stays inside the grid
            let mut directions: Vec<Direction> = self
                .topology
                .directions(start)
                .into_iter()
                .filter(|d| self.topology.walk(start, *d, length).is_some())
                .collect();

            // Randomize the order in which to test the directions
            directions.shuffle(rng);

            for direction in directions {
                match Placement::check(word, start, direction, grid, &self.topology) {
                    Ok(p) => {
                        p.commit(grid);
                        return Some(p);
                    }
                    Err(e) => {
                        debug!("    {word} from {start} going {:?}: {e}", direction.heading);
                    }
                }
            }
        }
        None
    }
}
