/*
puzzle.rs

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

//! Generated puzzle: the letter grid and where the words are.

use log::warn;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::placement::Placement;
use super::topology::Topology;
use crate::config::GeneratorConfig;

/// Puzzle produced by [`super::random_grid::RandomGrid::generate`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Puzzle {
    /// Parameters used to generate the puzzle.
    pub config: GeneratorConfig,

    /// Letters.
    pub grid: Grid,

    /// Words to find, in uppercase, in the order they were provided.
    pub words: Vec<String>,

    /// Words written in the grid.
    pub placements: Vec<Placement>,

    /// Words that could not be placed in the grid.
    /// The player can only find them if the random filler letters happen to spell them.
    pub unplaced: Vec<String>,

    /// Number of random starting cells tried for all the words.
    pub attempts: usize,

    /// Duration in seconds it took to generate the puzzle.
    pub duration: f32,
}

impl Puzzle {
    /// Return the adjacency rules that were used to place the words.
    pub fn topology(&self) -> Topology {
        Topology::new(self.config.grid_size, self.config.jumps)
    }

    /// Return the placement of the given word.
    pub fn placement(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }

    /// Whether all the words are in the grid.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Convert the words to uppercase and remove blank and duplicated words.
///
/// The order of the remaining words is preserved.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(words.len());

    for w in words {
        let word: String = w.as_ref().trim().to_uppercase();
        if word.is_empty() {
            warn!("Ignoring empty word");
            continue;
        }
        if result.contains(&word) {
            warn!("Ignoring duplicated word: {word}");
            continue;
        }
        result.push(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let words: Vec<String> = normalize_words(&["hello", " World ", "", "HELLO", "fun"]);
        assert_eq!(words, vec!["HELLO", "WORLD", "FUN"]);
    }

    #[test]
    fn normalize_empty_list() {
        let words: [&str; 0] = [];
        assert!(normalize_words(&words).is_empty());
    }
}
