/*
generator.rs

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

//! Generate letter grids that hide words.
//!
//! The cells of the grid are connected as in a brick wall (see [`topology`]).
//! A [`topology::Topology`] object gives the neighbors of a cell. The same object is used to
//! place the words and, later, to verify the player's selection.
//!
//! To create a puzzle, create a [`random_grid::RandomGrid`] object and use its
//! [`random_grid::RandomGrid::generate`] method.
//! The method returns a [`puzzle::Puzzle`] object that stores:
//!
//! * The [`grid::Grid`] object with all the letters.
//! * The [`placement::Placement`] objects that describe where each word is written.
//! * The list of the words that could not be placed. Failing to place a word is not an error:
//!   the word is just absent from the grid.

pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod random_grid;
pub mod topology;

use rand::Rng;

use crate::config::GeneratorConfig;

/// Generate a grid of the given size for the words, using the default number of attempts and
/// no jumps.
pub fn generate<R: Rng, S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
    rng: &mut R,
) -> grid::Grid {
    random_grid::RandomGrid::new(GeneratorConfig::with_size(grid_size))
        .generate(words, rng)
        .grid
}
