/*
lib.rs

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

//! Hexwords hides words in a grid of letters where the cells are connected like hexagons, and
//! lets the player find them by tracing paths of neighbor cells.
//!
//! The crate is organized in three layers:
//!
//! * [`generator`] builds the grid. Its [`generator::topology`] module defines which cells are
//!   neighbors. The same rules are used to place the words and to validate the player's
//!   selection.
//! * [`selection`] and [`game`] follow what the player selects and report the words found.
//! * [`console`] and [`cli_options`] are a terminal front end. A graphical front end would
//!   replace them and call [`game::Game`] directly.
//!
//! # Example
//!
//! ```
//! use hexwords::config::GeneratorConfig;
//! use hexwords::game::{Game, GameEvent};
//! use hexwords::generator::random_grid::RandomGrid;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let puzzle = RandomGrid::new(GeneratorConfig::default()).generate(&["FUN"], &mut rng);
//! let cells = puzzle.placement("FUN").map(|p| p.cells.clone()).unwrap_or_default();
//!
//! let mut game = Game::new(puzzle);
//! for (i, cell) in cells.iter().enumerate() {
//!     if i == 0 {
//!         game.pick(*cell);
//!     } else {
//!         game.hover(*cell);
//!     }
//! }
//! let events = game.release();
//! assert_eq!(events.last(), Some(&GameEvent::Completed));
//! ```

pub mod cli_options;
pub mod config;
pub mod console;
pub mod game;
pub mod generator;
pub mod selection;
pub mod word_list;
