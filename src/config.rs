/*
config.rs

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

//! Default values and generator parameters.

use serde::{Deserialize, Serialize};

pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of rows and columns when the caller does not provide a size.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Largest grid the command line accepts. Rows and columns are displayed with a single letter
/// or two digits, so larger grids would not render correctly in a terminal.
pub const MAX_GRID_SIZE: usize = 26;

/// Number of random starting cells tried for each word before giving up on that word.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Letters used to fill the cells that no word occupies.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Word list used when none is given.
pub const DEFAULT_WORDS: [&str; 5] = ["HELLO", "WORLD", "GAME", "PLAY", "FUN"];

/// Parameters for the grid generator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows, which is also the number of columns.
    pub grid_size: usize,

    /// Number of random starting cells to try for each word.
    pub max_attempts: usize,

    /// Whether cells two rows or two columns apart are also neighbors.
    /// The same setting drives word placement and the validation of the player's selection.
    pub jumps: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            jumps: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given grid size, with the default number of attempts.
    pub fn with_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }
}
