/*
grid.rs

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

//! Letter grid.

use log::{Level, debug, log_enabled};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::topology::Coord;
use crate::config::ALPHABET;

/// Square grid of letters. A cell is `None` until a word or a filler letter is written to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty [`Grid`] object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a grid from its rows. Mostly useful for tests and for replaying a known puzzle.
    ///
    /// Rows shorter than the number of rows are padded with empty cells, and extra characters
    /// are ignored. A `.` is an empty cell.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid: Grid = Grid::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().take(grid.size).enumerate() {
                if c != '.' {
                    grid.set(Coord::new(row, col), c);
                }
            }
        }
        grid
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Return the letter at the given cell, or `None` if the cell is empty or outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).and_then(|i| self.cells[i])
    }

    /// Write a letter in a cell. Cells outside the grid are ignored.
    pub fn set(&mut self, coord: Coord, letter: char) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = Some(letter);
        }
    }

    /// Whether the cell already holds a letter.
    pub fn is_filled(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of empty cells.
    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill every empty cell with a random letter.
    pub fn fill<R: Rng>(&mut self, rng: &mut R) {
        let mut count: usize = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
            count += 1;
        }
        debug!("{count} cells filled with random letters");
    }

    /// Return the letters along the given cells. Empty or outside cells are skipped.
    pub fn read(&self, cells: &[Coord]) -> String {
        cells.iter().filter_map(|c| self.get(*c)).collect()
    }

    /// Return the grid as one string per row. Empty cells are rendered as `.`.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|r| r.iter().map(|c| c.unwrap_or('.')).collect())
            .collect()
    }

    /// Print the grid at the debug level.
    pub fn debug(&self) {
        if log_enabled!(Level::Debug) {
            for line in self.to_string().lines() {
                debug!("{line}");
            }
        }
    }
}

/// Render the grid as a brick wall, odd rows shifted one position to the right.
///
/// ```text
///     0 1 2 3
///  0  H E L L
///  1   O . . .
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:>2}")?;
        }
        writeln!(f)?;
        for (row, line) in self.rows().iter().enumerate() {
            write!(f, "{row:>2} ")?;
            if row % 2 == 1 {
                write!(f, " ")?;
            }
            for c in line.chars() {
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
