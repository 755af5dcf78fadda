/*
topology.rs

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

//! Adjacency between the cells of the letter grid.
//!
//! The grid is a square of `grid_size` rows and `grid_size` columns, drawn as a brick wall:
//! odd rows are shifted half a cell to the right.
//! Because of that shift, the column offset of the cells above and below depends on the parity
//! of the row:
//!
//! ```text
//!  A B C D          even row 0
//!   E F G H         odd row 1
//!  I J K L          even row 2
//! ```
//!
//! `F` (row 1, column 1) touches `B` and `C` above, and `J` and `K` below.
//! `J` (row 2, column 1) touches `E` and `F` above.
//!
//! When jumps are enabled, the cells two rows up or down, and two columns left or right, are
//! also neighbors.
//!
//! The same [`Topology`] value is used to place the words and to validate the player's
//! selection, so both always agree on what "adjacent" means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell is on an even row.
    pub fn is_even_row(&self) -> bool {
        self.row % 2 == 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Name of a direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    JumpNorth,
    JumpSouth,
    JumpEast,
    JumpWest,
}

/// The six hexagonal headings, in the order the neighbors are listed.
const HEX_HEADINGS: [Heading; 6] = [
    Heading::East,
    Heading::West,
    Heading::NorthEast,
    Heading::NorthWest,
    Heading::SouthEast,
    Heading::SouthWest,
];

/// The four straight jumps of two cells.
const JUMP_HEADINGS: [Heading; 4] = [
    Heading::JumpNorth,
    Heading::JumpSouth,
    Heading::JumpEast,
    Heading::JumpWest,
];

impl Heading {
    /// Return the `(row, column)` offset of the heading for a cell on an even or an odd row.
    pub fn offset(&self, even_row: bool) -> (isize, isize) {
        // Column offset of the cells above and below: on even rows the "right" cell is straight
        // up or down, on odd rows it is one column to the right.
        let (left, right): (isize, isize) = if even_row { (-1, 0) } else { (0, 1) };
        match self {
            Heading::East => (0, 1),
            Heading::West => (0, -1),
            Heading::NorthEast => (-1, right),
            Heading::NorthWest => (-1, left),
            Heading::SouthEast => (1, right),
            Heading::SouthWest => (1, left),
            Heading::JumpNorth => (-2, 0),
            Heading::JumpSouth => (2, 0),
            Heading::JumpEast => (0, 2),
            Heading::JumpWest => (0, -2),
        }
    }

    /// Whether the heading is one of the extended jumps.
    pub fn is_jump(&self) -> bool {
        JUMP_HEADINGS.contains(self)
    }
}

/// A heading resolved into an offset for a given starting row.
///
/// A word is laid out by adding the same offset for each letter, so the offset is fixed by the
/// parity of the first letter's row.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    pub heading: Heading,
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    /// Resolve the heading for the row of the given cell.
    pub fn from_heading(heading: Heading, origin: Coord) -> Self {
        let (d_row, d_col) = heading.offset(origin.is_even_row());
        Self {
            heading,
            d_row,
            d_col,
        }
    }
}

/// Adjacency rules for a grid of a given size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Topology {
    /// Number of rows and columns.
    pub grid_size: usize,

    /// Whether the jump offsets are part of the neighborhood.
    pub jumps: bool,
}

impl Topology {
    /// Create a [`Topology`] object.
    pub fn new(grid_size: usize, jumps: bool) -> Self {
        Self { grid_size, jumps }
    }

    /// Whether the cell is inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.grid_size && coord.col < self.grid_size
    }

    /// Return the headings that apply to this topology.
    pub fn headings(&self) -> Vec<Heading> {
        let mut headings: Vec<Heading> = HEX_HEADINGS.to_vec();
        if self.jumps {
            headings.extend_from_slice(&JUMP_HEADINGS);
        }
        headings
    }

    /// Return all the candidate directions from the given cell, without any bounds check.
    pub fn directions(&self, origin: Coord) -> Vec<Direction> {
        self.headings()
            .into_iter()
            .map(|h| Direction::from_heading(h, origin))
            .collect()
    }

    /// Move `count` times along the direction from the given cell.
    ///
    /// Return `None` if the destination is outside the grid.
    pub fn step(&self, origin: Coord, direction: Direction, count: usize) -> Option<Coord> {
        let count: isize = isize::try_from(count).ok()?;
        let row: isize = isize::try_from(origin.row).ok()? + direction.d_row * count;
        let col: isize = isize::try_from(origin.col).ok()? + direction.d_col * count;
        if row < 0 || col < 0 {
            return None;
        }
        let coord: Coord = Coord::new(row as usize, col as usize);
        if self.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }

    /// Return the cells covered by a word of `length` letters that starts at `start` and goes
    /// along `direction`.
    ///
    /// Return `None` as soon as one of the cells would be outside the grid.
    pub fn walk(&self, start: Coord, direction: Direction, length: usize) -> Option<Vec<Coord>> {
        (0..length)
            .map(|i| self.step(start, direction, i))
            .collect()
    }

    /// Return the neighbors of the given cell that are inside the grid.
    ///
    /// Cells on the border simply have fewer neighbors.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        if !self.contains(coord) {
            return Vec::new();
        }
        self.directions(coord)
            .into_iter()
            .filter_map(|d| self.step(coord, d, 1))
            .collect()
    }

    /// Whether `to` is a neighbor of `from`.
    pub fn is_adjacent(&self, from: Coord, to: Coord) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Whether each cell in the sequence is a neighbor of the previous one.
    pub fn is_connected(&self, cells: &[Coord]) -> bool {
        cells.windows(2).all(|w| self.is_adjacent(w[0], w[1]))
    }

    /// Iterate over all the cells of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.grid_size)
            .flat_map(move |row| (0..self.grid_size).map(move |col| Coord::new(row, col)))
    }
}
