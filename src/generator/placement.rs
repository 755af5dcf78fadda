/*
placement.rs

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

//! Word placement on the grid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::grid::Grid;
use super::topology::{Coord, Direction, Topology};

/// Reasons for rejecting a candidate placement.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// At least one letter would be outside the grid.
    OutOfBounds,

    /// A cell already holds a different letter.
    Conflict {
        coord: Coord,
        existing: char,
        wanted: char,
    },

    /// Two consecutive letters would not be in adjacent cells.
    NotAdjacent { from: Coord, to: Coord },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "the word does not fit in the grid"),
            PlacementError::Conflict {
                coord,
                existing,
                wanted,
            } => write!(f, "cell {coord} holds {existing} instead of {wanted}"),
            PlacementError::NotAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not adjacent")
            }
        }
    }
}

impl Error for PlacementError {}

/// A word written in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    /// The word, in uppercase.
    pub word: String,

    /// Cell of the first letter.
    pub start: Coord,

    /// Offset between two consecutive letters.
    pub direction: Direction,

    /// Cells of the letters, in order. The first cell is [`Placement::start`].
    pub cells: Vec<Coord>,
}

impl Placement {
    /// Verify that the word can be written from `start` along `direction`, and return the
    /// corresponding [`Placement`] object.
    ///
    /// The grid is not modified. A cell may be shared with another word if it already holds
    /// the same letter.
    ///
    /// # Errors
    ///
    /// Return a [`PlacementError`] if a letter is outside the grid, if a cell holds another
    /// letter, or if two consecutive cells are not neighbors for the given topology.
    pub fn check(
        word: &str,
        start: Coord,
        direction: Direction,
        grid: &Grid,
        topology: &Topology,
    ) -> Result<Self, PlacementError> {
        let cells: Vec<Coord> = topology
            .walk(start, direction, word.chars().count())
            .ok_or(PlacementError::OutOfBounds)?;

        for (coord, wanted) in cells.iter().zip(word.chars()) {
            if let Some(existing) = grid.get(*coord)
                && existing != wanted
            {
                return Err(PlacementError::Conflict {
                    coord: *coord,
                    existing,
                    wanted,
                });
            }
        }

        // A straight offset is not always a neighbor step: the diagonal offsets depend on the
        // row parity, and every other letter lands on a row of the other parity.
        if let Some(w) = cells.windows(2).find(|w| !topology.is_adjacent(w[0], w[1])) {
            return Err(PlacementError::NotAdjacent {
                from: w[0],
                to: w[1],
            });
        }

        Ok(Self {
            word: word.to_string(),
            start,
            direction,
            cells,
        })
    }

    /// Write the letters of the word into the grid.
    pub fn commit(&self, grid: &mut Grid) {
        for (coord, letter) in self.cells.iter().zip(self.word.chars()) {
            grid.set(*coord, letter);
        }
    }

    /// Cell of the last letter.
    pub fn end(&self) -> Coord {
        *self.cells.last().unwrap_or(&self.start)
    }

    /// Whether the word uses the given cell.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}
