/*
selection.rs

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

//! Manage the cells that the player is selecting.
//!
//! The player traces a word by picking a first cell and then moving over neighbor cells.
//! A cell is only added to the selection if it is a neighbor of the last selected cell and if it
//! is not already selected. Other cells are silently ignored.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::grid::Grid;
use crate::generator::topology::{Coord, Topology};

/// A word matched by a selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordMatch {
    /// The word from the word list.
    pub word: String,

    /// Whether the player traced the word from its last letter to its first letter.
    pub reversed: bool,

    /// Selected cells, in the order the player selected them.
    pub cells: Vec<Coord>,
}

impl WordMatch {
    /// Cell of the first letter of the word.
    pub fn start(&self) -> Option<Coord> {
        if self.reversed {
            self.cells.last().copied()
        } else {
            self.cells.first().copied()
        }
    }

    /// Cell of the last letter of the word.
    pub fn end(&self) -> Option<Coord> {
        if self.reversed {
            self.cells.first().copied()
        } else {
            self.cells.last().copied()
        }
    }
}

/// Selection object.
///
/// Only [`Selection::extend`] adds cells, so the lookup index always matches the list. The
/// object can be serialized for display but never read back.
#[derive(Serialize, Debug, Default, Clone)]
pub struct Selection {
    /// Selected cells, in order.
    cells: Vec<Coord>,

    /// Same cells, for fast lookup.
    #[serde(skip)]
    visited: HashSet<Coord>,
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Selection {
    /// Create an empty [`Selection`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all the cells from the selection.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.visited.clear();
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is selected.
    pub fn contains(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// Return the selected cells, in the order they were selected.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Return the first selected cell.
    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Return the last selected cell.
    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Add a cell to the selection.
    ///
    /// The cell must be inside the grid, must not be already selected, and must be a neighbor of
    /// the last selected cell. Otherwise the selection is not modified and the method returns
    /// `false`. The first cell of an empty selection only needs to be inside the grid.
    pub fn extend(&mut self, candidate: Coord, topology: &Topology) -> bool {
        if !topology.contains(candidate) {
            debug!("Cell {candidate} is outside the grid");
            return false;
        }
        if self.contains(candidate) {
            debug!("Cell {candidate} is already selected");
            return false;
        }
        if let Some(last) = self.last()
            && !topology.is_adjacent(last, candidate)
        {
            debug!("Cell {candidate} is not a neighbor of {last}");
            return false;
        }
        self.cells.push(candidate);
        self.visited.insert(candidate);
        true
    }

    /// Return the letters of the selected cells, in order.
    pub fn text(&self, grid: &Grid) -> String {
        grid.read(&self.cells)
    }

    /// Return the word from the list that the selection spells, either forward or backward.
    ///
    /// Forward matches win over backward matches, so a palindrome is never reported as
    /// reversed.
    pub fn evaluate<S: AsRef<str>>(&self, grid: &Grid, words: &[S]) -> Option<WordMatch> {
        if self.is_empty() {
            return None;
        }
        let forward: String = self.text(grid);
        let backward: String = forward.chars().rev().collect();

        let found = |text: &str| words.iter().map(|w| w.as_ref()).find(|w| *w == text);

        let (word, reversed) = match found(&forward) {
            Some(w) => (w, false),
            None => (found(&backward)?, true),
        };
        Some(WordMatch {
            word: word.to_string(),
            reversed,
            cells: self.cells.clone(),
        })
    }
}
