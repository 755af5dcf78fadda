/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the puzzle, the selection in progress, and the words found so far.
//! The presentation layer converts the pointer or touch events into grid cells, and then calls
//! [`Game::pick`] when the player presses a cell, [`Game::hover`] when the pointer moves over
//! another cell, and [`Game::release`] when the player releases the pointer.

use log::{debug, info};
use std::collections::BTreeSet;

use crate::generator::grid::Grid;
use crate::generator::puzzle::Puzzle;
use crate::generator::topology::{Coord, Topology};
use crate::selection::{Selection, WordMatch};

/// Whether the player is tracing a word.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
}

/// Notifications sent to the presentation layer when the player releases the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player found a word for the first time.
    WordFound(WordMatch),

    /// The player found the last word. Sent only once per game.
    Completed,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle being played.
    puzzle: Puzzle,

    /// Adjacency rules used for the placement of the words.
    topology: Topology,

    /// Cells that the player is selecting.
    selection: Selection,

    /// Whether a selection is in progress.
    state: SelectionState,

    /// Words found so far.
    found: BTreeSet<String>,

    /// Whether the completion event has already been sent.
    completed: bool,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    ///
    /// A puzzle without words is already complete.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            topology: puzzle.topology(),
            puzzle,
            selection: Selection::new(),
            state: SelectionState::Idle,
            found: BTreeSet::new(),
            completed: false,
        }
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Return the words to find.
    pub fn words(&self) -> &[String] {
        &self.puzzle.words
    }

    /// Return the words found so far.
    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.found
    }

    /// Whether the player already found the given word.
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Whether all the words are found.
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.words.len()
    }

    /// Return the selection in progress.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Return the letters of the selection in progress.
    pub fn current_text(&self) -> String {
        self.selection.text(&self.puzzle.grid)
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The player pressed a cell. This starts a new selection.
    ///
    /// Ignored if a selection is already in progress or if the cell is outside the grid.
    pub fn pick(&mut self, coord: Coord) -> bool {
        if self.state == SelectionState::Selecting {
            debug!("Pick at {coord} ignored: selection already in progress");
            return false;
        }
        self.selection.clear();
        if !self.selection.extend(coord, &self.topology) {
            return false;
        }
        self.state = SelectionState::Selecting;
        true
    }

    /// The pointer moved over a cell. Extend the selection if the cell is a neighbor of the last
    /// selected cell and is not already selected.
    ///
    /// Ignored if no selection is in progress.
    pub fn hover(&mut self, coord: Coord) -> bool {
        if self.state != SelectionState::Selecting {
            return false;
        }
        self.selection.extend(coord, &self.topology)
    }

    /// The player released the pointer. Verify whether the selection spells a word that is not
    /// already found, and then clear the selection.
    ///
    /// Return the resulting events: nothing if the selection is not a word or if the word was
    /// already found, [`GameEvent::WordFound`] for a new word, followed by
    /// [`GameEvent::Completed`] if that was the last word.
    /// With an empty word list, the first release sends [`GameEvent::Completed`] alone.
    pub fn release(&mut self) -> Vec<GameEvent> {
        let mut events: Vec<GameEvent> = Vec::new();
        if self.state != SelectionState::Selecting {
            return events;
        }

        if let Some(m) = self.selection.evaluate(&self.puzzle.grid, &self.puzzle.words) {
            if self.found.insert(m.word.clone()) {
                info!(
                    "Found {}{} ({}/{})",
                    m.word,
                    if m.reversed { " (reversed)" } else { "" },
                    self.found.len(),
                    self.puzzle.words.len()
                );
                events.push(GameEvent::WordFound(m));
            } else {
                debug!("{} already found", m.word);
            }
        }

        // An empty word list is complete from the start: report it on the first release
        if self.is_complete() && !self.completed {
            self.completed = true;
            info!("All the words are found");
            events.push(GameEvent::Completed);
        }

        self.selection.clear();
        self.state = SelectionState::Idle;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::placement::Placement;
    use crate::generator::topology::{Direction, Heading};

    /// Build a puzzle by hand: `HELLO` on row 0 and `FUN` on row 2, both going east.
    fn puzzle() -> Puzzle {
        let grid: Grid = Grid::from_rows(&[
            "HELLOXYZ", "QQQQQQQQ", "FUNQQQQQ", "QQQQQQQQ", "QQQQQQQQ", "QQQQQQQQ", "QQQQQQQQ",
            "QQQQQQQQ",
        ]);
        let topology: Topology = Topology::new(8, false);
        let place = |word: &str, start: Coord| -> Placement {
            let d: Direction = Direction::from_heading(Heading::East, start);
            Placement::check(word, start, d, &Grid::new(8), &topology).unwrap()
        };
        Puzzle {
            config: GeneratorConfig::default(),
            grid,
            words: vec!["HELLO".to_string(), "FUN".to_string()],
            placements: vec![place("HELLO", Coord::new(0, 0)), place("FUN", Coord::new(2, 0))],
            unplaced: Vec::new(),
            attempts: 2,
            duration: 0.0,
        }
    }

    fn trace(game: &mut Game, cells: &[(usize, usize)]) -> Vec<GameEvent> {
        let mut iter = cells.iter();
        if let Some((r, c)) = iter.next() {
            game.pick(Coord::new(*r, *c));
        }
        for (r, c) in iter {
            game.hover(Coord::new(*r, *c));
        }
        game.release()
    }

    #[test]
    fn state_machine() {
        let mut game: Game = Game::new(puzzle());
        assert_eq!(game.state(), SelectionState::Idle);

        // Moves and releases before a press are ignored
        assert!(!game.hover(Coord::new(0, 1)));
        assert!(game.release().is_empty());
        assert!(game.selection().is_empty());

        assert!(game.pick(Coord::new(0, 0)));
        assert_eq!(game.state(), SelectionState::Selecting);
        assert!(game.hover(Coord::new(0, 1)));
        assert_eq!(game.current_text(), "HE");

        // A second press does not restart the selection
        assert!(!game.pick(Coord::new(5, 5)));
        assert_eq!(game.selection().len(), 2);

        game.release();
        assert_eq!(game.state(), SelectionState::Idle);
        assert!(game.selection().is_empty());
        assert!(!game.hover(Coord::new(0, 2)));
    }

    #[test]
    fn pick_outside_the_grid() {
        let mut game: Game = Game::new(puzzle());
        assert!(!game.pick(Coord::new(8, 0)));
        assert_eq!(game.state(), SelectionState::Idle);
    }

    #[test]
    fn find_words_and_complete_once() {
        let mut game: Game = Game::new(puzzle());

        let events: Vec<GameEvent> = trace(&mut game, &[(2, 2), (2, 1), (2, 0)]);
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::WordFound(m) => {
                assert_eq!(m.word, "FUN");
                assert!(m.reversed);
                assert_eq!(m.start(), Some(Coord::new(2, 0)));
            }
            e => panic!("unexpected event {e:?}"),
        }
        assert!(game.is_found("FUN"));
        assert!(!game.is_complete());

        // Finding the same word again is a no-op
        assert!(trace(&mut game, &[(2, 0), (2, 1), (2, 2)]).is_empty());
        assert_eq!(game.found_words().len(), 1);

        let events: Vec<GameEvent> = trace(&mut game, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], GameEvent::WordFound(m) if m.word == "HELLO" && !m.reversed));
        assert_eq!(events[1], GameEvent::Completed);
        assert!(game.is_complete());

        // No second completion event
        assert!(trace(&mut game, &[(0, 4), (0, 3), (0, 2), (0, 1), (0, 0)]).is_empty());
    }

    #[test]
    fn non_adjacent_cells_are_skipped() {
        let mut game: Game = Game::new(puzzle());
        game.pick(Coord::new(0, 0));
        assert!(game.hover(Coord::new(0, 1)));
        assert!(!game.hover(Coord::new(0, 3)));
        assert!(!game.hover(Coord::new(0, 0)));
        assert_eq!(game.selection().cells(), &[Coord::new(0, 0), Coord::new(0, 1)]);
        assert!(game.release().is_empty());
    }

    #[test]
    fn empty_word_list_completes_on_first_release() {
        let mut p: Puzzle = puzzle();
        p.words.clear();
        p.placements.clear();
        let mut game: Game = Game::new(p);
        assert!(game.is_complete());

        assert_eq!(trace(&mut game, &[(0, 0)]), vec![GameEvent::Completed]);
        assert!(trace(&mut game, &[(0, 0)]).is_empty());
    }
}
