/*
end_to_end.rs

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

//! Generate puzzles and play them through the [`Game`] object, as a front end would.

use hexwords::config::GeneratorConfig;
use hexwords::game::{Game, GameEvent, SelectionState};
use hexwords::generator::puzzle::Puzzle;
use hexwords::generator::random_grid::RandomGrid;
use hexwords::generator::topology::Coord;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generate(words: &[&str], config: GeneratorConfig, seed: u64) -> Puzzle {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    RandomGrid::new(config).generate(words, &mut rng)
}

/// Press the first cell, move over the others, and release.
fn trace(game: &mut Game, cells: &[Coord]) -> Vec<GameEvent> {
    if let Some((first, rest)) = cells.split_first() {
        game.pick(*first);
        for c in rest {
            game.hover(*c);
        }
    }
    game.release()
}

#[test]
fn fun_is_found_along_its_placement() {
    let mut placed: usize = 0;
    for seed in 0..100 {
        let puzzle: Puzzle = generate(&["fun"], GeneratorConfig::default(), seed);
        assert_eq!(puzzle.words, vec!["FUN"]);
        let Some(placement) = puzzle.placement("FUN").cloned() else {
            continue;
        };
        placed += 1;
        assert_eq!(puzzle.placements.len(), 1);

        let mut game: Game = Game::new(puzzle);
        let events: Vec<GameEvent> = trace(&mut game, &placement.cells);
        assert_eq!(events.len(), 2, "seed {seed}");
        assert!(matches!(&events[0], GameEvent::WordFound(m) if m.word == "FUN" && !m.reversed));
        assert_eq!(events[1], GameEvent::Completed);
    }
    assert!(placed >= 99);
}

#[test]
fn reversed_trace_finds_the_word() {
    let puzzle: Puzzle = generate(&["HELLO"], GeneratorConfig::default(), 11);
    let mut cells: Vec<Coord> = puzzle
        .placement("HELLO")
        .map(|p| p.cells.clone())
        .unwrap_or_default();
    assert_eq!(cells.len(), 5);
    cells.reverse();

    let mut game: Game = Game::new(puzzle);
    let events: Vec<GameEvent> = trace(&mut game, &cells);
    match events.first() {
        Some(GameEvent::WordFound(m)) => {
            assert_eq!(m.word, "HELLO");
            assert!(m.reversed);
            assert_eq!(m.start(), cells.last().copied());
        }
        e => panic!("unexpected events {e:?}"),
    }
}

#[test]
fn all_default_words_complete_once() {
    let words: [&str; 5] = ["HELLO", "WORLD", "GAME", "PLAY", "FUN"];
    let puzzle: Puzzle = generate(&words, GeneratorConfig::default(), 2025);
    assert!(puzzle.is_complete(), "unplaced: {:?}", puzzle.unplaced);
    let placements = puzzle.placements.clone();

    let mut game: Game = Game::new(puzzle);
    let mut completed: usize = 0;
    // Trace every word twice: the second round must not report anything
    for _ in 0..2 {
        for p in &placements {
            completed += trace(&mut game, &p.cells)
                .iter()
                .filter(|e| **e == GameEvent::Completed)
                .count();
        }
    }
    assert_eq!(completed, 1);
    assert!(game.is_complete());
    assert_eq!(game.found_words().len(), 5);
}

#[test]
fn selection_stops_at_the_first_gap() {
    let puzzle: Puzzle = generate(&["FUN"], GeneratorConfig::default(), 3);
    let mut game: Game = Game::new(puzzle);

    assert!(game.pick(Coord::new(4, 4)));
    assert!(game.hover(Coord::new(4, 5)));
    // Not a neighbor of (4, 5)
    assert!(!game.hover(Coord::new(6, 5)));
    // Neighbors of (4, 5), but the selection must not jump over the rejected cell
    assert!(game.hover(Coord::new(5, 5)));
    assert_eq!(
        game.selection().cells(),
        &[Coord::new(4, 4), Coord::new(4, 5), Coord::new(5, 5)]
    );
    game.release();
    assert_eq!(game.state(), SelectionState::Idle);
}

#[test]
fn jumps_are_accepted_by_the_selection() {
    let config: GeneratorConfig = GeneratorConfig {
        jumps: true,
        ..GeneratorConfig::default()
    };
    let mut game: Game = Game::new(generate(&["FUN"], config, 8));
    assert!(game.pick(Coord::new(4, 4)));
    assert!(game.hover(Coord::new(6, 4)));
    assert!(game.hover(Coord::new(6, 2)));
    assert_eq!(game.selection().len(), 3);
}

#[test]
fn every_word_abandoned_still_gives_a_full_grid() {
    let puzzle: Puzzle = generate(&["ABCDEFGHIJ", "KLMNOPQRST"], GeneratorConfig::with_size(3), 4);
    assert!(puzzle.placements.is_empty());
    assert_eq!(puzzle.unplaced.len(), 2);
    assert_eq!(puzzle.grid.num_empty(), 0);

    let game: Game = Game::new(puzzle);
    assert!(!game.is_complete());
}
