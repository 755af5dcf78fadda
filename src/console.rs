/*
console.rs

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

//! Play a game from text commands.
//!
//! Each line is a command:
//!
//! ```text
//! pick ROW COL     start a selection at the given cell
//! hover ROW COL    extend the selection with the given cell
//! release          end the selection and verify the word
//! show             print the grid and the selection
//! words            print the words and whether they are found
//! quit             stop playing
//! ```
//!
//! Commands are case-insensitive and blank lines are ignored.

use log::debug;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::game::{Game, GameEvent};
use crate::generator::topology::Coord;

/// Type of errors when parsing a command.
#[derive(Debug, PartialEq)]
pub enum CommandError {
    /// The command name is not known.
    Unknown(String),

    /// The command needs a row and a column.
    MissingCoordinates(String),

    /// A row or a column is not a number.
    InvalidNumber(String),

    /// The command got more arguments than expected.
    TooManyArguments(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::Unknown(c) => write!(f, "unknown command: {c}"),
            CommandError::MissingCoordinates(c) => write!(f, "{c}: expected ROW COL"),
            CommandError::InvalidNumber(n) => write!(f, "not a valid row or column: {n}"),
            CommandError::TooManyArguments(c) => write!(f, "{c}: too many arguments"),
        }
    }
}

impl Error for CommandError {}

/// Player commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Pick(Coord),
    Hover(Coord),
    Release,
    Show,
    Words,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name: String = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let coord = |args: &[&str]| -> Result<Coord, CommandError> {
            match args {
                [row, col] => {
                    let row: usize = row
                        .parse()
                        .map_err(|_| CommandError::InvalidNumber(row.to_string()))?;
                    let col: usize = col
                        .parse()
                        .map_err(|_| CommandError::InvalidNumber(col.to_string()))?;
                    Ok(Coord::new(row, col))
                }
                [_, _, ..] => Err(CommandError::TooManyArguments(name.clone())),
                _ => Err(CommandError::MissingCoordinates(name.clone())),
            }
        };
        let no_args = |command: Command| -> Result<Command, CommandError> {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::TooManyArguments(name.clone()))
            }
        };

        match name.as_str() {
            "pick" | "p" => Ok(Command::Pick(coord(&args)?)),
            "hover" | "h" => Ok(Command::Hover(coord(&args)?)),
            "release" | "r" => no_args(Command::Release),
            "show" | "s" => no_args(Command::Show),
            "words" | "w" => no_args(Command::Words),
            "quit" | "q" => no_args(Command::Quit),
            _ => Err(CommandError::Unknown(name.clone())),
        }
    }
}

/// Play a [`Game`] from text commands.
pub struct Console {
    pub game: Game,
}

impl Console {
    /// Create a [`Console`] object.
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Read commands from `reader` and write the results to `writer`, until the `quit` command,
    /// the end of the input, or until all the words are found.
    ///
    /// Invalid commands are reported to `writer` and do not stop the game.
    ///
    /// # Errors
    ///
    /// Return an error if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> io::Result<()> {
        self.show(writer)?;
        for line in reader.lines() {
            let line: String = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    debug!("Command {command:?}");
                    if self.apply(command, writer)? {
                        writeln!(writer, "Congratulations! You found all the words!")?;
                        break;
                    }
                }
                Err(e) => writeln!(writer, "Error: {e}")?,
            }
        }
        writer.flush()
    }

    /// Run a single command. Return `true` when the puzzle is completed.
    pub fn apply<W: Write>(&mut self, command: Command, writer: &mut W) -> io::Result<bool> {
        match command {
            Command::Pick(coord) => {
                if !self.game.pick(coord) {
                    writeln!(writer, "Cannot start a selection at {coord}")?;
                }
                writeln!(writer, "> {}", self.game.current_text())?;
            }
            Command::Hover(coord) => {
                if self.game.hover(coord) {
                    writeln!(writer, "> {}", self.game.current_text())?;
                }
            }
            Command::Release => {
                let text: String = self.game.current_text();
                let events: Vec<GameEvent> = self.game.release();
                if events.is_empty() && !text.is_empty() {
                    writeln!(writer, "{text}: no new word")?;
                }
                for event in events {
                    match event {
                        GameEvent::WordFound(m) => writeln!(
                            writer,
                            "Found {} ({}/{})",
                            m.word,
                            self.game.found_words().len(),
                            self.game.words().len()
                        )?,
                        GameEvent::Completed => return Ok(true),
                    }
                }
            }
            Command::Show => self.show(writer)?,
            Command::Words => self.words(writer)?,
            Command::Quit => (),
        }
        Ok(false)
    }

    fn show<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self.game.grid())?;
        let selection: &[Coord] = self.game.selection().cells();
        if !selection.is_empty() {
            let cells: Vec<String> = selection.iter().map(|c| c.to_string()).collect();
            writeln!(
                writer,
                "Selection: {} {}",
                self.game.current_text(),
                cells.join(" ")
            )?;
        }
        Ok(())
    }

    fn words<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for word in self.game.words() {
            let mark: &str = if self.game.is_found(word) { "x" } else { " " };
            writeln!(writer, "[{mark}] {word}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::grid::Grid;
    use crate::generator::puzzle::Puzzle;

    fn game() -> Game {
        Game::new(Puzzle {
            config: GeneratorConfig::with_size(4),
            grid: Grid::from_rows(&["FUNX", "XXXX", "XXXX", "XXXX"]),
            words: vec!["FUN".to_string()],
            placements: Vec::new(),
            unplaced: Vec::new(),
            attempts: 0,
            duration: 0.0,
        })
    }

    fn play(input: &str) -> String {
        let mut console: Console = Console::new(game());
        let mut out: Vec<u8> = Vec::new();
        console.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("pick 1 2".parse::<Command>(), Ok(Command::Pick(Coord::new(1, 2))));
        assert_eq!("  HOVER 3 0 ".parse::<Command>(), Ok(Command::Hover(Coord::new(3, 0))));
        assert_eq!("r".parse::<Command>(), Ok(Command::Release));
        assert_eq!("words".parse::<Command>(), Ok(Command::Words));
        assert_eq!("Quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "jump 1 2".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "pick 1".parse::<Command>(),
            Err(CommandError::MissingCoordinates("pick".to_string()))
        );
        assert_eq!(
            "pick 1 a".parse::<Command>(),
            Err(CommandError::InvalidNumber("a".to_string()))
        );
        assert_eq!(
            "pick 1 2 3".parse::<Command>(),
            Err(CommandError::TooManyArguments("pick".to_string()))
        );
        assert_eq!(
            "release now".parse::<Command>(),
            Err(CommandError::TooManyArguments("release".to_string()))
        );
    }

    #[test]
    fn play_until_complete() {
        let out: String = play("pick 0 2\nhover 0 1\nhover 0 0\nrelease\nshow\n");
        assert!(out.contains("> NUF"));
        assert!(out.contains("Found FUN (1/1)"));
        assert!(out.contains("Congratulations"));
        // The game stops after the last word
        assert_eq!(out.matches(" 0  F U N X").count(), 1);
    }

    #[test]
    fn invalid_lines_do_not_stop_the_game() {
        let out: String = play("dance\n\npick 0 0\nhover 2 2\nrelease\nwords\nquit\nrelease\n");
        assert!(out.contains("Error: unknown command: dance"));
        assert!(out.contains("F: no new word"));
        assert!(out.contains("[ ] FUN"));
    }
}
