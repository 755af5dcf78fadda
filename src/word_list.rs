/*
word_list.rs

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

//! Read word lists.
//!
//! A word list file contains one word per line.
//! Blank lines and lines starting with `#` are ignored.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WordListError {
    /// The list does not contain any word.
    Empty,

    /// A word contains characters other than ASCII letters.
    InvalidWord { line: usize, word: String },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordListError::Empty => write!(f, "the word list is empty"),
            WordListError::InvalidWord { line, word } => {
                write!(f, "line {line}: {word:?} must only contain the letters A to Z")
            }
        }
    }
}

impl Error for WordListError {}

/// Verify the words given on the command line and return them. Blank words are skipped.
///
/// The position reported in [`WordListError::InvalidWord`] starts at 1.
pub fn check_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, WordListError> {
    let mut result: Vec<String> = Vec::with_capacity(words.len());

    for (i, w) in words.iter().enumerate() {
        let word: &str = w.as_ref().trim();
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordListError::InvalidWord {
                line: i + 1,
                word: word.to_string(),
            });
        }
        if !word.is_empty() {
            result.push(word.to_string());
        }
    }
    if result.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(result)
}

/// Parse the content of a word list.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<String>, Box<dyn Error>> {
    let mut result: Vec<String> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line: String = line?;
        let word: &str = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Box::new(WordListError::InvalidWord {
                line: i + 1,
                word: word.to_string(),
            }));
        }
        result.push(word.to_string());
    }
    if result.is_empty() {
        return Err(Box::new(WordListError::Empty));
    }
    Ok(result)
}

/// Read the word list from the given file.
pub fn load(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    debug!("Reading word list {path:?}");
    let file: File = File::open(path)?;
    parse(BufReader::new(file))
}
