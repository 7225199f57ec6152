/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/cursor.rs
 * Purpose:  Character cursor with explicit checkpoints for backtracking.
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::grammar::classifier::is_space;

/// A saved cursor position.
///
/// Only the few backtracking points of the parser take checkpoints; all
/// other scanning moves strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Checkpoint(usize);

impl Checkpoint {
    pub(crate) fn index(self) -> usize {
        self.0
    }

    /// The position `count` characters after this one.
    pub(crate) fn advanced_by(self, count: usize) -> Self {
        Checkpoint(self.0 + count)
    }
}

/// Position within the characters of the source expression.
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
        }
    }

    /// Current character offset.
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// The current character, `None` at end of input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// The character `offset` positions ahead of the current one.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    pub(crate) fn peek_is(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    /// The character just before the cursor.
    pub(crate) fn previous(&self) -> Option<char> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    /// Consumes and returns the current character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += 1;
        Some(ch)
    }

    /// Moves forward `count` characters, clamped to the end of input.
    pub(crate) fn advance_by(&mut self, count: usize) {
        self.index = (self.index + count).min(self.chars.len());
    }

    /// Consumes `ch` if it is the current character.
    pub(crate) fn eat(&mut self, ch: char) -> bool {
        if self.peek_is(ch) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Advances past spaces and tabs. Newlines are not whitespace here.
    pub(crate) fn skip_spaces(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.index += 1;
        }
    }

    /// Up to `count` characters starting at the cursor.
    pub(crate) fn lookahead(&self, count: usize) -> String {
        let end = (self.index + count).min(self.chars.len());
        self.chars[self.index.min(end)..end].iter().collect()
    }

    /// The source text between `start` and the cursor.
    pub(crate) fn slice_from(&self, start: Checkpoint) -> String {
        let start = start.0.min(self.index);
        self.chars[start..self.index].iter().collect()
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.index)
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.0.min(self.chars.len());
    }
}
