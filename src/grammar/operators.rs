/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     grammar/operators.rs
 * Purpose:  Registry of unary and binary operator tokens.
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

use std::collections::{HashMap, HashSet};

use log::debug;

/// Binary operators recognized out of the box, with their precedence.
///
/// Higher numbers bind tighter.
pub const DEFAULT_BINARY_OPS: &[(&str, i32)] = &[
    ("||", 1),
    ("&&", 2),
    ("|", 3),
    ("^", 4),
    ("&", 5),
    ("==", 6),
    ("!=", 6),
    ("===", 6),
    ("!==", 6),
    ("<", 7),
    (">", 7),
    ("<=", 7),
    (">=", 7),
    ("<<", 8),
    (">>", 8),
    (">>>", 8),
    ("+", 9),
    ("-", 9),
    ("*", 10),
    ("/", 10),
    ("%", 10),
];

/// Prefix operators recognized out of the box.
pub const DEFAULT_UNARY_OPS: &[&str] = &["-", "!", "~", "+"];

/// The unary and binary operator tables.
///
/// Both tables also cache the length (in characters) of their longest
/// key, which bounds how far ahead the scanner looks when matching an
/// operator. Entries are never validated: overlapping or contradictory
/// registrations are allowed and resolved by longest match.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    unary: HashSet<String>,
    binary: HashMap<String, i32>,
    max_unary_len: usize,
    max_binary_len: usize,
}

impl Default for OperatorTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for op in DEFAULT_UNARY_OPS {
            table.add_unary(*op);
        }
        for (op, precedence) in DEFAULT_BINARY_OPS {
            table.add_binary(*op, *precedence);
        }
        table
    }
}

impl OperatorTable {
    /// A table with no operators at all.
    pub fn empty() -> Self {
        Self {
            unary: HashSet::new(),
            binary: HashMap::new(),
            max_unary_len: 0,
            max_binary_len: 0,
        }
    }

    pub fn add_unary(&mut self, op: impl Into<String>) {
        let op = op.into();
        debug!(target: "pawx_expr", "registering unary operator {:?}", op);
        self.max_unary_len = self.max_unary_len.max(op.chars().count());
        self.unary.insert(op);
    }

    pub fn remove_unary(&mut self, op: &str) {
        debug!(target: "pawx_expr", "removing unary operator {:?}", op);
        self.unary.remove(op);
        if op.chars().count() == self.max_unary_len {
            self.max_unary_len = longest_key(self.unary.iter());
        }
    }

    /// Registers (or re-prioritizes) a binary operator.
    pub fn add_binary(&mut self, op: impl Into<String>, precedence: i32) {
        let op = op.into();
        debug!(
            target: "pawx_expr",
            "registering binary operator {:?} with precedence {}", op, precedence
        );
        self.max_binary_len = self.max_binary_len.max(op.chars().count());
        self.binary.insert(op, precedence);
    }

    pub fn remove_binary(&mut self, op: &str) {
        debug!(target: "pawx_expr", "removing binary operator {:?}", op);
        self.binary.remove(op);
        if op.chars().count() == self.max_binary_len {
            self.max_binary_len = longest_key(self.binary.keys());
        }
    }

    pub fn is_unary(&self, op: &str) -> bool {
        self.unary.contains(op)
    }

    /// Precedence of a binary operator, `None` if it is not registered.
    pub fn precedence(&self, op: &str) -> Option<i32> {
        self.binary.get(op).copied()
    }

    pub fn max_unary_len(&self) -> usize {
        self.max_unary_len
    }

    pub fn max_binary_len(&self) -> usize {
        self.max_binary_len
    }

    /// Longest registered unary operator that prefixes `text`.
    pub fn longest_unary_prefix(&self, text: &str) -> Option<String> {
        longest_prefix(text, self.max_unary_len, |candidate| self.is_unary(candidate))
    }

    /// Longest registered binary operator that prefixes `text`.
    pub fn longest_binary_prefix(&self, text: &str) -> Option<(String, i32)> {
        let op = longest_prefix(text, self.max_binary_len, |candidate| {
            self.binary.contains_key(candidate)
        })?;
        let precedence = self.precedence(&op)?;
        Some((op, precedence))
    }
}

fn longest_key<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(|key| key.chars().count()).max().unwrap_or(0)
}

/// Tries every prefix of `text` from `max_len` characters down to one.
fn longest_prefix(text: &str, max_len: usize, accept: impl Fn(&str) -> bool) -> Option<String> {
    let mut candidate: String = text.chars().take(max_len).collect();

    while !candidate.is_empty() {
        if accept(&candidate) {
            return Some(candidate);
        }
        candidate.pop();
    }

    None
}
