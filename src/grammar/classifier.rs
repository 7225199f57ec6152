/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     grammar/classifier.rs
 * Purpose:  Identifier character classification.
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

use std::collections::HashSet;

use log::debug;

/// Decides which characters may start or continue an identifier.
///
/// The base set is ASCII letters, `_` and `$` (plus ASCII digits for
/// continuation). Callers can register extra characters, which are then
/// accepted in both positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharClassifier {
    extra: HashSet<char>,
}

impl CharClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts every character of `chars` in identifiers.
    pub fn add_chars(&mut self, chars: &str) {
        debug!(target: "pawx_expr", "adding identifier characters {:?}", chars);
        self.extra.extend(chars.chars());
    }

    /// Stops accepting every character of `chars` (only affects the
    /// extra set; the base set cannot be removed).
    pub fn remove_chars(&mut self, chars: &str) {
        debug!(target: "pawx_expr", "removing identifier characters {:?}", chars);
        for ch in chars.chars() {
            self.extra.remove(&ch);
        }
    }

    pub fn is_extra(&self, ch: char) -> bool {
        self.extra.contains(&ch)
    }

    pub fn is_identifier_start(&self, ch: char) -> bool {
        ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || self.is_extra(ch)
    }

    pub fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }

}

/// Space and tab are the only whitespace the scanner skips.
pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}
