/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/arguments.rs
 * Purpose:  Call argument lists and array literals.
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

use crate::ast::Node;
use crate::error::ParseError;
use crate::parser::parser::{ParseResult, Parser};

impl<'g> Parser<'g> {
    /// Parses items up to and including `terminator` (`)` or `]`).
    ///
    /// The opening character has already been consumed. Items may be
    /// separated by commas, spaces, or both; stray commas are ignored.
    /// Named arguments arrive already folded into a `KeyValueExpression`.
    pub(crate) fn parse_arguments(&mut self, terminator: char) -> ParseResult<Vec<Node>> {
        let mut items = Vec::new();

        loop {
            self.cursor.skip_spaces();

            match self.cursor.peek() {
                None => {
                    let opener = if terminator == ')' { '(' } else { '[' };
                    return Err(ParseError::unclosed(
                        format!("Unclosed {}", opener),
                        self.cursor.index(),
                    )
                    .with_help(format!("add a closing `{}`", terminator)));
                }
                Some(ch) if ch == terminator => {
                    self.cursor.advance();
                    return Ok(items);
                }
                Some(',') => {
                    self.cursor.advance();
                }
                Some(_) => match self.parse_expression()? {
                    Some(Node::Compound { .. }) | None => {
                        return Err(ParseError::expected_comma(self.cursor.index()));
                    }
                    Some(node) => items.push(node),
                },
            }
        }
    }

    /// "[" elements "]"
    pub(crate) fn parse_array(&mut self) -> ParseResult<Node> {
        self.cursor.advance();
        let elements = self.parse_arguments(']')?;
        Ok(Node::Array { elements })
    }
}
