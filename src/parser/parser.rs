/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/parser.rs
 * Purpose:  Parse state and the top-level driver.
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

use log::trace;

use crate::ast::Node;
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::parser::cursor::Cursor;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// What the identifier scanner hands back.
///
/// `name=value` inside an argument list is scanned as a `KeyValue`, which
/// must be folded into a `KeyValueExpression` before it reaches any tree.
/// Keeping it out of `Node` means an unfolded pair cannot leak.
#[derive(Debug)]
pub(crate) enum Operand {
    Node(Node),
    KeyValue { key: String, value: Node },
}

/// State of one parse.
///
/// Scanning and tree building happen in a single pass: the grammar rules
/// (spread across `expressions`, `binary`, `postfix`, `arguments` and
/// `scanner` via additional `impl Parser` blocks) read characters straight
/// from the cursor.
///
/// Recursion depth follows the nesting depth of the input; thousands of
/// nested parentheses can exhaust the stack.
///
/// With `?` and `:` as identifier characters, every glued `a?1:` segment
/// parses the rest of the input twice (once to see whether an alternate
/// follows, once for real), so a chain of n such segments costs 2^n.
pub(crate) struct Parser<'g> {
    /// Operators, identifier characters and keywords in effect.
    pub(crate) grammar: &'g Grammar,

    pub(crate) cursor: Cursor,

    /// Set while parsing the branches of a `? :`. A numeral directly
    /// followed by `:` then ends at the colon even when `:` is a
    /// configured identifier character.
    pub(crate) in_ternary: bool,
}

impl<'g> Parser<'g> {
    pub(crate) fn new(grammar: &'g Grammar, source: &str) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(source),
            in_ternary: false,
        }
    }

    /// Parses the whole source.
    ///
    /// Expressions may be separated by `;`, `,` or simply juxtaposed.
    /// A single expression is returned as-is; anything else (including
    /// an empty source) is wrapped in a `Compound`.
    pub(crate) fn parse(mut self) -> ParseResult<Node> {
        let mut nodes = Vec::new();

        while let Some(ch) = self.cursor.peek() {
            if ch == ';' || ch == ',' {
                self.cursor.advance();
                continue;
            }

            match self.parse_expression()? {
                Some(node) => nodes.push(node),
                None => {
                    if let Some(ch) = self.cursor.peek() {
                        return Err(ParseError::unexpected_character(
                            format!("Unexpected \"{}\"", ch),
                            self.cursor.index(),
                        ));
                    }
                }
            }
        }

        trace!(target: "pawx_expr", "parsed {} top-level expression(s)", nodes.len());

        if nodes.len() == 1 {
            if let Some(node) = nodes.pop() {
                return Ok(node);
            }
        }

        Ok(Node::Compound { body: nodes })
    }
}
