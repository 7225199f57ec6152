/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/mod.rs
 * Purpose:  Root module for the PAWX expression parser.
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

/// Parse state and the top-level driver:
/// - Owns the per-parse `Parser` struct
/// - Splits the source on top-level `;` / `,`
pub(crate) mod parser;

/// Character cursor with explicit checkpoints.
pub(crate) mod cursor;

/// Scanning primitives:
/// - identifiers and named arguments
/// - quoted strings
/// - numerals (and the malformed shapes that turn into identifiers)
mod scanner;

/// Expression-level parsing:
/// - ternary → binary → token
/// - prefix-unary operators
/// - named-argument folding
mod expressions;

/// Operator-precedence engine for binary expressions.
mod binary;

/// Groups, member access, calls and the `!` suffix extension.
mod postfix;

/// Argument lists and array literals.
mod arguments;

use log::trace;

use crate::ast::Node;
use crate::error::ParseError;
use crate::grammar::Grammar;

/// A parser for one expression dialect.
///
/// Each instance owns its [`Grammar`], so registering an operator on one
/// parser never affects another.
///
/// # Example
/// ```
/// use pawx_expr::{ExpressionParser, Node};
///
/// let parser = ExpressionParser::new().with_binary_op("^", 10);
/// let node = parser.parse("a ^ b").unwrap();
///
/// assert_eq!(
///     node,
///     Node::binary("^", Node::identifier("a"), Node::identifier("b"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionParser {
    grammar: Grammar,
}

impl ExpressionParser {
    /// A parser using the default grammar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammar(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn grammar_mut(&mut self) -> &mut Grammar {
        &mut self.grammar
    }

    /// Parses `source` into a single node, or a `Compound` when the
    /// source holds zero or several top-level expressions.
    ///
    /// # Errors
    /// The first malformed construct aborts the parse with a
    /// [`ParseError`] locating it; no partial tree is returned.
    pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
        trace!(target: "pawx_expr", "parsing {:?}", source);
        parser::Parser::new(&self.grammar, source).parse()
    }

    // ------------------------------------------------------------------
    // Builder-style grammar extension
    // ------------------------------------------------------------------

    pub fn with_unary_op(mut self, op: impl Into<String>) -> Self {
        self.grammar.add_unary_op(op);
        self
    }

    pub fn without_unary_op(mut self, op: &str) -> Self {
        self.grammar.remove_unary_op(op);
        self
    }

    pub fn with_binary_op(mut self, op: impl Into<String>, precedence: i32) -> Self {
        self.grammar.add_binary_op(op, precedence);
        self
    }

    pub fn without_binary_op(mut self, op: &str) -> Self {
        self.grammar.remove_binary_op(op);
        self
    }

    pub fn with_identifier_chars(mut self, chars: &str) -> Self {
        self.grammar.add_identifier_chars(chars);
        self
    }

    pub fn without_identifier_chars(mut self, chars: &str) -> Self {
        self.grammar.remove_identifier_chars(chars);
        self
    }

    // ------------------------------------------------------------------
    // In-place grammar extension
    // ------------------------------------------------------------------

    pub fn add_unary_op(&mut self, op: impl Into<String>) -> &mut Self {
        self.grammar.add_unary_op(op);
        self
    }

    pub fn remove_unary_op(&mut self, op: &str) -> &mut Self {
        self.grammar.remove_unary_op(op);
        self
    }

    pub fn add_binary_op(&mut self, op: impl Into<String>, precedence: i32) -> &mut Self {
        self.grammar.add_binary_op(op, precedence);
        self
    }

    pub fn remove_binary_op(&mut self, op: &str) -> &mut Self {
        self.grammar.remove_binary_op(op);
        self
    }

    pub fn add_identifier_chars(&mut self, chars: &str) -> &mut Self {
        self.grammar.add_identifier_chars(chars);
        self
    }

    pub fn remove_identifier_chars(&mut self, chars: &str) -> &mut Self {
        self.grammar.remove_identifier_chars(chars);
        self
    }
}

impl From<Grammar> for ExpressionParser {
    fn from(grammar: Grammar) -> Self {
        Self::with_grammar(grammar)
    }
}
