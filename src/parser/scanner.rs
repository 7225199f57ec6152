/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/scanner.rs
 * Purpose:  Scanning primitives: identifiers, strings and numbers.
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

use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use crate::ast::Node;
use crate::error::ParseError;
use crate::parser::parser::{Operand, ParseResult, Parser};

/// A plain decimal numeral, as JavaScript's `Number()` accepts it.
const DECIMAL_NUMERAL: &str = r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";

/// Whether `text` is a decimal numeral such as `12`, `1.5` or `2e10`.
///
/// Only reachable when digits are configured as identifier characters:
/// a word like `12` then scans as an identifier and is turned back into
/// a number.
pub(crate) fn is_decimal_numeral(text: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(DECIMAL_NUMERAL).expect("decimal numeral pattern is valid"))
        .is_match(text)
}

impl<'g> Parser<'g> {
    /// Scans the raw text of an identifier.
    ///
    /// The first character must be able to start an identifier; scanning
    /// continues over identifier-part characters.
    pub(crate) fn scan_identifier_name(&mut self) -> ParseResult<String> {
        let grammar = self.grammar;
        let classifier = grammar.classifier();
        let start = self.cursor.checkpoint();

        match self.cursor.peek() {
            Some(ch) if classifier.is_identifier_start(ch) => {
                self.cursor.advance();
            }
            Some(ch) => {
                return Err(ParseError::unexpected_character(
                    format!("Unexpected {}", ch),
                    self.cursor.index(),
                ));
            }
            None => {
                return Err(ParseError::unexpected_character(
                    "Unexpected end of expression",
                    self.cursor.index(),
                ));
            }
        }

        while self
            .cursor
            .peek()
            .is_some_and(|ch| classifier.is_identifier_part(ch))
        {
            self.cursor.advance();
        }

        Ok(self.cursor.slice_from(start))
    }

    /// Scans an identifier, keyword or `name=value` pair.
    ///
    /// - `true`, `false`, `null` become literals
    /// - the `this` keyword becomes `ThisExpression`
    /// - a name directly followed by a single `=` is a named argument
    ///   whose value is a full expression (`==` is left alone)
    pub(crate) fn scan_identifier(&mut self) -> ParseResult<Operand> {
        let name = self.scan_identifier_name()?;

        if self.cursor.peek_is('=') && self.cursor.peek_at(1) != Some('=') {
            self.cursor.advance();
            trace!(target: "pawx_expr", "named argument {:?}", name);

            let value = self.parse_expression()?.ok_or_else(|| {
                ParseError::expected_expression(
                    format!("Expected expression after {}=", name),
                    self.cursor.index(),
                )
            })?;

            return Ok(Operand::KeyValue { key: name, value });
        }

        Ok(Operand::Node(self.grammar.classify_word(name)))
    }

    /// Scans a `'single'` or `"double"` quoted string.
    ///
    /// Recognized escapes: `\n \r \t \b \f \v \\`. Any other escaped
    /// character stands for itself (`\'` is a quote, `\z` is `z`).
    pub(crate) fn scan_string(&mut self) -> ParseResult<Node> {
        let start = self.cursor.checkpoint();
        let Some(quote) = self.cursor.advance() else {
            return Err(ParseError::unexpected_character(
                "Unexpected end of expression",
                self.cursor.index(),
            ));
        };

        let mut value = String::new();

        loop {
            match self.cursor.advance() {
                None => {
                    return Err(ParseError::unclosed(
                        format!("Unclosed quote after \"{}\"", value),
                        self.cursor.index(),
                    )
                    .with_help(format!("add a closing {} to end the string", quote)));
                }
                Some(ch) if ch == quote => break,
                Some('\\') => match self.cursor.advance() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('b') => value.push('\u{8}'),
                    Some('f') => value.push('\u{c}'),
                    Some('v') => value.push('\u{b}'),
                    Some(other) => value.push(other),
                    None => {}
                },
                Some(ch) => value.push(ch),
            }
        }

        Ok(Node::string(value, self.cursor.slice_from(start)))
    }

    /// Scans a numeral: digits, an optional fraction, an optional exponent.
    ///
    /// A few malformed shapes are not numbers at all:
    /// - `1ebit` (exponent marker without digits) is the identifier `1ebit`
    /// - `123abc` is the identifier `123abc`
    /// - `1.5abc` and `1.2.3` are errors
    pub(crate) fn scan_number(&mut self) -> ParseResult<Node> {
        let grammar = self.grammar;
        let classifier = grammar.classifier();
        let start = self.cursor.checkpoint();

        self.eat_digits();
        if self.cursor.eat('.') {
            self.eat_digits();
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            self.eat_digits();

            if !self.cursor.previous().is_some_and(|ch| ch.is_ascii_digit()) {
                let numeral = self.cursor.slice_from(start);
                if !numeral.chars().all(|ch| classifier.is_identifier_part(ch)) {
                    let next = self.cursor.peek().map(String::from).unwrap_or_default();
                    return Err(ParseError::malformed_number(
                        format!("Expected exponent ({}{})", numeral, next),
                        self.cursor.index(),
                    ));
                }

                trace!(target: "pawx_expr", "numeral {:?} continues as an identifier", numeral);
                let rest = self.scan_identifier_name()?;
                return Ok(Node::identifier(numeral + &rest));
            }
        }

        let numeral = self.cursor.slice_from(start);

        match self.cursor.peek() {
            Some(':') if self.in_ternary => {}
            Some(ch) if classifier.is_identifier_start(ch) => {
                if !numeral.chars().all(|c| classifier.is_identifier_part(c)) {
                    return Err(ParseError::malformed_number(
                        format!("Variable names cannot start with a number ({}{})", numeral, ch),
                        self.cursor.index(),
                    ));
                }

                let rest = self.scan_identifier_name()?;
                return Ok(Node::identifier(numeral + &rest));
            }
            Some('.') => {
                return Err(ParseError::malformed_number(
                    "Unexpected period",
                    self.cursor.index(),
                ));
            }
            _ => {}
        }

        let value: f64 = numeral.parse().map_err(|_| {
            ParseError::malformed_number(format!("Expected number ({})", numeral), start.index())
        })?;

        Ok(Node::number(value, numeral))
    }

    fn eat_digits(&mut self) {
        while self.cursor.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.cursor.advance();
        }
    }
}
