/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/postfix.rs
 * Purpose:  Variables, groups and member/call chains.
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
use crate::grammar::classifier::is_space;
use crate::parser::parser::{Operand, ParseResult, Parser};

impl<'g> Parser<'g> {
    /// variable → ( identifier | "(" expression ")" ) postfix*
    ///
    /// The postfix chain is left-associative: `a.b(c)[d]` is
    /// `((a.b)(c))[d]`. Spaces are allowed between links.
    pub(crate) fn scan_variable(&mut self) -> ParseResult<Operand> {
        let mut node = if self.cursor.peek_is('(') {
            self.parse_group()?
        } else {
            match self.scan_identifier()? {
                Operand::Node(node) => node,
                key_value => return Ok(key_value),
            }
        };

        self.cursor.skip_spaces();

        loop {
            match self.cursor.peek() {
                Some('.') => {
                    self.cursor.advance();
                    self.cursor.skip_spaces();
                    let property = self.scan_identifier_name()?;
                    node = Node::member(node, Node::identifier(property), false);
                }
                Some('[') => {
                    self.cursor.advance();
                    let property = self.require_expression()?;
                    self.cursor.skip_spaces();
                    if !self.cursor.eat(']') {
                        return Err(ParseError::unclosed("Unclosed [", self.cursor.index()));
                    }
                    node = Node::member(node, property, true);
                }
                Some('(') => {
                    self.cursor.advance();
                    let arguments = self.parse_arguments(')')?;
                    node = Node::call(node, arguments);
                }
                _ => break,
            }

            self.cursor.skip_spaces();
        }

        Ok(Operand::Node(node))
    }

    /// "(" expression ")"
    fn parse_group(&mut self) -> ParseResult<Node> {
        self.cursor.advance();
        let node = self.require_expression()?;

        self.cursor.skip_spaces();
        if !self.cursor.eat(')') {
            return Err(ParseError::unclosed("Unclosed (", self.cursor.index()));
        }

        Ok(node)
    }

    /// Whether a `!suffix` is glued directly onto what was just scanned.
    fn bang_suffix_follows(&self) -> bool {
        let classifier = self.grammar.classifier();
        !self.cursor.previous().is_some_and(is_space)
            && self.cursor.peek_is('!')
            && self
                .cursor
                .peek_at(1)
                .is_some_and(|ch| classifier.is_identifier_start(ch))
    }

    /// `base!suffix` on an identifier.
    ///
    /// The result stays an `Identifier` named `base!suffix`, with `object`
    /// and `property` holding `base` and `suffix` as identifiers. Consumers
    /// rely on this shape, so it is not a `MemberExpression`.
    pub(crate) fn attach_bang_suffix(&mut self, node: Node) -> ParseResult<Node> {
        let base = match &node {
            Node::Identifier { name, object: None, .. } if self.bang_suffix_follows() => {
                name.clone()
            }
            _ => return Ok(node),
        };

        self.cursor.advance();
        let suffix = self.scan_identifier_name()?;

        Ok(Node::Identifier {
            name: format!("{}!{}", base, suffix),
            object: Some(Box::new(Node::identifier(base))),
            property: Some(Box::new(Node::identifier(suffix))),
        })
    }

    /// `'base'!suffix` on a single-quoted string. The name keeps the
    /// quotes; `object` holds the unquoted text.
    pub(crate) fn attach_string_bang_suffix(&mut self, literal: Node) -> ParseResult<Node> {
        let (value, raw) = match &literal {
            Node::Literal { value, raw } if self.bang_suffix_follows() => {
                (value.to_string(), raw.clone())
            }
            _ => return Ok(literal),
        };

        self.cursor.advance();
        let suffix = self.scan_identifier_name()?;

        Ok(Node::Identifier {
            name: format!("{}!{}", raw, suffix),
            object: Some(Box::new(Node::identifier(value))),
            property: Some(Box::new(Node::identifier(suffix))),
        })
    }
}
