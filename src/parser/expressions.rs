/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/expressions.rs
 * Purpose:  Ternary expressions, operands and named-argument folding.
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

/*
 * Grammar, from loosest to tightest:
 *
 *   expression → binary ( "?" expression ":" expression )?
 *   binary     → token ( binary-op token )*        (see binary.rs)
 *   token      → number | string | array | unary-op token | variable
 *   variable   → ( identifier | "(" expression ")" ) postfix*
 *   postfix    → "." identifier | "[" expression "]" | "(" arguments ")"
 */

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::trace;

use crate::ast::{KeyValueEntry, Node};
use crate::error::ParseError;
use crate::parser::parser::{Operand, ParseResult, Parser};
use crate::parser::scanner::is_decimal_numeral;

impl<'g> Parser<'g> {
    /// expression → binary ( "?" expression ":" expression )?
    ///
    /// Returns `None` when no expression starts at the cursor.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Option<Node>> {
        let Some(test) = self.parse_binary()? else {
            return Ok(None);
        };

        self.cursor.skip_spaces();
        if !self.cursor.eat('?') {
            return Ok(Some(test));
        }

        self.in_ternary = true;
        let consequent = self.require_expression()?;

        self.cursor.skip_spaces();
        if !self.cursor.eat(':') {
            return Err(ParseError::expected_colon(self.cursor.index()));
        }

        let alternate = self.require_expression()?;
        self.in_ternary = false;

        Ok(Some(Node::conditional(test, consequent, alternate)))
    }

    /// Like `parse_expression`, but an absent expression is an error.
    pub(crate) fn require_expression(&mut self) -> ParseResult<Node> {
        self.parse_expression()?.ok_or_else(|| {
            ParseError::expected_expression("Expected expression", self.cursor.index())
        })
    }

    /// Parses one operand of a binary expression: a literal, an array, a
    /// prefix-unary expression or a variable with its postfix chain.
    pub(crate) fn parse_token(&mut self) -> ParseResult<Option<Node>> {
        let grammar = self.grammar;
        let classifier = grammar.classifier();

        self.cursor.skip_spaces();
        let Some(ch) = self.cursor.peek() else {
            return Ok(None);
        };

        let operand = if ch.is_ascii_digit() || ch == '.' {
            let start = self.cursor.checkpoint();
            match self.scan_number() {
                Ok(node) => return Ok(Some(node)),
                Err(err) if classifier.is_identifier_start(ch) => {
                    trace!(target: "pawx_expr", "retrying {:?} as a variable: {}", ch, err);
                    self.cursor.restore(start);
                    self.scan_variable()?
                }
                Err(err) => return Err(err),
            }
        } else if ch == '\'' || ch == '"' {
            let literal = self.scan_string()?;
            if ch == '\'' {
                return self.attach_string_bang_suffix(literal).map(Some);
            }
            return Ok(Some(literal));
        } else if classifier.is_identifier_start(ch) || ch == '(' {
            match self.scan_variable()? {
                Operand::Node(node) => Operand::Node(self.attach_bang_suffix(node)?),
                key_value => key_value,
            }
        } else if ch == '[' {
            return self.parse_array().map(Some);
        } else {
            return self.parse_prefix_unary();
        };

        match operand {
            Operand::Node(Node::Identifier { name, object: None, .. })
                if grammar.operators().is_unary(&name) =>
            {
                let argument = self.require_operand(&name)?;
                Ok(Some(Node::unary(name, argument)))
            }
            Operand::Node(Node::Identifier { name, object: None, .. })
                if is_decimal_numeral(&name) =>
            {
                let value = name.parse().unwrap_or(f64::NAN);
                Ok(Some(Node::number(value, name)))
            }
            Operand::Node(node) => Ok(Some(node)),
            Operand::KeyValue { key, value } => self.fold_key_values(key, value).map(Some),
        }
    }

    /// The operand following an operator; an absent one is an error.
    pub(crate) fn require_operand(&mut self, operator: &str) -> ParseResult<Node> {
        self.parse_token()?.ok_or_else(|| {
            ParseError::expected_expression(
                format!("Expected expression after {}", operator),
                self.cursor.index(),
            )
        })
    }

    /// Symbolic prefix operators (`-x`, `!x`, ...), longest match first.
    fn parse_prefix_unary(&mut self) -> ParseResult<Option<Node>> {
        let operators = self.grammar.operators();
        let lookahead = self.cursor.lookahead(operators.max_unary_len());

        let Some(operator) = operators.longest_unary_prefix(&lookahead) else {
            return Ok(None);
        };

        self.cursor.advance_by(operator.chars().count());
        let argument = self.require_operand(&operator)?;

        Ok(Some(Node::unary(operator, argument)))
    }

    /// Folds a run of `name=value` pairs into one `KeyValueExpression`.
    ///
    /// Pairs may be separated by commas, spaces or both. A repeated key
    /// collects its values in order. The run ends at the first thing that
    /// is not another pair; the cursor is left in front of it.
    fn fold_key_values(&mut self, key: String, value: Node) -> ParseResult<Node> {
        let grammar = self.grammar;
        let classifier = grammar.classifier();

        let mut keys: IndexMap<String, KeyValueEntry> = IndexMap::new();
        let (mut key, mut value) = (key, value);

        loop {
            match keys.entry(key) {
                Entry::Occupied(mut slot) => slot.get_mut().push(value),
                Entry::Vacant(slot) => {
                    slot.insert(KeyValueEntry::Single(Box::new(value)));
                }
            }

            self.cursor.skip_spaces();
            self.cursor.eat(',');
            self.cursor.skip_spaces();

            if !self
                .cursor
                .peek()
                .is_some_and(|ch| classifier.is_identifier_start(ch))
            {
                break;
            }

            let next = self.cursor.checkpoint();
            match self.scan_variable()? {
                Operand::KeyValue { key: k, value: v } => {
                    key = k;
                    value = v;
                }
                Operand::Node(_) => {
                    trace!(target: "pawx_expr", "named arguments end at {}", next.index());
                    self.cursor.restore(next);
                    break;
                }
            }
        }

        Ok(Node::KeyValues { keys })
    }
}
