/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     parser/binary.rs
 * Purpose:  Operator-precedence parsing of binary expressions.
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
use crate::grammar::classifier::is_space;
use crate::parser::cursor::Checkpoint;
use crate::parser::parser::{ParseResult, Parser};

/// Operands and pending operators of a binary expression.
///
/// Always holds exactly one more operand than operators. Operators on the
/// stack have strictly increasing precedence from bottom to top once a
/// new operator has been pushed.
struct OperatorStack {
    operands: Vec<Node>,
    operators: Vec<(String, i32)>,
}

impl OperatorStack {
    fn new(left: Node, operator: String, precedence: i32, right: Node) -> Self {
        Self {
            operands: vec![left, right],
            operators: vec![(operator, precedence)],
        }
    }

    /// Combines the two topmost operands with the topmost operator while
    /// that operator binds at least as tightly as `precedence`. Equal
    /// precedence reduces, which makes every operator left-associative.
    fn reduce_for(&mut self, precedence: i32) {
        while self
            .operators
            .last()
            .is_some_and(|(_, top)| precedence <= *top)
        {
            self.reduce();
        }
    }

    fn reduce(&mut self) {
        if let (Some(right), Some((operator, _)), Some(left)) =
            (self.operands.pop(), self.operators.pop(), self.operands.pop())
        {
            self.operands.push(Node::binary(operator, left, right));
        }
    }

    fn push(&mut self, operator: String, precedence: i32, operand: Node) {
        self.operators.push((operator, precedence));
        self.operands.push(operand);
    }

    /// Folds whatever is left from the top down into one node.
    fn finish(mut self) -> Option<Node> {
        while !self.operators.is_empty() {
            self.reduce();
        }
        self.operands.pop()
    }
}

impl<'g> Parser<'g> {
    /// Consumes the longest registered binary operator at the cursor.
    fn scan_binary_op(&mut self) -> Option<(String, i32)> {
        self.cursor.skip_spaces();

        let operators = self.grammar.operators();
        let lookahead = self.cursor.lookahead(operators.max_binary_len());
        let (operator, precedence) = operators.longest_binary_prefix(&lookahead)?;

        self.cursor.advance_by(operator.chars().count());
        Some((operator, precedence))
    }

    /// binary → token ( binary-op token )*
    ///
    /// Precedences come from the grammar's operator table, so operators
    /// registered at runtime slot straight into the right level.
    pub(crate) fn parse_binary(&mut self) -> ParseResult<Option<Node>> {
        let grammar = self.grammar;
        let classifier = grammar.classifier();

        self.cursor.skip_spaces();
        let start = self.cursor.checkpoint();

        let Some(left) = self.parse_token()? else {
            return Ok(None);
        };
        let left_isolated = self.cursor.previous().is_some_and(is_space);

        let Some((operator, precedence)) = self.scan_binary_op() else {
            return self.split_glued_ternary(left, start).map(Some);
        };

        // An operator made of identifier characters glued on both sides,
        // as in `(a)andb` with `and` registered, reads as part of one word
        // unless whitespace separated it from the left operand.
        if let Node::Identifier { name, .. } = &left {
            let joins_left = operator
                .chars()
                .next()
                .is_some_and(|ch| classifier.is_identifier_part(ch));
            let joins_right = self
                .cursor
                .peek()
                .is_some_and(|ch| classifier.is_identifier_part(ch));

            if joins_left && joins_right && !left_isolated {
                let name = format!("{}{}", name, operator);
                let rest = self.scan_identifier_name()?;
                trace!(target: "pawx_expr", "operator {:?} merged into identifier {:?}", operator, name);
                return Ok(Some(Node::identifier(name + &rest)));
            }
        }

        let right = self.require_operand(&operator)?;
        let mut stack = OperatorStack::new(left, operator, precedence, right);

        loop {
            let Some((operator, precedence)) = self.scan_binary_op() else {
                break;
            };

            // A non-positive operator after the first one is swallowed and
            // ends the expression, so it behaves like a separator.
            if precedence <= 0 {
                trace!(target: "pawx_expr", "operator {:?} ends the expression", operator);
                break;
            }

            stack.reduce_for(precedence);

            let operand = self.require_operand(&operator)?;
            stack.push(operator, precedence, operand);
        }

        Ok(stack.finish())
    }

    /// Recovers a ternary whose branches were swallowed by the identifier
    /// scanner.
    ///
    /// When `?` is a configured identifier character, `a?b :c` scans as
    /// the identifier `a?b`. If the text after the last `?` holds no `:`
    /// (a trailing one aside), the identifier is cut back to the part
    /// before the `?` and the cursor is put on the `?`, so the ternary is
    /// parsed normally. A trailing `:` is only split off when an
    /// alternate actually follows it; otherwise the identifier stands.
    fn split_glued_ternary(&mut self, left: Node, start: Checkpoint) -> ParseResult<Node> {
        let Some(name) = left.as_identifier().map(str::to_string) else {
            return Ok(left);
        };
        let Some(question) = name.rfind('?') else {
            return Ok(left);
        };

        let mut after = name[question..].chars();
        after.next_back();
        if after.as_str().contains(':') {
            return Ok(left);
        }

        if name.ends_with(':') {
            let resume = self.cursor.checkpoint();
            let in_ternary = self.in_ternary;

            let alternate = self.parse_expression();

            self.cursor.restore(resume);
            self.in_ternary = in_ternary;

            if !matches!(alternate, Ok(Some(_))) {
                trace!(target: "pawx_expr", "no alternate after {:?}, keeping identifier", name);
                return Ok(left);
            }
        }

        let test = &name[..question];
        trace!(target: "pawx_expr", "splitting {:?} at '?'", name);
        self.cursor.restore(start.advanced_by(test.chars().count()));

        Ok(Node::identifier(test))
    }
}
