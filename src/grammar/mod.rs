/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     grammar/mod.rs
 * Purpose:  Per-parser grammar configuration (operators, identifier characters, keywords).
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

/// Identifier character classification.
pub mod classifier;

/// Serializable grammar descriptions.
pub mod config;

/// Unary/binary operator registry.
pub mod operators;

use crate::ast::{LiteralValue, Node};
use crate::error::ConfigError;

pub use classifier::CharClassifier;
pub use config::GrammarConfig;
pub use operators::OperatorTable;

/// The keyword that produces a `ThisExpression` unless reconfigured.
pub const DEFAULT_THIS_KEYWORD: &str = "this";

/// Everything a parser needs to know about the expression language.
///
/// A `Grammar` is an ordinary value: clone it, tweak the clone, and hand
/// each parser its own copy. Changes to one grammar never leak into
/// another, so two parsers with different operator sets can be used side
/// by side (or from different threads).
///
/// # Example
/// ```
/// use pawx_expr::Grammar;
///
/// let grammar = Grammar::default()
///     .with_binary_op("^", 10)
///     .with_identifier_chars("@");
///
/// assert_eq!(grammar.operators().precedence("^"), Some(10));
/// assert!(grammar.classifier().is_identifier_start('@'));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    operators: OperatorTable,
    classifier: CharClassifier,
    this_keyword: String,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            operators: OperatorTable::default(),
            classifier: CharClassifier::default(),
            this_keyword: DEFAULT_THIS_KEYWORD.to_string(),
        }
    }
}

impl Grammar {
    /// Loads a grammar from a JSON description (see [`GrammarConfig`]).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GrammarConfig = serde_json::from_str(json)?;
        config.into_grammar()
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }

    pub fn this_keyword(&self) -> &str {
        &self.this_keyword
    }

    // ------------------------------------------------------------------
    // In-place registration
    // ------------------------------------------------------------------

    pub fn add_unary_op(&mut self, op: impl Into<String>) -> &mut Self {
        self.operators.add_unary(op);
        self
    }

    pub fn remove_unary_op(&mut self, op: &str) -> &mut Self {
        self.operators.remove_unary(op);
        self
    }

    pub fn add_binary_op(&mut self, op: impl Into<String>, precedence: i32) -> &mut Self {
        self.operators.add_binary(op, precedence);
        self
    }

    pub fn remove_binary_op(&mut self, op: &str) -> &mut Self {
        self.operators.remove_binary(op);
        self
    }

    pub fn add_identifier_chars(&mut self, chars: &str) -> &mut Self {
        self.classifier.add_chars(chars);
        self
    }

    pub fn remove_identifier_chars(&mut self, chars: &str) -> &mut Self {
        self.classifier.remove_chars(chars);
        self
    }

    pub fn set_this_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.this_keyword = keyword.into();
        self
    }

    // ------------------------------------------------------------------
    // Builder-style registration
    // ------------------------------------------------------------------

    pub fn with_unary_op(mut self, op: impl Into<String>) -> Self {
        self.add_unary_op(op);
        self
    }

    pub fn without_unary_op(mut self, op: &str) -> Self {
        self.remove_unary_op(op);
        self
    }

    pub fn with_binary_op(mut self, op: impl Into<String>, precedence: i32) -> Self {
        self.add_binary_op(op, precedence);
        self
    }

    pub fn without_binary_op(mut self, op: &str) -> Self {
        self.remove_binary_op(op);
        self
    }

    pub fn with_identifier_chars(mut self, chars: &str) -> Self {
        self.add_identifier_chars(chars);
        self
    }

    pub fn without_identifier_chars(mut self, chars: &str) -> Self {
        self.remove_identifier_chars(chars);
        self
    }

    pub fn with_this_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_this_keyword(keyword);
        self
    }

    /// Turns a scanned word into the node it denotes: a literal keyword,
    /// the `this` keyword, or a plain identifier.
    pub(crate) fn classify_word(&self, word: String) -> Node {
        let literal = match word.as_str() {
            "true" => Some(LiteralValue::Bool(true)),
            "false" => Some(LiteralValue::Bool(false)),
            "null" => Some(LiteralValue::Null),
            _ => None,
        };

        if let Some(value) = literal {
            return Node::Literal { value, raw: word };
        }

        if word == self.this_keyword {
            return Node::This;
        }

        Node::identifier(word)
    }
}
