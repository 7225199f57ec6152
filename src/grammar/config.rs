/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     grammar/config.rs
 * Purpose:  JSON-loadable grammar descriptions.
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

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grammar::{CharClassifier, Grammar, OperatorTable};

/// A declarative description of a [`Grammar`].
///
/// Hosts that keep their expression dialect in a settings file describe
/// it here instead of calling the registration methods one by one:
///
/// ```json
/// {
///   "binary_ops": { "^": 10, "and": 2 },
///   "unary_ops": ["typeof"],
///   "remove_binary_ops": [">>>"],
///   "identifier_chars": "@#",
///   "this_keyword": "self"
/// }
/// ```
///
/// With `extend_defaults` (the default) the description is applied on
/// top of the built-in operator tables; otherwise it starts from empty
/// tables. Removals are applied after additions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    pub extend_defaults: bool,
    pub unary_ops: Vec<String>,
    pub binary_ops: IndexMap<String, i32>,
    pub remove_unary_ops: Vec<String>,
    pub remove_binary_ops: Vec<String>,
    pub identifier_chars: String,
    pub this_keyword: Option<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            extend_defaults: true,
            unary_ops: Vec::new(),
            binary_ops: IndexMap::new(),
            remove_unary_ops: Vec::new(),
            remove_binary_ops: Vec::new(),
            identifier_chars: String::new(),
            this_keyword: None,
        }
    }
}

impl GrammarConfig {
    /// Builds the grammar this description denotes.
    pub fn into_grammar(self) -> Result<Grammar, ConfigError> {
        let empty_op = self
            .unary_ops
            .iter()
            .chain(self.binary_ops.keys())
            .any(|op| op.is_empty());
        if empty_op {
            return Err(ConfigError::EmptyOperator);
        }

        let mut grammar = if self.extend_defaults {
            Grammar::default()
        } else {
            Grammar {
                operators: OperatorTable::empty(),
                classifier: CharClassifier::new(),
                ..Grammar::default()
            }
        };

        for op in self.unary_ops {
            grammar.add_unary_op(op);
        }
        for (op, precedence) in self.binary_ops {
            grammar.add_binary_op(op, precedence);
        }
        for op in &self.remove_unary_ops {
            grammar.remove_unary_op(op);
        }
        for op in &self.remove_binary_ops {
            grammar.remove_binary_op(op);
        }

        grammar.add_identifier_chars(&self.identifier_chars);

        if let Some(keyword) = self.this_keyword {
            grammar.set_this_keyword(keyword);
        }

        Ok(grammar)
    }
}
