/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     ast/node.rs
 * Purpose:  Expression syntax tree nodes and their ESTree wire format.
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

use crate::ast::literal::LiteralValue;

/// A node of a parsed expression.
///
/// Variants map one-to-one onto the ESTree-style node tags that
/// downstream evaluators pattern-match on. The tag is written into the
/// `type` field on serialization, so
///
/// ```text
/// Node::Binary { operator: "+", .. }
/// ```
///
/// becomes
///
/// ```text
/// {"type":"BinaryExpression","operator":"+","left":{..},"right":{..}}
/// ```
///
/// Trees are plain owned values: nothing inside a node refers back to the
/// grammar that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Several top-level expressions separated by `;` or `,`.
    Compound { body: Vec<Node> },

    /// A name. `object`/`property` are only present for the `base!suffix`
    /// extension, where they hold the two halves as identifiers.
    Identifier {
        name: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        object: Option<Box<Node>>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        property: Option<Box<Node>>,
    },

    /// `raw` is the exact source spelling.
    Literal { value: LiteralValue, raw: String },

    #[serde(rename = "ThisExpression")]
    This,

    /// `a.b` (`computed == false`) or `a[b]` (`computed == true`).
    #[serde(rename = "MemberExpression")]
    Member {
        computed: bool,
        object: Box<Node>,
        property: Box<Node>,
    },

    #[serde(rename = "CallExpression")]
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    #[serde(rename = "UnaryExpression")]
    Unary {
        operator: String,
        argument: Box<Node>,
        prefix: bool,
    },

    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Same shape as `Binary`; kept apart because `&&` and `||`
    /// short-circuit.
    #[serde(rename = "LogicalExpression")]
    Logical {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    #[serde(rename = "ConditionalExpression")]
    Conditional {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },

    #[serde(rename = "ArrayExpression")]
    Array { elements: Vec<Node> },

    /// Named arguments (`f(a=1, b=2)`, `x[a=1]`), in encounter order.
    #[serde(rename = "KeyValueExpression")]
    KeyValues { keys: IndexMap<String, KeyValueEntry> },
}

/// The value(s) bound to one key of a `KeyValueExpression`.
///
/// A key seen once maps straight to its node; a repeated key collects
/// every value in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValueEntry {
    Single(Box<Node>),
    Many(Vec<Node>),
}

impl KeyValueEntry {
    /// Adds another value for the same key, collapsing into `Many`.
    pub fn push(&mut self, value: Node) {
        match self {
            KeyValueEntry::Many(values) => values.push(value),
            KeyValueEntry::Single(first) => {
                let first = std::mem::replace(first, Box::new(Node::This));
                *self = KeyValueEntry::Many(vec![*first, value]);
            }
        }
    }

    /// All values bound to the key, in encounter order.
    pub fn values(&self) -> Vec<&Node> {
        match self {
            KeyValueEntry::Single(node) => vec![node.as_ref()],
            KeyValueEntry::Many(nodes) => nodes.iter().collect(),
        }
    }
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier {
            name: name.into(),
            object: None,
            property: None,
        }
    }

    pub fn number(value: f64, raw: impl Into<String>) -> Self {
        Node::Literal {
            value: LiteralValue::Number(value),
            raw: raw.into(),
        }
    }

    pub fn string(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Node::Literal {
            value: LiteralValue::String(value.into()),
            raw: raw.into(),
        }
    }

    pub fn unary(operator: impl Into<String>, argument: Node) -> Self {
        Node::Unary {
            operator: operator.into(),
            argument: Box::new(argument),
            prefix: true,
        }
    }

    /// Builds a binary node, or a logical one for `&&` and `||`.
    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        let operator = operator.into();
        let left = Box::new(left);
        let right = Box::new(right);

        if operator == "&&" || operator == "||" {
            Node::Logical { operator, left, right }
        } else {
            Node::Binary { operator, left, right }
        }
    }

    pub fn member(object: Node, property: Node, computed: bool) -> Self {
        Node::Member {
            computed,
            object: Box::new(object),
            property: Box::new(property),
        }
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn conditional(test: Node, consequent: Node, alternate: Node) -> Self {
        Node::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    /// The ESTree tag written into the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Compound { .. } => "Compound",
            Node::Identifier { .. } => "Identifier",
            Node::Literal { .. } => "Literal",
            Node::This => "ThisExpression",
            Node::Member { .. } => "MemberExpression",
            Node::Call { .. } => "CallExpression",
            Node::Unary { .. } => "UnaryExpression",
            Node::Binary { .. } => "BinaryExpression",
            Node::Logical { .. } => "LogicalExpression",
            Node::Conditional { .. } => "ConditionalExpression",
            Node::Array { .. } => "ArrayExpression",
            Node::KeyValues { .. } => "KeyValueExpression",
        }
    }

    /// The name of an `Identifier`, if this is one.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Node::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Converts the tree into its JSON wire form.
    pub fn to_json(&self) -> serde_json::Value {
        // Every field is a string, bool, number, sequence or string-keyed
        // map, so conversion cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn logical_operators_get_their_own_tag() {
        let node = Node::binary("&&", Node::identifier("a"), Node::identifier("b"));
        assert_eq!(node.type_name(), "LogicalExpression");

        let node = Node::binary("&", Node::identifier("a"), Node::identifier("b"));
        assert_eq!(node.type_name(), "BinaryExpression");
    }

    #[test]
    fn repeated_keys_collapse_into_a_sequence() {
        let mut entry = KeyValueEntry::Single(Box::new(Node::number(1.0, "1")));
        entry.push(Node::number(2.0, "2"));
        entry.push(Node::number(3.0, "3"));

        let raws: Vec<_> = entry
            .values()
            .into_iter()
            .map(|n| match n {
                Node::Literal { raw, .. } => raw.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(raws, ["1", "2", "3"]);
    }

    #[test]
    fn serializes_estree_field_sets() {
        let node = Node::member(Node::This, Node::identifier("x"), false);
        assert_eq!(
            node.to_json(),
            json!({
                "type": "MemberExpression",
                "computed": false,
                "object": { "type": "ThisExpression" },
                "property": { "type": "Identifier", "name": "x" }
            })
        );
    }

    #[test]
    fn unary_nodes_are_always_prefix() {
        let node = Node::unary("-", Node::number(1.0, "1"));
        assert_eq!(
            node.to_json(),
            json!({
                "type": "UnaryExpression",
                "operator": "-",
                "argument": { "type": "Literal", "value": 1.0, "raw": "1" },
                "prefix": true
            })
        );
    }
}
