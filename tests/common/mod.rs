#![allow(dead_code)]

use pawx_expr::{LiteralValue, Node};

pub fn id(name: &str) -> Node {
    Node::identifier(name)
}

/// A numeric literal whose raw spelling is the shortest form of `value`.
pub fn num(value: f64) -> Node {
    Node::number(value, value.to_string())
}

pub fn string(value: &str, raw: &str) -> Node {
    Node::string(value, raw)
}

pub fn boolean(value: bool) -> Node {
    Node::Literal {
        value: LiteralValue::Bool(value),
        raw: value.to_string(),
    }
}

/// A trivial evaluator over numeric literals and arithmetic operators.
pub fn eval(node: &Node) -> f64 {
    match node {
        Node::Literal { value, .. } => value
            .as_number()
            .unwrap_or_else(|| panic!("not a number: {value}")),
        Node::Unary {
            operator, argument, ..
        } => match operator.as_str() {
            "-" => -eval(argument),
            "+" => eval(argument),
            other => panic!("unsupported unary operator {other}"),
        },
        Node::Binary {
            operator,
            left,
            right,
        } => {
            let (l, r) = (eval(left), eval(right));
            match operator.as_str() {
                "+" => l + r,
                "-" => l - r,
                "*" => l * r,
                "/" => l / r,
                "%" => l % r,
                other => panic!("unsupported binary operator {other}"),
            }
        }
        other => panic!("cannot evaluate {other:?}"),
    }
}
