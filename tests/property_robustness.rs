mod common;

use common::eval;
use pawx_expr::{parse, ExpressionParser};
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 128;

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%")]
}

fn precedence(op: &str) -> u8 {
    match op {
        "+" | "-" => 9,
        _ => 10,
    }
}

fn apply(op: &str, l: f64, r: f64) -> f64 {
    match op {
        "+" => l + r,
        "-" => l - r,
        "*" => l * r,
        "/" => l / r,
        _ => l % r,
    }
}

proptest! {
    #[test]
    fn lossy_utf8_input_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = parse(&input);
    }

    #[test]
    fn arbitrary_input_never_panics(source in "[a-z0-9 ()\\[\\].,;?:!~+*/%<>=&|^'\"-]{0,48}") {
        let _ = parse(&source);
    }

    #[test]
    fn arbitrary_input_never_panics_with_custom_identifier_chars(source in "[a-c0-2 ?:@!=().,'-]{0,32}") {
        let parser = ExpressionParser::new().with_identifier_chars("?:@");
        let _ = parser.parse(&source);
    }

    #[test]
    fn parsing_is_idempotent(source in "[a-z0-9 ().,?:+*-]{0,32}") {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn three_operands_follow_precedence(
        a in 1u32..100,
        b in 1u32..100,
        c in 1u32..100,
        op1 in operator(),
        op2 in operator(),
    ) {
        let (a, b, c) = (a as f64, b as f64, c as f64);
        let expected = if precedence(op2) > precedence(op1) {
            apply(op1, a, apply(op2, b, c))
        } else {
            apply(op2, apply(op1, a, b), c)
        };

        let source = format!("{a} {op1} {b}{op2}{c}");
        let node = parse(&source).unwrap();
        prop_assert_eq!(eval(&node), expected);
    }

    #[test]
    fn grouping_overrides_precedence(
        a in 1u32..100,
        b in 1u32..100,
        c in 1u32..100,
        op1 in operator(),
        op2 in operator(),
    ) {
        let (a, b, c) = (a as f64, b as f64, c as f64);
        let expected = apply(op1, a, apply(op2, b, c));

        let source = format!("{a} {op1} ({b} {op2} {c})");
        let node = parse(&source).unwrap();
        prop_assert_eq!(eval(&node), expected);
    }
}
