mod common;

use common::{boolean, eval, id, num, string};
use pawx_expr::{parse, LiteralValue, Node};

#[test]
fn constants() {
    assert_eq!(parse("'abc'").unwrap(), string("abc", "'abc'"));
    assert_eq!(parse("\"abc\"").unwrap(), string("abc", "\"abc\""));
    assert_eq!(parse("123").unwrap(), num(123.0));
    assert_eq!(parse("12.3").unwrap(), num(12.3));
    assert_eq!(parse(" true").unwrap(), boolean(true));
    assert_eq!(parse("false ").unwrap(), boolean(false));
    assert_eq!(
        parse("null").unwrap(),
        Node::Literal {
            value: LiteralValue::Null,
            raw: "null".into()
        }
    );
}

#[test]
fn string_escapes_are_decoded() {
    let Node::Literal { value, raw } = parse(r#"'a\tb\'c'"#).unwrap() else {
        panic!("expected a literal");
    };
    assert_eq!(value.as_str(), Some("a\tb'c"));
    assert_eq!(value.as_number(), None);
    assert_eq!(raw, r#"'a\tb\'c'"#);
}

#[test]
fn numbers_keep_their_source_spelling() {
    assert_eq!(parse(" 1.2 ").unwrap(), Node::number(1.2, "1.2"));
    assert_eq!(parse(" .2 ").unwrap(), Node::number(0.2, ".2"));
    assert_eq!(parse("1.").unwrap(), Node::number(1.0, "1."));
    assert_eq!(parse("1e3").unwrap(), Node::number(1000.0, "1e3"));
    assert_eq!(parse("2.5E-1").unwrap(), Node::number(0.25, "2.5E-1"));
}

#[test]
fn malformed_numerals_that_read_as_identifiers() {
    assert_eq!(parse("1ebit").unwrap(), id("1ebit"));
    assert_eq!(parse("123abc").unwrap(), id("123abc"));
}

#[test]
fn this_expression() {
    assert_eq!(parse("this").unwrap(), Node::This);
    assert_eq!(
        parse("this.x").unwrap(),
        Node::member(Node::This, id("x"), false)
    );
}

#[test]
fn variables_and_members() {
    assert_eq!(parse("abc").unwrap(), id("abc"));
    assert_eq!(
        parse("a.b[c[0]]").unwrap(),
        Node::member(
            Node::member(id("a"), id("b"), false),
            Node::member(id("c"), num(0.0), true),
            true
        )
    );
    assert_eq!(parse("a .b").unwrap(), Node::member(id("a"), id("b"), false));
    assert_eq!(
        parse("a.b. c").unwrap(),
        Node::member(Node::member(id("a"), id("b"), false), id("c"), false)
    );
    assert_eq!(
        parse("a.b  [ c ] ").unwrap(),
        Node::member(Node::member(id("a"), id("b"), false), id("c"), true)
    );
}

#[test]
fn postfix_chains_are_left_associative() {
    let expected = Node::member(
        Node::member(
            Node::member(
                Node::call(
                    Node::member(
                        Node::member(id("$foo"), id("bar"), true),
                        id("baz"),
                        true,
                    ),
                    vec![id("a"), id("bb"), id("c")],
                ),
                id("other12"),
                false,
            ),
            string("lawl", "'lawl'"),
            true,
        ),
        num(12.0),
        true,
    );

    assert_eq!(
        parse("$foo[ bar][ baz]    (a, bb ,   c  )   .other12 ['lawl'][12]").unwrap(),
        expected
    );
}

#[test]
fn calls() {
    assert_eq!(parse("f()").unwrap(), Node::call(id("f"), vec![]));
    assert_eq!(
        parse("a(b, c(d,e), f)").unwrap(),
        Node::call(
            id("a"),
            vec![id("b"), Node::call(id("c"), vec![id("d"), id("e")]), id("f")]
        )
    );
    assert_eq!(
        parse("f(a b)").unwrap(),
        Node::call(id("f"), vec![id("a"), id("b")])
    );
    assert_eq!(
        parse("(Object.variable.toLowerCase())  .  length == 3").unwrap(),
        Node::binary(
            "==",
            Node::member(
                Node::call(
                    Node::member(
                        Node::member(id("Object"), id("variable"), false),
                        id("toLowerCase"),
                        false
                    ),
                    vec![]
                ),
                id("length"),
                false
            ),
            num(3.0)
        )
    );
}

#[test]
fn arrays() {
    assert_eq!(parse("[]").unwrap(), Node::Array { elements: vec![] });
    assert_eq!(parse("[a]").unwrap(), Node::Array { elements: vec![id("a")] });
    assert_eq!(
        parse("[1, ,2 3]").unwrap(),
        Node::Array {
            elements: vec![num(1.0), num(2.0), num(3.0)]
        }
    );
    assert_eq!(
        parse("[1] + [2]").unwrap(),
        Node::binary(
            "+",
            Node::Array { elements: vec![num(1.0)] },
            Node::Array { elements: vec![num(2.0)] }
        )
    );
}

#[test]
fn compound_sequences() {
    assert_eq!(
        parse("a b + c").unwrap(),
        Node::Compound {
            body: vec![id("a"), Node::binary("+", id("b"), id("c"))]
        }
    );
    assert_eq!(
        parse("a; b, c").unwrap(),
        Node::Compound {
            body: vec![id("a"), id("b"), id("c")]
        }
    );
    assert_eq!(parse(";").unwrap(), Node::Compound { body: vec![] });
    assert_eq!(parse("").unwrap(), Node::Compound { body: vec![] });
}

#[test]
fn arithmetic_follows_standard_precedence() {
    let cases = [
        ("1", 1.0),
        ("1+2", 3.0),
        ("1*2", 2.0),
        ("1*(2+3)", 5.0),
        ("(1+2)*3", 9.0),
        ("(1+2)*3+4-2-5+2/2*3", 9.0),
        ("1 + 2-   3*\t4 /8", 1.5),
        ("-1 + 2", 1.0),
        ("10 % 4 * 3", 6.0),
        ("2 - -3", 5.0),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(&parse(source).unwrap()), expected, "{source}");
    }
}

#[test]
fn binary_tree_shape() {
    assert_eq!(
        parse("1+2*3").unwrap(),
        Node::binary("+", num(1.0), Node::binary("*", num(2.0), num(3.0)))
    );
    assert_eq!(
        parse("a - b - c").unwrap(),
        Node::binary("-", Node::binary("-", id("a"), id("b")), id("c"))
    );
    assert_eq!(
        parse("a * b + c * d").unwrap(),
        Node::binary(
            "+",
            Node::binary("*", id("a"), id("b")),
            Node::binary("*", id("c"), id("d"))
        )
    );
}

#[test]
fn logical_operators_use_their_own_node() {
    let node = parse("a && b || c").unwrap();
    assert_eq!(node.type_name(), "LogicalExpression");
    assert_eq!(
        node,
        Node::Logical {
            operator: "||".into(),
            left: Box::new(Node::Logical {
                operator: "&&".into(),
                left: Box::new(id("a")),
                right: Box::new(id("b")),
            }),
            right: Box::new(id("c")),
        }
    );
}

#[test]
fn comparison_chain_inside_groups() {
    let node = parse("(a(b(c[!d]).e).f+'hi'==2) === true").unwrap();

    let inner_call = Node::call(
        id("b"),
        vec![Node::member(id("c"), Node::unary("!", id("d")), true)],
    );
    let outer_call = Node::call(id("a"), vec![Node::member(inner_call, id("e"), false)]);
    let sum = Node::binary(
        "+",
        Node::member(outer_call, id("f"), false),
        string("hi", "'hi'"),
    );

    assert_eq!(
        node,
        Node::binary("===", Node::binary("==", sum, num(2.0)), boolean(true))
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(
        parse("a !== b").unwrap(),
        Node::binary("!==", id("a"), id("b"))
    );
    assert_eq!(parse("a>>>b").unwrap(), Node::binary(">>>", id("a"), id("b")));
    assert_eq!(parse("a<=b").unwrap(), Node::binary("<=", id("a"), id("b")));
    assert_eq!(parse("a==b").unwrap(), Node::binary("==", id("a"), id("b")));
    assert_eq!(parse("a!=b").unwrap(), Node::binary("!=", id("a"), id("b")));
}

#[test]
fn unary_operators() {
    assert_eq!(parse("!a").unwrap(), Node::unary("!", id("a")));
    assert_eq!(
        parse("~-x").unwrap(),
        Node::unary("~", Node::unary("-", id("x")))
    );
}

#[test]
fn parsing_is_idempotent() {
    let source = "a.b(c, d=1)[e] ? f : -g * 2";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}
